//! BRL formatting for the pt-BR storefront.

use chrono::{Datelike, NaiveDate};

const MONTHS_PT: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

const WEEKDAYS_PT: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Format an amount of cents as BRL. Whole amounts drop the decimal part,
/// matching how prices are displayed throughout the storefront.
pub fn format_brl(cents: u64) -> String {
    let reais = group_thousands(cents / 100);
    let rem = cents % 100;
    if rem == 0 {
        format!("R$ {reais}")
    } else {
        format!("R$ {reais},{rem:02}")
    }
}

/// Price label for a batch or total: zero is sold as "Grátis", never "R$ 0".
pub fn price_label(cents: u64) -> String {
    if cents == 0 {
        "Grátis".to_string()
    } else {
        format_brl(cents)
    }
}

/// Parse a user-typed price ("150", "150,50", "1.250,00", "R$ 80") into cents.
/// Empty or unparseable input yields `None`; callers render that as free.
pub fn parse_brl_input(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return None;
    }

    let cleaned: String = trimmed.chars().filter(|c| *c != '.').collect();
    let mut parts = cleaned.splitn(2, ',');
    let whole: u64 = parts.next()?.trim().parse().ok()?;
    let frac = match parts.next() {
        None => 0,
        Some(f) => {
            let f = f.trim();
            if f.is_empty() || f.len() > 2 || !f.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let v: u64 = f.parse().ok()?;
            if f.len() == 1 {
                v * 10
            } else {
                v
            }
        }
    };

    Some(whole * 100 + frac)
}

/// "15 Nov" — card-sized date.
pub fn short_date_pt(date: NaiveDate) -> String {
    let month = MONTHS_PT[date.month0() as usize];
    format!("{} {month}", date.day())
}

/// "Sexta, 15 Nov, 2024" — detail-page date.
pub fn long_date_pt(date: NaiveDate) -> String {
    let weekday = WEEKDAYS_PT[date.weekday().num_days_from_sunday() as usize];
    let month = MONTHS_PT[date.month0() as usize];
    format!("{weekday}, {} {month}, {}", date.day(), date.year())
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_drop_decimals_and_group_with_dots() {
        assert_eq!(format_brl(15_000), "R$ 150");
        assert_eq!(format_brl(12_450_000), "R$ 124.500");
        assert_eq!(format_brl(123_456_789_00), "R$ 123.456.789");
    }

    #[test]
    fn fractional_amounts_keep_two_digits() {
        assert_eq!(format_brl(15_050), "R$ 150,50");
        assert_eq!(format_brl(5), "R$ 0,05");
    }

    #[test]
    fn zero_is_gratis_not_zero_reais() {
        assert_eq!(price_label(0), "Grátis");
        assert_eq!(price_label(8_000), "R$ 80");
    }

    #[test]
    fn parses_plain_decimal_and_grouped_input() {
        assert_eq!(parse_brl_input("150"), Some(15_000));
        assert_eq!(parse_brl_input("150,5"), Some(15_050));
        assert_eq!(parse_brl_input("1.250,00"), Some(125_000));
        assert_eq!(parse_brl_input("R$ 80"), Some(8_000));
    }

    #[test]
    fn empty_or_garbage_input_is_none() {
        assert_eq!(parse_brl_input(""), None);
        assert_eq!(parse_brl_input("   "), None);
        assert_eq!(parse_brl_input("abc"), None);
        assert_eq!(parse_brl_input("10,999"), None);
    }

    #[test]
    fn dates_use_pt_br_names() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 15).unwrap();
        assert_eq!(short_date_pt(date), "15 Nov");
        assert_eq!(long_date_pt(date), "Sexta, 15 Nov, 2024");
    }
}
