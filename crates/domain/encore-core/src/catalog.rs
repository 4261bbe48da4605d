//! Hardcoded demo catalog. Every "backend" read in the application resolves
//! to one of these in-memory collections.

use chrono::NaiveDate;

use crate::{
    Event, EventCategory, MetricKind, RevenuePoint, SaleRecord, SalesMetric, TicketBatch,
    TicketType,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn batch(
    id: &str,
    name: &str,
    price_cents: u64,
    quantity: u32,
    sold: u32,
    ticket_type: TicketType,
) -> TicketBatch {
    TicketBatch {
        id: id.to_string(),
        name: name.to_string(),
        price_cents,
        quantity,
        sold,
        ticket_type,
    }
}

/// The curated events shown on the home grid.
pub fn featured_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Startup Summit 2024".into(),
            description: "Junte-se à maior conferência de startups da América Latina. \
                Conecte-se com investidores, fundadores e líderes da indústria. Teremos \
                mais de 50 palestrantes discutindo IA, SaaS, Fintech e muito mais. Food \
                trucks e happy hour de networking incluídos."
                .into(),
            location: "Expo Center Norte, São Paulo".into(),
            date: date(2024, 11, 15),
            time: "09:00".into(),
            image_url: "https://picsum.photos/800/400?random=1".into(),
            organizer: "Tech Ventures".into(),
            category: EventCategory::Business,
            batches: vec![batch("b1", "Lote Antecipado", 15_000, 100, 50, TicketType::Paid)],
        },
        Event {
            id: "2".into(),
            title: "React Universe Conf".into(),
            description: "Mergulhe fundo no ecossistema React e novidades do futuro.".into(),
            location: "Remoto / Online".into(),
            date: date(2024, 12, 1),
            time: "14:00".into(),
            image_url: "https://picsum.photos/800/400?random=2".into(),
            organizer: "JS Community".into(),
            category: EventCategory::Technology,
            batches: vec![batch("b2", "Entrada Geral", 0, 500, 300, TicketType::Free)],
        },
        Event {
            id: "3".into(),
            title: "Jazz no Parque".into(),
            description: "Uma noite de jazz suave, boa comida e vibrações incríveis.".into(),
            location: "Parque Ibirapuera, SP".into(),
            date: date(2024, 10, 20),
            time: "18:00".into(),
            image_url: "https://picsum.photos/800/400?random=3".into(),
            organizer: "Cultura da Cidade".into(),
            category: EventCategory::Music,
            batches: vec![batch("b3", "Área VIP", 8_000, 200, 20, TicketType::Paid)],
        },
    ]
}

pub fn event_by_id(id: &str) -> Option<Event> {
    featured_events().into_iter().find(|e| e.id == id)
}

/// Category filter pills on the home screen. "Todos" is always first.
pub fn category_pills() -> Vec<&'static str> {
    vec![
        "Todos",
        "Música",
        "Tecnologia",
        "Negócios",
        "Workshops",
        "Esportes",
        "Arte",
    ]
}

pub fn sales_metrics() -> Vec<SalesMetric> {
    vec![
        SalesMetric {
            label: "Receita Total".into(),
            kind: MetricKind::Currency,
            value: 12_450_000.0,
            change_pct: 12.5,
            positive: true,
        },
        SalesMetric {
            label: "Ingressos Vendidos".into(),
            kind: MetricKind::Count,
            value: 1240.0,
            change_pct: 8.2,
            positive: true,
        },
        SalesMetric {
            label: "Eventos Ativos".into(),
            kind: MetricKind::Count,
            value: 4.0,
            change_pct: 0.0,
            positive: true,
        },
        SalesMetric {
            label: "Conversão".into(),
            kind: MetricKind::Percent,
            value: 3.2,
            change_pct: -1.1,
            positive: false,
        },
    ]
}

pub fn weekly_revenue() -> Vec<RevenuePoint> {
    let days = [
        ("Seg", 400_000, 240),
        ("Ter", 300_000, 139),
        ("Qua", 200_000, 98),
        ("Qui", 278_000, 308),
        ("Sex", 189_000, 480),
        ("Sab", 239_000, 380),
        ("Dom", 349_000, 430),
    ];
    days.iter()
        .map(|(day, revenue_cents, tickets)| RevenuePoint {
            day: day.to_string(),
            revenue_cents: *revenue_cents,
            tickets: *tickets,
        })
        .collect()
}

pub fn recent_sales() -> Vec<SaleRecord> {
    (0..5)
        .map(|_| SaleRecord {
            initials: "PS".into(),
            label: "Compra de Ingresso".into(),
            event: "Tech Conference 2024".into(),
            amount_cents: 15_000,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_finds_featured_events_and_rejects_unknown_ids() {
        assert_eq!(event_by_id("1").map(|e| e.title), Some("Startup Summit 2024".into()));
        assert!(event_by_id("nope").is_none());
    }

    #[test]
    fn every_event_has_a_lead_batch() {
        for event in featured_events() {
            assert!(event.lead_batch().is_some(), "{} has no batch", event.id);
        }
    }

    #[test]
    fn weekly_series_covers_the_full_week() {
        let series = weekly_revenue();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].day, "Seg");
        assert_eq!(series[6].day, "Dom");
    }
}
