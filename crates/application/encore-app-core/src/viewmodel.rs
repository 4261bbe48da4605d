//! Pure projections of `AppState` (and the static catalog) consumed by the
//! UI. Everything here is formatting and derivation; no side effects.

use crate::domain::{AdminTab, AppState};
use encore_core::{
    catalog, money, readiness_percent, ChecklistCategory, ChecklistItem, Event, MetricKind,
    WizardStep,
};

// --- Home ---

#[derive(Debug, Clone)]
pub struct EventCardVm {
    pub id: String,
    pub title: String,
    pub category_label: &'static str,
    pub date_label: String,
    pub time: String,
    pub location: String,
    pub summary: String,
    pub price_label: String,
}

#[derive(Debug, Clone)]
pub struct HomeVm {
    pub cards: Vec<EventCardVm>,
    pub pills: Vec<&'static str>,
}

pub fn home_vm() -> HomeVm {
    let cards = catalog::featured_events()
        .into_iter()
        .map(|event| EventCardVm {
            id: event.id.clone(),
            title: event.title.clone(),
            category_label: event.category.label(),
            date_label: money::short_date_pt(event.date),
            time: event.time.clone(),
            location: event.location.clone(),
            summary: event.description.clone(),
            price_label: event
                .lead_batch()
                .map(|b| money::price_label(b.price_cents))
                .unwrap_or_else(|| money::price_label(0)),
        })
        .collect();

    HomeVm {
        cards,
        pills: catalog::category_pills(),
    }
}

// --- Event detail / checkout ---

#[derive(Debug, Clone)]
pub struct EventDetailVm {
    pub event: Event,
    pub category_label: &'static str,
    pub date_label: String,
    pub batch_name: String,
    pub unit_price_label: String,
    pub quantity: u32,
    pub total_cents: u64,
    pub total_label: String,
    pub modal_open: bool,
    pub receipt: Option<String>,
}

pub fn event_detail_vm(state: &AppState, id: &str) -> Option<EventDetailVm> {
    let event = catalog::event_by_id(id)?;

    let (quantity, modal_open, receipt) = state
        .checkout
        .as_ref()
        .filter(|c| c.event_id == id)
        .map(|c| (c.quantity, c.modal_open, c.receipt.clone()))
        .unwrap_or((encore_config::MIN_TICKET_QUANTITY, false, None));

    let unit_cents = event.lead_batch().map(|b| b.price_cents).unwrap_or(0);
    let total_cents = unit_cents * u64::from(quantity);

    Some(EventDetailVm {
        category_label: event.category.label(),
        date_label: money::long_date_pt(event.date),
        batch_name: event
            .lead_batch()
            .map(|b| b.name.clone())
            .unwrap_or_default(),
        unit_price_label: money::price_label(unit_cents),
        quantity,
        total_cents,
        total_label: money::price_label(total_cents),
        modal_open,
        receipt,
        event,
    })
}

// --- Dashboard ---

#[derive(Debug, Clone)]
pub struct MetricTileVm {
    pub label: String,
    pub value_label: String,
    pub change_label: String,
    pub positive: bool,
}

#[derive(Debug, Clone)]
pub struct ChartPointVm {
    pub day: String,
    pub revenue_cents: u64,
    /// Revenue scaled into `[0, 1]` against the weekly peak.
    pub normalized: f32,
}

#[derive(Debug, Clone)]
pub struct RecentSaleVm {
    pub initials: String,
    pub label: String,
    pub event: String,
    pub amount_label: String,
}

#[derive(Debug, Clone)]
pub struct DashboardVm {
    pub tiles: Vec<MetricTileVm>,
    pub chart_points: Vec<ChartPointVm>,
    pub chart_peak_label: String,
    pub recent: Vec<RecentSaleVm>,
}

fn metric_value_label(kind: MetricKind, value: f64) -> String {
    match kind {
        MetricKind::Currency => money::format_brl(value as u64),
        MetricKind::Count => format!("{}", value as i64),
        MetricKind::Percent => format!("{value:.1}%"),
    }
}

pub fn dashboard_vm() -> DashboardVm {
    let tiles = catalog::sales_metrics()
        .into_iter()
        .map(|m| MetricTileVm {
            value_label: metric_value_label(m.kind, m.value),
            change_label: format!("{:.1}%", m.change_pct.abs()),
            positive: m.positive,
            label: m.label,
        })
        .collect();

    let series = catalog::weekly_revenue();
    let peak = series.iter().map(|p| p.revenue_cents).max().unwrap_or(0);
    let chart_points = series
        .into_iter()
        .map(|p| ChartPointVm {
            normalized: if peak == 0 {
                0.0
            } else {
                p.revenue_cents as f32 / peak as f32
            },
            day: p.day,
            revenue_cents: p.revenue_cents,
        })
        .collect();

    let recent = catalog::recent_sales()
        .into_iter()
        .map(|s| RecentSaleVm {
            initials: s.initials,
            label: s.label,
            event: s.event,
            amount_label: format!("+{}", money::format_brl(s.amount_cents)),
        })
        .collect();

    DashboardVm {
        tiles,
        chart_points,
        chart_peak_label: money::format_brl(peak),
        recent,
    }
}

// --- Wizard ---

#[derive(Debug, Clone)]
pub struct WizardSummaryVm {
    pub title: String,
    pub when: String,
    pub location: String,
    pub price_label: String,
}

#[derive(Debug, Clone)]
pub struct WizardVm {
    pub step: WizardStep,
    pub can_generate: bool,
    pub generating: bool,
    pub publishing: bool,
    pub notice: Option<String>,
    pub summary: WizardSummaryVm,
    pub can_publish: bool,
}

pub fn wizard_vm(state: &AppState) -> Option<WizardVm> {
    let wizard = state.wizard.as_ref()?;
    let draft = &wizard.draft;

    // An empty or unparseable price is sold as free, never as "R$ " + blank.
    let price_label = match money::parse_brl_input(&draft.price) {
        None | Some(0) => "Grátis".to_string(),
        Some(cents) => money::format_brl(cents),
    };

    let when = if draft.date.trim().is_empty() && draft.time.trim().is_empty() {
        "A definir".to_string()
    } else {
        format!("{} às {}", draft.date.trim(), draft.time.trim())
    };

    let can_generate = !wizard.generating
        && encore_core::DescriptionRequest::from_draft(draft)
            .validate()
            .is_ok();

    Some(WizardVm {
        step: wizard.step,
        can_generate,
        generating: wizard.generating,
        publishing: wizard.publishing,
        notice: wizard.notice.clone(),
        summary: WizardSummaryVm {
            title: draft.title.clone(),
            when,
            location: draft.location.clone(),
            price_label,
        },
        can_publish: wizard.step == WizardStep::MediaReview && !wizard.publishing,
    })
}

// --- Admin ---

#[derive(Debug, Clone)]
pub struct ChecklistGroupVm {
    pub label: &'static str,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone)]
pub struct AdminVm {
    pub active_tab: AdminTab,
    pub readiness: u8,
    pub can_deploy: bool,
    pub saving: Option<AdminTab>,
    pub groups: Vec<ChecklistGroupVm>,
}

pub fn admin_vm(state: &AppState) -> Option<AdminVm> {
    let admin = state.admin.as_ref()?;
    let readiness = readiness_percent(&admin.checklist);

    let groups = ChecklistCategory::ORDER
        .iter()
        .map(|category| ChecklistGroupVm {
            label: category.label(),
            items: admin
                .checklist
                .iter()
                .filter(|i| i.category == *category)
                .cloned()
                .collect(),
        })
        .filter(|g| !g.items.is_empty())
        .collect();

    Some(AdminVm {
        active_tab: admin.active_tab,
        readiness,
        can_deploy: readiness == 100,
        saving: admin.saving,
        groups,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AdminState, WizardState};

    fn state_with_wizard(price: &str) -> AppState {
        let mut wizard = WizardState::default();
        wizard.draft.price = price.into();
        AppState {
            wizard: Some(wizard),
            ..Default::default()
        }
    }

    #[test]
    fn empty_price_summarizes_as_gratis_never_a_dangling_currency_sign() {
        for input in ["", "   ", "abc", "0"] {
            let vm = wizard_vm(&state_with_wizard(input)).unwrap();
            assert_eq!(vm.summary.price_label, "Grátis", "input {input:?}");
        }

        let vm = wizard_vm(&state_with_wizard("150")).unwrap();
        assert_eq!(vm.summary.price_label, "R$ 150");
    }

    #[test]
    fn unset_schedule_summarizes_as_a_definir() {
        let vm = wizard_vm(&state_with_wizard("")).unwrap();
        assert_eq!(vm.summary.when, "A definir");

        let mut state = state_with_wizard("");
        {
            let draft = &mut state.wizard.as_mut().unwrap().draft;
            draft.date = "2024-11-15".into();
            draft.time = "09:00".into();
        }
        let vm = wizard_vm(&state).unwrap();
        assert_eq!(vm.summary.when, "2024-11-15 às 09:00");
    }

    #[test]
    fn metric_values_format_by_kind_not_by_label() {
        assert_eq!(
            metric_value_label(MetricKind::Currency, 12_450_000.0),
            "R$ 124.500"
        );
        assert_eq!(metric_value_label(MetricKind::Count, 1240.0), "1240");
        assert_eq!(metric_value_label(MetricKind::Percent, 3.2), "3.2%");
    }

    #[test]
    fn checklist_groups_follow_the_fixed_category_order() {
        let state = AppState {
            admin: Some(AdminState::default()),
            route: crate::domain::Route::Admin,
            ..Default::default()
        };
        let vm = admin_vm(&state).unwrap();
        let labels: Vec<_> = vm.groups.iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec![
                "Infraestrutura Core",
                "Segurança & Acesso",
                "Módulo Financeiro",
                "Motor de I.A.",
                "UX & Client Side",
            ]
        );
    }

    #[test]
    fn chart_series_normalizes_against_the_weekly_peak() {
        let vm = dashboard_vm();
        let peak = vm
            .chart_points
            .iter()
            .map(|p| p.revenue_cents)
            .max()
            .unwrap();
        for point in &vm.chart_points {
            let expected = point.revenue_cents as f32 / peak as f32;
            assert!((point.normalized - expected).abs() < f32::EPSILON);
            assert!(point.normalized <= 1.0);
        }
    }
}
