use crate::domain::{AdminState, AdminTab, AppState, CheckoutState, Route, WizardState};

use super::events::{AdminTaskEvent, DomainEvent, WizardTaskEvent};

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::RouteChanged(route) => apply_route_change(&mut state, route),

        DomainEvent::WizardTask { run_id: _, ev } => apply_wizard_event(&mut state, ev),

        DomainEvent::AdminTask { run_id: _, ev } => apply_admin_event(&mut state, ev),

        DomainEvent::UserError(msg) => state.last_error = Some(msg),
    }
    state
}

/// Per-view state lives exactly as long as its route: entering a view mounts
/// fresh state, leaving it drops whatever was there. Re-entering the same
/// event detail keeps the selection; switching events resets it.
fn apply_route_change(state: &mut AppState, route: Route) {
    state.wizard = match (&route, state.wizard.take()) {
        (Route::CreateEvent, Some(w)) => Some(w),
        (Route::CreateEvent, None) => Some(WizardState::default()),
        _ => None,
    };

    state.checkout = match (&route, state.checkout.take()) {
        (Route::EventDetail(id), Some(c)) if c.event_id == *id => Some(c),
        (Route::EventDetail(id), _) => Some(CheckoutState::new(id.clone())),
        _ => None,
    };

    state.admin = match (&route, state.admin.take()) {
        (Route::Admin, Some(a)) => Some(a),
        (Route::Admin, None) => Some(AdminState::default()),
        _ => None,
    };

    state.route = route;
}

fn apply_wizard_event(state: &mut AppState, ev: WizardTaskEvent) {
    match ev {
        WizardTaskEvent::GenerationFinished { description } => {
            if let Some(wizard) = state.wizard.as_mut() {
                wizard.draft.description = description;
                wizard.generating = false;
                wizard.run_id = None;
            }
        }

        WizardTaskEvent::Published => {
            // The draft is discarded, not persisted; publishing only leaves
            // the wizard and lands on the dashboard.
            state.wizard = None;
            apply_route_change(state, Route::Dashboard);
        }
    }
}

fn apply_admin_event(state: &mut AppState, ev: AdminTaskEvent) {
    match ev {
        AdminTaskEvent::SectionSaved { tab } => {
            if let Some(admin) = state.admin.as_mut() {
                if let Some(id) = checklist_item_for(tab) {
                    if let Some(item) = admin.checklist.iter_mut().find(|i| i.id == id) {
                        item.completed = true;
                    }
                }
                admin.saving = None;
                admin.run_id = None;
            }
        }
    }
}

/// Checklist item a tab's save unlocks. Security and Intelligence are
/// read-only panels with nothing to save.
pub fn checklist_item_for(tab: AdminTab) -> Option<&'static str> {
    match tab {
        AdminTab::Database => Some("inf-1"),
        AdminTab::Payments => Some("fin-1"),
        AdminTab::Security | AdminTab::Intelligence => None,
    }
}
