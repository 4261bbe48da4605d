use std::sync::Arc;

use encore_app_core::{event_detail_vm, CopywriterPort, EncoreApplication, Route};
use encore_core::DescriptionRequest;

struct SilentCopywriter;

#[async_trait::async_trait]
impl CopywriterPort for SilentCopywriter {
    async fn generate_description(&self, _req: &DescriptionRequest) -> String {
        String::new()
    }
}

fn app_on_event(id: &str) -> EncoreApplication {
    let mut app = EncoreApplication::with_copywriter(Arc::new(SilentCopywriter));
    app.navigate(Route::EventDetail(id.into()));
    app
}

#[test]
fn quantity_never_drops_below_one() {
    let mut app = app_on_event("1");

    for _ in 0..10 {
        app.decrement_tickets();
    }
    assert_eq!(app.state.checkout.as_ref().unwrap().quantity, 1);

    app.increment_tickets();
    app.decrement_tickets();
    app.decrement_tickets();
    assert_eq!(app.state.checkout.as_ref().unwrap().quantity, 1);
}

#[test]
fn total_is_unit_price_times_quantity() {
    let mut app = app_on_event("1");
    for _ in 0..3 {
        app.increment_tickets();
    }

    let vm = event_detail_vm(&app.state, "1").expect("event exists");
    assert_eq!(vm.quantity, 4);
    // Lote Antecipado is R$ 150.
    assert_eq!(vm.total_cents, 4 * 15_000);
    assert_eq!(vm.total_label, "R$ 600");
}

#[test]
fn free_events_total_gratis_at_any_quantity() {
    let mut app = app_on_event("2");
    for _ in 0..5 {
        app.increment_tickets();
    }

    let vm = event_detail_vm(&app.state, "2").expect("event exists");
    assert_eq!(vm.total_cents, 0);
    assert_eq!(vm.total_label, "Grátis");
}

#[test]
fn purchase_is_a_simulated_receipt_only() {
    let mut app = app_on_event("1");

    app.open_checkout();
    assert!(app.state.checkout.as_ref().unwrap().modal_open);

    app.confirm_purchase();
    let vm = event_detail_vm(&app.state, "1").unwrap();
    assert_eq!(vm.receipt.as_deref(), Some("Pagamento simulado com sucesso!"));

    app.close_checkout();
    let checkout = app.state.checkout.as_ref().unwrap();
    assert!(!checkout.modal_open);
    assert!(checkout.receipt.is_none());
}

#[test]
fn leaving_the_detail_view_resets_the_selection() {
    let mut app = app_on_event("1");
    app.increment_tickets();
    app.increment_tickets();

    app.navigate(Route::Home);
    assert!(app.state.checkout.is_none());

    app.navigate(Route::EventDetail("1".into()));
    assert_eq!(app.state.checkout.as_ref().unwrap().quantity, 1);
}

#[test]
fn unknown_events_have_no_detail_vm() {
    let app = app_on_event("does-not-exist");
    assert!(event_detail_vm(&app.state, "does-not-exist").is_none());
}
