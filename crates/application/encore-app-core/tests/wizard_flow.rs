use std::sync::Arc;
use std::time::{Duration, Instant};

use encore_app_core::{CopywriterPort, EncoreApplication, Route};
use encore_core::{DescriptionRequest, WizardStep};

struct SilentCopywriter;

#[async_trait::async_trait]
impl CopywriterPort for SilentCopywriter {
    async fn generate_description(&self, _req: &DescriptionRequest) -> String {
        String::new()
    }
}

fn app() -> EncoreApplication {
    EncoreApplication::with_copywriter(Arc::new(SilentCopywriter))
}

fn drain_until(
    app: &mut EncoreApplication,
    timeout: Duration,
    mut done: impl FnMut(&EncoreApplication) -> bool,
) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        app.handle_task_events();
        if done(app) {
            return true;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    false
}

#[test]
fn entering_the_wizard_mounts_an_empty_draft() {
    let mut app = app();
    app.navigate(Route::CreateEvent);

    let wizard = app.state.wizard.as_ref().expect("wizard mounted");
    assert_eq!(wizard.step, WizardStep::Basics);
    assert!(wizard.draft.title.is_empty());
    assert!(wizard.draft.description.is_empty());
}

#[test]
fn steps_move_one_at_a_time_in_both_directions() {
    let mut app = app();
    app.navigate(Route::CreateEvent);

    let step = |app: &EncoreApplication| app.state.wizard.as_ref().map(|w| w.step);

    app.advance_wizard();
    assert_eq!(step(&app), Some(WizardStep::DetailsAi));
    app.advance_wizard();
    assert_eq!(step(&app), Some(WizardStep::MediaReview));
    app.advance_wizard();
    assert_eq!(step(&app), Some(WizardStep::MediaReview));

    app.back_wizard();
    assert_eq!(step(&app), Some(WizardStep::DetailsAi));
    app.back_wizard();
    assert_eq!(step(&app), Some(WizardStep::Basics));
    app.back_wizard();
    assert_eq!(step(&app), Some(WizardStep::Basics));
}

#[test]
fn step_one_fields_survive_a_round_trip_to_review_and_back() {
    let mut app = app();
    app.navigate(Route::CreateEvent);

    {
        let draft = &mut app.state.wizard.as_mut().unwrap().draft;
        draft.title = "Summit de Inovação 2024".into();
        draft.location = "Expo Center, SP".into();
        draft.date = "2024-11-15".into();
        draft.time = "09:00".into();
        draft.price = "150".into();
    }

    app.advance_wizard();
    app.advance_wizard();
    app.back_wizard();
    app.back_wizard();

    let draft = &app.state.wizard.as_ref().unwrap().draft;
    assert_eq!(draft.title, "Summit de Inovação 2024");
    assert_eq!(draft.location, "Expo Center, SP");
    assert_eq!(draft.date, "2024-11-15");
    assert_eq!(draft.time, "09:00");
    assert_eq!(draft.price, "150");
}

#[test]
fn leaving_the_wizard_discards_the_draft() {
    let mut app = app();
    app.navigate(Route::CreateEvent);
    app.state.wizard.as_mut().unwrap().draft.title = "Rascunho".into();

    app.navigate(Route::Home);
    assert!(app.state.wizard.is_none());

    app.navigate(Route::CreateEvent);
    let wizard = app.state.wizard.as_ref().unwrap();
    assert!(wizard.draft.title.is_empty(), "draft must not survive");
    assert_eq!(wizard.step, WizardStep::Basics);
}

#[test]
fn publish_is_a_no_op_outside_the_review_step() {
    let mut app = app();
    app.navigate(Route::CreateEvent);

    app.publish_draft().unwrap();
    assert!(!app.state.wizard.as_ref().unwrap().publishing);
}

#[test]
fn publishing_waits_the_simulated_round_trip_then_lands_on_the_dashboard() {
    let mut app = app();
    app.navigate(Route::CreateEvent);
    app.advance_wizard();
    app.advance_wizard();

    app.publish_draft().unwrap();
    assert!(app.state.wizard.as_ref().unwrap().publishing);

    let finished = drain_until(&mut app, Duration::from_secs(5), |app| {
        app.state.route == Route::Dashboard
    });
    assert!(finished, "publish never completed");
    assert!(app.state.wizard.is_none(), "draft is discarded on publish");
}
