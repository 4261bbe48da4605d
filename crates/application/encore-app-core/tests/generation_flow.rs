use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use encore_app_core::{CopywriterPort, EncoreApplication, Route};
use encore_core::DescriptionRequest;
use encore_infra::SERVICE_ERROR_FALLBACK;

/// Records whether the service was reached and replies with a fixed string.
struct RecordingCopywriter {
    called: Arc<AtomicBool>,
    reply: &'static str,
    delay: Duration,
}

#[async_trait::async_trait]
impl CopywriterPort for RecordingCopywriter {
    async fn generate_description(&self, _req: &DescriptionRequest) -> String {
        self.called.store(true, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.reply.to_string()
    }
}

fn app_with(reply: &'static str, delay: Duration) -> (EncoreApplication, Arc<AtomicBool>) {
    let called = Arc::new(AtomicBool::new(false));
    let app = EncoreApplication::with_copywriter(Arc::new(RecordingCopywriter {
        called: called.clone(),
        reply,
        delay,
    }));
    (app, called)
}

fn fill_generation_inputs(app: &mut EncoreApplication) {
    let draft = &mut app.state.wizard.as_mut().unwrap().draft;
    draft.title = "Demo Launch".into();
    draft.key_details = "speaker: Ana; free snacks".into();
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
fn generated_prose_lands_in_the_description_field() {
    let (mut app, called) = app_with("Uma experiência imperdível.", Duration::ZERO);
    app.navigate(Route::CreateEvent);
    fill_generation_inputs(&mut app);

    app.start_description_generation().unwrap();
    assert!(app.state.wizard.as_ref().unwrap().generating);

    let finished = drain_until(&mut app, Duration::from_secs(5), |app| {
        !app.state.wizard.as_ref().unwrap().generating
    });
    assert!(finished, "generation never completed");
    assert!(called.load(Ordering::SeqCst));
    assert_eq!(
        app.state.wizard.as_ref().unwrap().draft.description,
        "Uma experiência imperdível."
    );
}

#[test]
fn service_failure_fills_the_field_with_the_fallback_not_an_error() {
    // The copywriter boundary maps failures to the fixed fallback string,
    // so from the application's view a broken service is just that text.
    let (mut app, _called) = app_with(SERVICE_ERROR_FALLBACK, Duration::ZERO);
    app.navigate(Route::CreateEvent);
    fill_generation_inputs(&mut app);

    app.start_description_generation().unwrap();
    let finished = drain_until(&mut app, Duration::from_secs(5), |app| {
        !app.state.wizard.as_ref().unwrap().generating
    });
    assert!(finished);
    assert_eq!(
        app.state.wizard.as_ref().unwrap().draft.description,
        SERVICE_ERROR_FALLBACK
    );
    assert!(app.state.last_error.is_none(), "no error surface is raised");
}

#[test]
fn missing_title_or_details_never_starts_a_generation() {
    let (mut app, called) = app_with("nunca", Duration::ZERO);
    app.navigate(Route::CreateEvent);
    app.state.wizard.as_mut().unwrap().draft.key_details = "algo".into();

    app.start_description_generation().unwrap();

    let wizard = app.state.wizard.as_ref().unwrap();
    assert!(!wizard.generating);
    assert!(wizard.notice.is_some(), "precondition notice is shown");
    // Give a would-be task a moment to prove it never existed.
    std::thread::sleep(Duration::from_millis(50));
    assert!(!called.load(Ordering::SeqCst), "no request may be issued");
}

#[test]
fn results_arriving_after_the_wizard_unmounts_are_discarded() {
    let (mut app, _called) = app_with("tarde demais", Duration::from_millis(150));
    app.navigate(Route::CreateEvent);
    fill_generation_inputs(&mut app);

    app.start_description_generation().unwrap();
    // Leave mid-flight: the task is cancelled and its run id orphaned.
    app.navigate(Route::Home);
    app.navigate(Route::CreateEvent);

    std::thread::sleep(Duration::from_millis(300));
    app.handle_task_events();

    let wizard = app.state.wizard.as_ref().unwrap();
    assert!(wizard.draft.description.is_empty(), "stale result applied");
    assert!(!wizard.generating);
}

#[test]
fn restarting_generation_supersedes_the_first_run() {
    let (mut app, _called) = app_with("resposta", Duration::from_millis(100));
    app.navigate(Route::CreateEvent);
    fill_generation_inputs(&mut app);

    app.start_description_generation().unwrap();
    let first_run = app.state.wizard.as_ref().unwrap().run_id;

    // Force the in-flight flag off so a second start is allowed, as if the
    // button had been re-enabled.
    app.state.wizard.as_mut().unwrap().generating = false;
    app.start_description_generation().unwrap();
    let second_run = app.state.wizard.as_ref().unwrap().run_id;
    assert_ne!(first_run, second_run);

    let finished = drain_until(&mut app, Duration::from_secs(5), |app| {
        !app.state.wizard.as_ref().unwrap().generating
    });
    assert!(finished);
    // Only the live run may write the draft; its id is cleared afterwards.
    assert!(app.state.wizard.as_ref().unwrap().run_id.is_none());
    assert_eq!(
        app.state.wizard.as_ref().unwrap().draft.description,
        "resposta"
    );
}
