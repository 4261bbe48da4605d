use std::sync::Arc;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::app_core::{reduce, DomainEvent};
use crate::domain::{AdminTab, AppState, Route, TaskRunId};
use crate::orchestrator::TaskOrchestrator;
use crate::ports::CopywriterPort;

use encore_core::{CoverImage, DescriptionRequest, WizardStep};

pub struct EncoreApplication {
    pub state: AppState,

    orchestrator: TaskOrchestrator,

    msg_rx: mpsc::Receiver<DomainEvent>,
    msg_tx: mpsc::Sender<DomainEvent>,
}

impl Default for EncoreApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoreApplication {
    pub fn new() -> Self {
        let client =
            encore_infra::default_http_client().unwrap_or_else(|_| reqwest::Client::new());
        let copywriter = Arc::new(encore_infra::GeminiCopywriter::from_env(client));
        Self::with_copywriter(copywriter)
    }

    /// Construction seam: inject any copywriter implementation (tests use
    /// canned and failing stubs here).
    pub fn with_copywriter(copywriter: Arc<dyn CopywriterPort>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(100);

        Self {
            state: AppState::default(),
            orchestrator: TaskOrchestrator::new(copywriter, msg_tx.clone()),
            msg_rx,
            msg_tx,
        }
    }

    // --- Navigation ---

    pub fn navigate(&mut self, route: Route) {
        if self.state.route != route {
            // A view's background work dies with the view.
            if self.state.route == Route::CreateEvent {
                self.orchestrator.cancel_wizard_tasks();
            }
            if self.state.route == Route::Admin {
                self.orchestrator.cancel_admin_tasks();
            }
        }
        self.apply(DomainEvent::RouteChanged(route));
    }

    /// Call this from the UI loop/tick to process async results. Results
    /// whose run id no longer matches the owning view are stale (the view
    /// unmounted or restarted the task) and are discarded.
    pub fn handle_task_events(&mut self) {
        while let Ok(ev) = self.msg_rx.try_recv() {
            let live = match &ev {
                DomainEvent::WizardTask { run_id, .. } => {
                    self.state.wizard.as_ref().and_then(|w| w.run_id) == Some(*run_id)
                }
                DomainEvent::AdminTask { run_id, .. } => {
                    self.state.admin.as_ref().and_then(|a| a.run_id) == Some(*run_id)
                }
                _ => true,
            };
            if !live {
                continue;
            }
            self.apply(ev);
        }
    }

    pub fn is_busy(&self) -> bool {
        let wizard_busy = self
            .state
            .wizard
            .as_ref()
            .map(|w| w.generating || w.publishing)
            .unwrap_or(false);
        let admin_busy = self
            .state
            .admin
            .as_ref()
            .map(|a| a.saving.is_some())
            .unwrap_or(false);
        wizard_busy || admin_busy
    }

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(self.state.clone(), ev);
    }

    // --- Wizard ---

    pub fn advance_wizard(&mut self) {
        if let Some(wizard) = self.state.wizard.as_mut() {
            wizard.step = wizard.step.next();
        }
    }

    pub fn back_wizard(&mut self) {
        if let Some(wizard) = self.state.wizard.as_mut() {
            wizard.step = wizard.step.back();
        }
    }

    /// Kick off the copywriter for the current draft. The precondition check
    /// runs first: without a title and key details no request is issued and
    /// the wizard shows a notice instead.
    pub fn start_description_generation(&mut self) -> anyhow::Result<()> {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return Ok(());
        };
        if wizard.generating {
            return Ok(());
        }

        let req = DescriptionRequest::from_draft(&wizard.draft);
        if let Err(msg) = req.validate() {
            wizard.notice = Some(msg.to_string());
            return Ok(());
        }

        wizard.notice = None;
        let run_id: TaskRunId = Uuid::new_v4();
        wizard.generating = true;
        wizard.run_id = Some(run_id);

        if let Err(e) = self.orchestrator.start_generation(req, run_id) {
            if let Some(wizard) = self.state.wizard.as_mut() {
                wizard.generating = false;
                wizard.run_id = None;
            }
            self.apply(DomainEvent::UserError(e.to_string()));
            return Err(e);
        }
        Ok(())
    }

    /// Terminal wizard action, only meaningful on the review step. Waits the
    /// simulated round-trip, then discards the draft and lands on the
    /// dashboard.
    pub fn publish_draft(&mut self) -> anyhow::Result<()> {
        let Some(wizard) = self.state.wizard.as_mut() else {
            return Ok(());
        };
        if wizard.publishing || wizard.step != WizardStep::MediaReview {
            return Ok(());
        }

        let run_id: TaskRunId = Uuid::new_v4();
        wizard.publishing = true;
        wizard.run_id = Some(run_id);

        if let Err(e) = self.orchestrator.start_publish(run_id) {
            if let Some(wizard) = self.state.wizard.as_mut() {
                wizard.publishing = false;
                wizard.run_id = None;
            }
            self.apply(DomainEvent::UserError(e.to_string()));
            return Err(e);
        }
        Ok(())
    }

    pub fn set_cover_image(&mut self, file_name: String, bytes: Vec<u8>) {
        if let Some(wizard) = self.state.wizard.as_mut() {
            wizard.draft.cover = Some(CoverImage {
                file_name,
                bytes: bytes.into(),
            });
        }
    }

    pub fn dismiss_wizard_notice(&mut self) {
        if let Some(wizard) = self.state.wizard.as_mut() {
            wizard.notice = None;
        }
    }

    // --- Checkout ---

    pub fn increment_tickets(&mut self) {
        if let Some(checkout) = self.state.checkout.as_mut() {
            checkout.quantity = checkout.quantity.saturating_add(1);
        }
    }

    pub fn decrement_tickets(&mut self) {
        if let Some(checkout) = self.state.checkout.as_mut() {
            checkout.quantity = encore_config::clamp_quantity(checkout.quantity.saturating_sub(1));
        }
    }

    pub fn open_checkout(&mut self) {
        if let Some(checkout) = self.state.checkout.as_mut() {
            checkout.modal_open = true;
        }
    }

    pub fn close_checkout(&mut self) {
        if let Some(checkout) = self.state.checkout.as_mut() {
            checkout.modal_open = false;
            checkout.receipt = None;
        }
    }

    /// Simulated payment confirmation. No transaction record is created.
    pub fn confirm_purchase(&mut self) {
        if let Some(checkout) = self.state.checkout.as_mut() {
            checkout.receipt = Some("Pagamento simulado com sucesso!".to_string());
        }
    }

    // --- Admin ---

    pub fn select_admin_tab(&mut self, tab: AdminTab) {
        if let Some(admin) = self.state.admin.as_mut() {
            admin.active_tab = tab;
        }
    }

    /// Simulated save for the active tab: after a fixed delay the checklist
    /// item tied to the tab flips to completed. Nothing is stored.
    pub fn save_admin_section(&mut self) -> anyhow::Result<()> {
        let Some(admin) = self.state.admin.as_mut() else {
            return Ok(());
        };
        if admin.saving.is_some() {
            return Ok(());
        }

        let tab = admin.active_tab;
        let run_id: TaskRunId = Uuid::new_v4();
        admin.saving = Some(tab);
        admin.run_id = Some(run_id);

        if let Err(e) = self.orchestrator.start_section_save(tab, run_id) {
            if let Some(admin) = self.state.admin.as_mut() {
                admin.saving = None;
                admin.run_id = None;
            }
            self.apply(DomainEvent::UserError(e.to_string()));
            return Err(e);
        }
        Ok(())
    }
}
