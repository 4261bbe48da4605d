use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::app_core::{AdminTaskEvent, DomainEvent, WizardTaskEvent};
use crate::domain::{AdminTab, TaskRunId};
use crate::ports::CopywriterPort;

use encore_core::DescriptionRequest;

/// Drives the application's background work: the single real network call
/// (description generation) and the fixed-delay timers simulating the
/// publish and admin-save round-trips.
///
/// Each concern holds a cancellation token tied to the view that started it.
/// `EncoreApplication::navigate` cancels the token when that view unmounts,
/// so a result arriving late is dropped instead of landing on released state.
pub struct TaskOrchestrator {
    copywriter: Arc<dyn CopywriterPort>,
    tx: mpsc::Sender<DomainEvent>,
    wizard_cancel: Option<CancellationToken>,
    admin_cancel: Option<CancellationToken>,
}

impl TaskOrchestrator {
    pub fn new(copywriter: Arc<dyn CopywriterPort>, tx: mpsc::Sender<DomainEvent>) -> Self {
        Self {
            copywriter,
            tx,
            wizard_cancel: None,
            admin_cancel: None,
        }
    }

    pub fn cancel_wizard_tasks(&mut self) {
        if let Some(token) = self.wizard_cancel.take() {
            token.cancel();
        }
    }

    pub fn cancel_admin_tasks(&mut self) {
        if let Some(token) = self.admin_cancel.take() {
            token.cancel();
        }
    }

    /// Single in-flight generation: starting a new one cancels the previous.
    pub fn start_generation(
        &mut self,
        req: DescriptionRequest,
        run_id: TaskRunId,
    ) -> anyhow::Result<()> {
        let token = self.fresh_wizard_token();
        let tx = self.tx.clone();
        let copywriter = self.copywriter.clone();

        std::thread::Builder::new()
            .name("encore-copywriter".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::UserError(format!(
                            "Failed to start async runtime: {e}"
                        )));
                        return;
                    }
                };

                rt.block_on(async move {
                    tokio::select! {
                        _ = token.cancelled() => {}
                        description = copywriter.generate_description(&req) => {
                            let _ = tx
                                .send(DomainEvent::WizardTask {
                                    run_id,
                                    ev: WizardTaskEvent::GenerationFinished { description },
                                })
                                .await;
                        }
                    }
                });
            })
            .context("Failed to spawn description generation worker thread")?;

        Ok(())
    }

    /// Simulated publish: fixed delay, then the terminal wizard transition.
    pub fn start_publish(&mut self, run_id: TaskRunId) -> anyhow::Result<()> {
        let token = self.fresh_wizard_token();
        let tx = self.tx.clone();
        let delay = Duration::from_millis(encore_config::PUBLISH_SIMULATION_DELAY_MS);

        std::thread::Builder::new()
            .name("encore-publish".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::UserError(format!(
                            "Failed to start async runtime: {e}"
                        )));
                        return;
                    }
                };

                rt.block_on(async move {
                    tokio::select! {
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {
                            let _ = tx
                                .send(DomainEvent::WizardTask {
                                    run_id,
                                    ev: WizardTaskEvent::Published,
                                })
                                .await;
                        }
                    }
                });
            })
            .context("Failed to spawn publish worker thread")?;

        Ok(())
    }

    /// Simulated section save: fixed delay, then the checklist flip.
    pub fn start_section_save(&mut self, tab: AdminTab, run_id: TaskRunId) -> anyhow::Result<()> {
        self.cancel_admin_tasks();
        let token = CancellationToken::new();
        self.admin_cancel = Some(token.clone());

        let tx = self.tx.clone();
        let delay = Duration::from_millis(encore_config::SAVE_SIMULATION_DELAY_MS);

        std::thread::Builder::new()
            .name("encore-admin-save".into())
            .spawn(move || {
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        let _ = tx.blocking_send(DomainEvent::UserError(format!(
                            "Failed to start async runtime: {e}"
                        )));
                        return;
                    }
                };

                rt.block_on(async move {
                    tokio::select! {
                        _ = token.cancelled() => {}
                        _ = tokio::time::sleep(delay) => {
                            let _ = tx
                                .send(DomainEvent::AdminTask {
                                    run_id,
                                    ev: AdminTaskEvent::SectionSaved { tab },
                                })
                                .await;
                        }
                    }
                });
            })
            .context("Failed to spawn admin save worker thread")?;

        Ok(())
    }

    fn fresh_wizard_token(&mut self) -> CancellationToken {
        self.cancel_wizard_tasks();
        let token = CancellationToken::new();
        self.wizard_cancel = Some(token.clone());
        token
    }
}
