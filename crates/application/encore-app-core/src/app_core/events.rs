use crate::domain::{AdminTab, Route, TaskRunId};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Navigation
    RouteChanged(Route),

    // Wizard background results
    WizardTask {
        run_id: TaskRunId,
        ev: WizardTaskEvent,
    },

    // Admin background results
    AdminTask {
        run_id: TaskRunId,
        ev: AdminTaskEvent,
    },

    // User-visible errors
    UserError(String),
}

#[derive(Debug, Clone)]
pub enum WizardTaskEvent {
    /// The copywriter produced text for the description field. On failure
    /// this carries one of the fixed fallback strings, never an error.
    GenerationFinished { description: String },
    /// The simulated publish round-trip completed.
    Published,
}

#[derive(Debug, Clone)]
pub enum AdminTaskEvent {
    /// The simulated save for a tab completed.
    SectionSaved { tab: AdminTab },
}
