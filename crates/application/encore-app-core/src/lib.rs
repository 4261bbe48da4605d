pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod orchestrator;
pub mod ports;
pub mod viewmodel;

pub use app::EncoreApplication;
pub use app_core::*;
pub use domain::{
    AdminState, AdminTab, AppState, CheckoutState, DatabaseEngine, DatabaseForm, PaymentForm,
    PaymentProvider, Route, TaskRunId, WizardState,
};
pub use ports::CopywriterPort;
pub use viewmodel::*;
