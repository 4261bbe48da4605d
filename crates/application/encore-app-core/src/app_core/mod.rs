pub mod events;
pub mod reducer;

pub use events::{AdminTaskEvent, DomainEvent, WizardTaskEvent};
pub use reducer::reduce;
