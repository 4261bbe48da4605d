//! Central configuration constants for runtime defaults and simulated delays.

/// Generative-text model used by the description copywriter.
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";

/// Base URL of the generative-text service.
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the generative-text API key.
///
/// Read at client construction time; never baked into the binary.
pub const API_KEY_ENV: &str = "ENCORE_API_KEY";

/// Approximate word count requested from the copywriter.
pub const DESCRIPTION_WORD_TARGET: usize = 150;

/// Lower bound for the ticket quantity stepper.
pub const MIN_TICKET_QUANTITY: u32 = 1;

/// Delay applied by the simulated admin section save.
pub const SAVE_SIMULATION_DELAY_MS: u64 = 800;

/// Delay applied by the simulated event publish round-trip.
pub const PUBLISH_SIMULATION_DELAY_MS: u64 = 1000;

/// Convenience function to clamp a ticket quantity to the allowed floor.
pub fn clamp_quantity(v: u32) -> u32 {
    v.max(MIN_TICKET_QUANTITY)
}
