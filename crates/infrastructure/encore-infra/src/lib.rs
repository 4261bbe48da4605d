pub mod copywriter;
pub mod net;

// Re-exports for convenience
pub use copywriter::{
    CopywriterError, GeminiCopywriter, EMPTY_RESPONSE_FALLBACK, SERVICE_ERROR_FALLBACK,
};
pub use net::default_http_client;
