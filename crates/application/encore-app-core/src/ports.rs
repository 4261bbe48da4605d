use async_trait::async_trait;
use encore_core::DescriptionRequest;
use encore_infra::GeminiCopywriter;

/// Seam to the generative-text service. Implementations are infallible at
/// this boundary: a failed call surfaces as fallback prose, never an error.
#[async_trait]
pub trait CopywriterPort: Send + Sync {
    async fn generate_description(&self, req: &DescriptionRequest) -> String;
}

#[async_trait]
impl CopywriterPort for GeminiCopywriter {
    async fn generate_description(&self, req: &DescriptionRequest) -> String {
        GeminiCopywriter::generate_description(self, req).await
    }
}
