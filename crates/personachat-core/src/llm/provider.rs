//! LlmProvider trait definition.
//!
//! The single abstraction over the upstream completion service. Uses native
//! async fn in traits (RPITIT, Rust 2024 edition); implementations live in
//! personachat-infra (e.g., `OpenAiCompatibleProvider`).

use personachat_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for chat-completion backends.
///
/// Calls are synchronous from the orchestrator's perspective: `complete`
/// blocks its request until the provider responds or the HTTP client's
/// default timeout fires. No retry layer sits on top.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
