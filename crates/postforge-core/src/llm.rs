//! LlmProvider trait definition.
//!
//! The one abstraction between the generator and a hosted model API.
//! Uses native async fn in traits (RPITIT, Rust 2024 edition); the app
//! issues a single non-streaming completion per action, so there is no
//! streaming surface.
//!
//! Implementations live in postforge-infra (e.g., `GroqProvider`).

use postforge_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends.
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
