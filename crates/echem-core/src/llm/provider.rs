//! CompletionProvider trait definition.
//!
//! The single capability this system consumes from its LLM dependency:
//! one prompt in, one text completion out. Uses native async fn in traits
//! (RPITIT, Rust 2024 edition); implementations live in echem-infra.

use echem_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion provider backends (Gemini, stubs in tests).
///
/// Implementations must make exactly one upstream attempt per call; retry
/// policy, if any, belongs to callers.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
