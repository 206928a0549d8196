//! LLM request/response types for the e-Chem assistant.
//!
//! These types model the single capability this system consumes from its
//! completion provider: send one prompt, receive one text completion.
//! They are provider-agnostic; the Gemini-specific wire structures live
//! in echem-infra.

use serde::{Deserialize, Serialize};

/// Request to a completion provider.
///
/// The prompt is the fully assembled text (grounding prompt + separator +
/// user message); providers send it as a single user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
}

/// Response from a completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub text: String,
    #[serde(default)]
    pub usage: Usage,
}

/// Token usage reported by the provider, when available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// Errors from completion provider operations.
///
/// Error text in these variants is for server-side logging only; the HTTP
/// layer translates every variant into the same generic fallback response.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("rate limited (retry after {retry_after_ms:?}ms)")]
    RateLimited { retry_after_ms: Option<u64> },

    #[error("provider call timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_default() {
        let usage = Usage::default();
        assert_eq!(usage.prompt_tokens, 0);
        assert_eq!(usage.completion_tokens, 0);
    }

    #[test]
    fn test_completion_response_missing_usage_defaults() {
        let resp: CompletionResponse =
            serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(resp.text, "hello");
        assert_eq!(resp.usage, Usage::default());
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Timeout { seconds: 30 };
        assert_eq!(err.to_string(), "provider call timed out after 30s");

        let err = LlmError::Provider {
            message: "HTTP 503: overloaded".to_string(),
        };
        assert!(err.to_string().contains("503"));
    }

    #[test]
    fn test_completion_request_roundtrip() {
        let req = CompletionRequest {
            model: "gemini-2.5-flash".to_string(),
            prompt: "You are helpful.\n\nUser: hi".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        let parsed: CompletionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.model, req.model);
        assert_eq!(parsed.prompt, req.prompt);
    }
}
