//! GeminiProvider -- concrete [`CompletionProvider`] for the Google
//! Generative Language API.
//!
//! Sends `generateContent` requests with the API key in the
//! `x-goog-api-key` header. The key is never placed in the URL, where it
//! could leak into access logs, and is wrapped in
//! [`secrecy::SecretString`] so it cannot appear in Debug output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use echem_core::llm::provider::CompletionProvider;
use echem_types::llm::{CompletionRequest, CompletionResponse, LlmError, Usage};

use super::types::{GeminiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Production endpoint of the Generative Language API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Google Gemini completion provider.
///
/// Makes exactly one upstream attempt per `complete` call; transient
/// failures surface as errors rather than being retried.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    timeout: Duration,
}

// GeminiProvider intentionally does not derive Debug; the SecretString
// field already redacts itself, but omitting Debug removes the surface
// entirely.

impl GeminiProvider {
    /// Create a provider with the given credential and per-call timeout.
    pub fn new(api_key: SecretString, timeout: Duration) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LlmError::InvalidRequest(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        })
    }

    /// Override the base URL (used by tests to point at a mock server).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the `generateContent` URL for a model.
    fn url(&self, model: &str) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, model)
    }
}

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        let body = GenerateContentRequest::from_prompt(&request.prompt);

        let response = self
            .client
            .post(self.url(&request.model))
            .header("x-goog-api-key", self.api_key.expose_secret())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    LlmError::Timeout {
                        seconds: self.timeout.as_secs(),
                    }
                } else {
                    LlmError::Provider {
                        message: format!("HTTP request failed: {e}"),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            // Prefer the structured upstream message when present.
            let upstream = serde_json::from_str::<GeminiErrorResponse>(&error_body)
                .map(|e| e.error.message)
                .unwrap_or(error_body);

            return Err(match status.as_u16() {
                401 | 403 => LlmError::AuthenticationFailed,
                429 => LlmError::RateLimited {
                    retry_after_ms: None,
                },
                _ => LlmError::Provider {
                    message: format!("HTTP {status}: {upstream}"),
                },
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Deserialization(format!("failed to parse response: {e}")))?;

        let text = parsed.text().ok_or_else(|| LlmError::Provider {
            message: "response contained no usable candidates".to_string(),
        })?;

        let usage = parsed
            .usage_metadata
            .map(|meta| Usage {
                prompt_tokens: meta.prompt_token_count,
                completion_tokens: meta.candidates_token_count,
            })
            .unwrap_or_default();

        Ok(CompletionResponse { text, usage })
    }
}
