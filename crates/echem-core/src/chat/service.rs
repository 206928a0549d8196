//! Chat service: one validated message in, one exchange out.
//!
//! The service owns the single suspension point of a request: the
//! provider call, bounded by a timeout so a stalled upstream cannot hold
//! a server worker indefinitely. Provider failures are logged here with
//! the original user message for diagnostics; the HTTP layer only ever
//! surfaces the fixed fallback text.

use std::time::Duration;

use tracing::{debug, error};

use echem_types::chat::ChatExchange;
use echem_types::llm::{CompletionRequest, LlmError};

use crate::llm::provider::CompletionProvider;
use crate::prompt;

/// Reply returned to the end user whenever the provider fails.
pub const FALLBACK_REPLY: &str = "I apologize, I'm currently unable to process your request. \
     Please try again in a few moments or contact our support team.";

/// Relays one validated message to the completion provider.
///
/// Generic over [`CompletionProvider`] so tests can inject stubs; the
/// application pins it to `BoxCompletionProvider`. Stateless across
/// calls: no transcript, no session, no shared mutable state.
pub struct ChatService<P: CompletionProvider> {
    provider: P,
    model: String,
    timeout: Duration,
}

impl<P: CompletionProvider> ChatService<P> {
    /// Create a service sending to `model` with the given per-call bound.
    pub fn new(provider: P, model: String, timeout: Duration) -> Self {
        Self {
            provider,
            model,
            timeout,
        }
    }

    /// The configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Relay one validated message and return the completed exchange.
    ///
    /// Makes exactly one provider attempt. A call that outlives the
    /// configured timeout fails with [`LlmError::Timeout`].
    pub async fn ask(&self, message: &str) -> Result<ChatExchange, LlmError> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompt::build_prompt(message),
        };

        let result = match tokio::time::timeout(self.timeout, self.provider.complete(&request))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(LlmError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        };

        match result {
            Ok(response) => {
                debug!(
                    provider = self.provider.name(),
                    model = %self.model,
                    prompt_tokens = response.usage.prompt_tokens,
                    completion_tokens = response.usage.completion_tokens,
                    "completion succeeded"
                );
                Ok(ChatExchange::new(message.to_string(), response.text))
            }
            Err(err) => {
                // Full detail stays server-side; the user message is kept
                // so a failing exchange can be reproduced.
                error!(
                    event = "completion_failed",
                    provider = self.provider.name(),
                    model = %self.model,
                    user_message = %message,
                    error = %err,
                    "completion provider failed"
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    use echem_types::llm::{CompletionResponse, Usage};

    /// Echoes the prompt it was sent and records it for inspection.
    ///
    /// The handles are shared so tests can observe the provider after it
    /// has moved into the service.
    struct EchoProvider {
        seen_prompt: Arc<Mutex<Option<String>>>,
        calls: Arc<AtomicU32>,
    }

    impl EchoProvider {
        fn new() -> Self {
            Self {
                seen_prompt: Arc::new(Mutex::new(None)),
                calls: Arc::new(AtomicU32::new(0)),
            }
        }
    }

    impl CompletionProvider for EchoProvider {
        fn name(&self) -> &str {
            "echo"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.seen_prompt.lock().unwrap() = Some(request.prompt.clone());
            Ok(CompletionResponse {
                text: request.prompt.clone(),
                usage: Usage::default(),
            })
        }
    }

    struct FailingProvider;

    impl CompletionProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            Err(LlmError::Provider {
                message: "HTTP 503: upstream exploded".to_string(),
            })
        }
    }

    struct SleepingProvider;

    impl CompletionProvider for SleepingProvider {
        fn name(&self) -> &str {
            "sleeping"
        }

        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            unreachable!("the service timeout fires first");
        }
    }

    fn service<P: CompletionProvider>(provider: P) -> ChatService<P> {
        ChatService::new(provider, "test-model".to_string(), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_ask_sends_grounding_prompt_plus_message() {
        let svc = service(EchoProvider::new());
        let exchange = svc.ask("What is e-Chem?").await.unwrap();

        let expected = format!("{}\n\nUser: What is e-Chem?", prompt::GROUNDING_PROMPT);
        assert_eq!(exchange.assistant_reply, expected);
        assert_eq!(exchange.user_message, "What is e-Chem?");
    }

    #[tokio::test]
    async fn test_ask_makes_exactly_one_attempt_per_call() {
        let provider = EchoProvider::new();
        let calls = provider.calls.clone();
        let seen_prompt = provider.seen_prompt.clone();

        let svc = service(provider);
        svc.ask("hello").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            seen_prompt.lock().unwrap().as_deref(),
            Some(prompt::build_prompt("hello").as_str())
        );

        svc.ask("again").await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_ask_propagates_provider_error_without_retry() {
        let svc = service(FailingProvider);
        let err = svc.ask("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Provider { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_ask_times_out() {
        let svc = ChatService::new(
            SleepingProvider,
            "m".to_string(),
            Duration::from_secs(1),
        );
        let err = svc.ask("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::Timeout { seconds: 1 }));
    }

    #[test]
    fn test_fallback_reply_is_the_fixed_text() {
        assert_eq!(
            FALLBACK_REPLY,
            "I apologize, I'm currently unable to process your request. \
             Please try again in a few moments or contact our support team."
        );
    }
}
