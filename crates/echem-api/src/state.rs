//! Application state shared by every request handler.
//!
//! The state is read-only after startup: the relay service (holding the
//! type-erased provider) and the loaded configuration, both Arc'd.
//! Requests never share mutable state, so no locking exists anywhere in
//! the request path.

use std::sync::Arc;
use std::time::Duration;

use echem_core::chat::service::ChatService;
use echem_core::llm::box_provider::BoxCompletionProvider;
use echem_types::config::GlobalConfig;

/// The relay service pinned to the type-erased provider.
pub type ConcreteChatService = ChatService<BoxCompletionProvider>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub config: Arc<GlobalConfig>,
}

impl AppState {
    /// Wire the state from loaded configuration and a provider selected
    /// at startup.
    pub fn new(config: GlobalConfig, provider: BoxCompletionProvider) -> Self {
        let chat_service = ChatService::new(
            provider,
            config.llm.model.clone(),
            Duration::from_secs(config.llm.request_timeout_secs),
        );

        Self {
            chat_service: Arc::new(chat_service),
            config: Arc::new(config),
        }
    }
}
