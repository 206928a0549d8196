//! Chat exchange types for the e-Chem assistant.
//!
//! A chat exchange is the single transient entity in the system: one user
//! message and the assistant reply produced for it. Exchanges are created
//! per HTTP request, never persisted, and discarded once the response has
//! been sent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed user/assistant exchange.
///
/// `user_message` has already passed validation (1..=5000 characters);
/// `assistant_reply` is the provider's text. Exchanges carry no identity
/// and have no relationship to one another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_message: String,
    pub assistant_reply: String,
    pub created_at: DateTime<Utc>,
}

impl ChatExchange {
    /// Create an exchange stamped with the current time.
    pub fn new(user_message: String, assistant_reply: String) -> Self {
        Self {
            user_message,
            assistant_reply,
            created_at: Utc::now(),
        }
    }
}

/// Success response body for `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Failure response body for `POST /chat` when the completion provider
/// is unavailable. `reply` carries the fixed fallback text, never the
/// upstream error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    pub reply: String,
    pub error: bool,
}

impl ErrorReply {
    /// Build the provider-failure body around the given fallback text.
    pub fn fallback(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            error: true,
        }
    }
}
