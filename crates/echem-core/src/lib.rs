//! Relay pipeline logic for the e-Chem assistant.
//!
//! This crate owns everything between the HTTP surface and the concrete
//! provider implementation: the fixed grounding prompt, the request
//! validator, the [`llm::provider::CompletionProvider`] trait, and the
//! [`chat::service::ChatService`] that composes them.
//!
//! echem-core never depends on echem-infra; concrete providers are
//! injected by the application layer.

pub mod chat;
pub mod llm;
pub mod prompt;
pub mod validate;
