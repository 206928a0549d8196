//! Shared domain types for the e-Chem assistant.
//!
//! This crate contains the types used across the relay pipeline:
//! the chat exchange and its wire shapes, LLM request/response types,
//! validation errors, and global configuration.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod llm;
