//! The relay service composing validation output, prompt assembly, and
//! the completion provider into one exchange.

pub mod service;

pub use service::{ChatService, FALLBACK_REPLY};
