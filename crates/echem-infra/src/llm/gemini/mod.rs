//! Google Gemini completion provider.
//!
//! `client` holds the [`GeminiProvider`]; `types` holds the
//! Gemini-specific wire structures for the `generateContent` endpoint.

mod client;
mod types;

pub use client::GeminiProvider;
