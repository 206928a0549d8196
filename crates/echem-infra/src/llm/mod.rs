//! Concrete completion provider implementations.

pub mod gemini;
