//! A minimal client for the Anthropic text completions API.
//!
//! This library builds a single completion request (prompt, model identifier,
//! maximum output token count), sends it to the `/v1/complete` endpoint, and
//! returns the completion text.

pub mod client;
pub mod error;
pub mod types;

// Re-export core types for easy usage
pub use client::Client;
pub use error::Error;
pub use types::*;
