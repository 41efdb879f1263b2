//! Generative-text collaborator
//!
//! Phrases section findings as prose. Supports multiple LLM backends
//! (Anthropic, OpenAI, Ollama) behind one sync client; BYOK (bring your
//! own key) via environment variables.
//!
//! The rest of the crate consumes this module only through the
//! [`TextCompleter`] trait: one prompt in, one block of text out. Model
//! output is never parsed as structured data beyond line splitting.

mod client;

pub use client::{AiClient, AiConfig, LlmBackend};

use thiserror::Error;

/// Errors that can occur in the AI module
#[derive(Error, Debug)]
pub enum AiError {
    #[error("Missing API key: {env_var} not set. Get your key at {signup_url}")]
    MissingApiKey { env_var: String, signup_url: String },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

pub type AiResult<T> = Result<T, AiError>;

/// The narrow contract the analyzer depends on.
///
/// Sampling means output is not guaranteed deterministic even with fixed
/// parameters; callers must tolerate variable phrasing.
pub trait TextCompleter: Send + Sync {
    fn complete(&self, prompt: &str) -> AiResult<String>;
}
