//! LLM provider abstractions for the escalation judge.
//!
//! The judge treats the external reasoning service as an opaque, best-effort
//! text oracle: one composed prompt in, one raw string out. This module
//! defines that boundary and ships a Gemini implementation behind the
//! `gemini` feature.
//!
//! ## Security
//!
//! Providers use the [`secrets`] module for credential handling so API keys
//! cannot leak through `Debug` output or error messages.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub mod secrets;

#[cfg(feature = "gemini")]
mod gemini;

pub use secrets::{ApiCredential, CredentialSource};

#[cfg(feature = "gemini")]
pub use gemini::{GeminiProvider, GEMINI_API_KEY_ENV};

/// Errors from LLM providers.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    #[error("Rate limit exceeded, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Response decode error: {0}")]
    DecodeError(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Configuration for one completion request.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    /// Model to use
    pub model: String,

    /// Maximum tokens to generate
    pub max_tokens: u32,

    /// Temperature (0.0 for as-deterministic-as-it-gets)
    pub temperature: f32,

    /// Request timeout
    pub timeout: Duration,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: "gemini-pro".to_string(),
            max_tokens: 512,
            temperature: 0.0,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Single-shot text-completion boundary.
///
/// Implementations are constructed once at process start and shared
/// read-only across requests; `complete` is the only operation that
/// suspends in the whole evaluation pipeline.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send one prompt and return the raw response text.
    async fn complete(
        &self,
        prompt: &str,
        config: &CompletionConfig,
    ) -> Result<String, ProviderError>;

    /// Check if the provider is usable (credential present etc.).
    async fn health_check(&self) -> bool;

    /// Provider name for logging.
    fn name(&self) -> &str;
}
