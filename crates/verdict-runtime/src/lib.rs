//! # verdict-runtime
//!
//! LLM escalation judge and evaluation pipeline for Verdict.
//!
//! `verdict-core` decides every recognized criteria type deterministically
//! and never makes an LLM call. This crate adds the fallback path: when a
//! criteria tag has no deterministic strategy, the submission is escalated
//! to an external natural-language judge, and the judge's untyped reply is
//! coerced back into the same strict result contract.
//!
//! ## Failure containment
//!
//! The judge is an untrusted text oracle. A malformed reply is contained
//! inside [`judge::EscalationJudge`] and degraded to a fixed safe-default
//! failure result; only the external call failing outright surfaces as an
//! error, so callers can tell "could not evaluate" apart from "evaluated
//! and it's wrong".
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use verdict_runtime::{EvaluationPipeline, EvaluationRequest, GeminiProvider};
//!
//! let provider = Arc::new(GeminiProvider::from_env()?);
//! let pipeline = EvaluationPipeline::new(provider);
//!
//! let request = EvaluationRequest::from_json(payload)?;
//! let result = pipeline.evaluate(&request).await?;
//! println!("{}", serde_json::to_string(&result)?);
//! ```

pub mod judge;
pub mod pipeline;
pub mod prompts;
pub mod providers;

// Re-export main types at crate root
pub use judge::{coerce_reply, Coercion, EscalationJudge, JudgeError, SAFE_DEFAULT_FEEDBACK};
pub use pipeline::{
    EvaluationPipeline, EvaluationPipelineBuilder, EvaluationRequest, PipelineError,
};
pub use providers::{ApiCredential, CompletionConfig, CredentialSource, LlmProvider, ProviderError};

#[cfg(feature = "gemini")]
pub use providers::{GeminiProvider, GEMINI_API_KEY_ENV};
