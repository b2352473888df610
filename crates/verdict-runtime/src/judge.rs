//! Escalation judge: the fallback path for unrecognized criteria.
//!
//! Invoked only when no deterministic strategy matches a criteria tag. The
//! judge composes one prompt, makes one provider call (no retry), and
//! coerces the untyped reply back into the strict `ValidationResult`
//! contract. The reply is an untrusted boundary: a malformed reply is
//! contained here and degraded to a fixed safe-default failure result, never
//! propagated. Only a failure of the external call itself surfaces as an
//! error.

use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;

use verdict_core::{CriteriaDescriptor, Submission, TaskContext, ValidationResult};

use crate::prompts::compose_judge_prompt;
use crate::providers::{CompletionConfig, LlmProvider, ProviderError};

/// Feedback carried by the safe-default result when the judge's reply
/// cannot be trusted.
pub const SAFE_DEFAULT_FEEDBACK: &str =
    "We couldn't complete the evaluation this time. Please try again.";

/// Errors from the escalation judge.
///
/// Parse failures never appear here; they degrade to the safe-default
/// result. Only the external call failing outright is an error.
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Judge call failed: {0}")]
    Provider(#[from] ProviderError),
}

/// Outcome of coercing a raw judge reply.
#[derive(Debug, Clone, PartialEq)]
pub enum Coercion {
    /// The reply was the required two-field JSON object.
    Parsed(ValidationResult),

    /// The reply was malformed; the raw text is kept for diagnostics.
    Malformed { raw: String },
}

/// Wire shape the judge is instructed to reply with.
#[derive(Debug, Deserialize)]
struct JudgeReply {
    #[serde(rename = "isValid")]
    is_valid: bool,
    feedback: String,
}

/// Coerce a raw judge reply into the result contract.
///
/// Tolerates a Markdown code fence around the JSON and unknown extra
/// fields; anything else (invalid JSON, missing fields, empty feedback) is
/// `Malformed`.
pub fn coerce_reply(raw: &str) -> Coercion {
    let text = raw.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(text)
        .trim();

    match serde_json::from_str::<JudgeReply>(text) {
        Ok(reply) if !reply.feedback.trim().is_empty() => Coercion::Parsed(ValidationResult {
            is_valid: reply.is_valid,
            feedback: reply.feedback,
        }),
        _ => Coercion::Malformed {
            raw: raw.to_string(),
        },
    }
}

/// The fixed failure-leaning result returned when judge output cannot be
/// trusted.
pub fn safe_default_result() -> ValidationResult {
    ValidationResult::fail(SAFE_DEFAULT_FEEDBACK)
}

/// Natural-language fallback judge.
///
/// Holds a read-only, process-lifetime provider; each `judge` call is
/// independent and stateless.
pub struct EscalationJudge {
    provider: Arc<dyn LlmProvider>,
    config: CompletionConfig,
}

impl EscalationJudge {
    /// Create a judge over the given provider with default completion
    /// settings.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            config: CompletionConfig::default(),
        }
    }

    /// Override the completion settings.
    pub fn with_config(mut self, config: CompletionConfig) -> Self {
        self.config = config;
        self
    }

    /// Judge a submission the deterministic strategies could not handle.
    ///
    /// Returns `Err` only when the external call itself cannot be
    /// completed; a malformed reply returns the safe-default result.
    pub async fn judge(
        &self,
        context: &TaskContext,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> Result<ValidationResult, JudgeError> {
        let prompt = compose_judge_prompt(context, criteria, submission);

        tracing::info!(
            tag = criteria.kind,
            provider = self.provider.name(),
            model = self.config.model,
            "Escalating to natural-language judge"
        );

        let raw = self.provider.complete(&prompt, &self.config).await?;

        match coerce_reply(&raw) {
            Coercion::Parsed(result) => {
                tracing::info!(is_valid = result.is_valid, "Judge verdict parsed");
                Ok(result)
            }
            Coercion::Malformed { raw } => {
                tracing::warn!(response = raw, "Judge reply was malformed, using safe default");
                Ok(safe_default_result())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    /// Provider returning a canned reply.
    struct StaticProvider(&'static str);

    #[async_trait]
    impl LlmProvider for StaticProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _config: &CompletionConfig,
        ) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn name(&self) -> &str {
            "static"
        }
    }

    /// Provider whose calls always fail at the transport level.
    struct UnreachableProvider;

    #[async_trait]
    impl LlmProvider for UnreachableProvider {
        async fn complete(
            &self,
            _prompt: &str,
            _config: &CompletionConfig,
        ) -> Result<String, ProviderError> {
            Err(ProviderError::HttpError("connection refused".to_string()))
        }

        async fn health_check(&self) -> bool {
            false
        }

        fn name(&self) -> &str {
            "unreachable"
        }
    }

    fn essay_inputs() -> (TaskContext, CriteriaDescriptor, Submission) {
        (
            TaskContext::new("Write about attention."),
            CriteriaDescriptor::tagged("essay_quality"),
            Submission::new("Attention weighs token relevance."),
        )
    }

    #[test]
    fn test_coerce_well_formed_reply() {
        let coerced = coerce_reply(r#"{"isValid": true, "feedback": "ok"}"#);
        assert_eq!(coerced, Coercion::Parsed(ValidationResult::pass("ok")));
    }

    #[test]
    fn test_coerce_strips_code_fence() {
        let coerced = coerce_reply("```json\n{\"isValid\": false, \"feedback\": \"wrong\"}\n```");
        assert_eq!(coerced, Coercion::Parsed(ValidationResult::fail("wrong")));
    }

    #[test]
    fn test_coerce_tolerates_extra_fields() {
        let coerced =
            coerce_reply(r#"{"isValid": true, "feedback": "ok", "confidence": 0.9}"#);
        assert_eq!(coerced, Coercion::Parsed(ValidationResult::pass("ok")));
    }

    #[test]
    fn test_coerce_rejects_non_json_and_missing_fields() {
        assert!(matches!(
            coerce_reply("I think the answer is fine."),
            Coercion::Malformed { .. }
        ));
        assert!(matches!(
            coerce_reply(r#"{"isValid": true}"#),
            Coercion::Malformed { .. }
        ));
        assert!(matches!(
            coerce_reply(r#"{"isValid": "yes", "feedback": "ok"}"#),
            Coercion::Malformed { .. }
        ));
        // Empty feedback breaks the result contract.
        assert!(matches!(
            coerce_reply(r#"{"isValid": true, "feedback": ""}"#),
            Coercion::Malformed { .. }
        ));
    }

    #[tokio::test]
    async fn test_well_formed_reply_passes_through_unchanged() {
        let judge = EscalationJudge::new(Arc::new(StaticProvider(
            r#"{"isValid": true, "feedback": "ok"}"#,
        )));
        let (context, criteria, submission) = essay_inputs();

        let result = judge.judge(&context, &criteria, &submission).await.unwrap();
        assert_eq!(result, ValidationResult::pass("ok"));
    }

    #[tokio::test]
    async fn test_malformed_reply_degrades_to_safe_default() {
        let judge =
            EscalationJudge::new(Arc::new(StaticProvider("Sure! The answer looks great.")));
        let (context, criteria, submission) = essay_inputs();

        let result = judge.judge(&context, &criteria, &submission).await.unwrap();
        assert_eq!(result, safe_default_result());
        assert!(!result.is_valid);
    }

    mod coercion_properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Coercion is total over arbitrary judge text: it never panics
            // and always lands in one of the two variants.
            #[test]
            fn prop_coerce_reply_is_total(raw in ".{0,200}") {
                match coerce_reply(&raw) {
                    Coercion::Parsed(result) => prop_assert!(!result.feedback.is_empty()),
                    Coercion::Malformed { raw: kept } => prop_assert_eq!(kept, raw),
                }
            }

            // Any well-formed two-field reply is projected unchanged.
            #[test]
            fn prop_well_formed_replies_pass_through(
                is_valid in any::<bool>(),
                feedback in "[a-zA-Z][a-zA-Z ]{0,39}",
            ) {
                let raw = serde_json::json!({
                    "isValid": is_valid,
                    "feedback": feedback.clone(),
                })
                .to_string();

                let coerced = coerce_reply(&raw);
                prop_assert_eq!(
                    coerced,
                    Coercion::Parsed(ValidationResult { is_valid, feedback })
                );
            }
        }
    }

    #[tokio::test]
    async fn test_transport_failure_is_an_error_not_a_panic() {
        let judge = EscalationJudge::new(Arc::new(UnreachableProvider));
        let (context, criteria, submission) = essay_inputs();

        let result = judge.judge(&context, &criteria, &submission).await;
        assert!(matches!(
            result,
            Err(JudgeError::Provider(ProviderError::HttpError(_)))
        ));
    }
}
