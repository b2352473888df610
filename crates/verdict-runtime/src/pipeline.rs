//! Request-level evaluation pipeline.
//!
//! Wires the deterministic strategy registry to the escalation judge:
//! caller-input errors are rejected before either runs, a recognized tag is
//! decided synchronously, and only an unrecognized tag suspends on the
//! judge call.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use verdict_core::{
    CriteriaDescriptor, Evaluation, StrategyRegistry, Submission, TaskContext,
    ValidationResult,
};

use crate::judge::{EscalationJudge, JudgeError};
use crate::providers::{CompletionConfig, LlmProvider};

/// Errors from the evaluation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Required fields absent or criteria malformed. Raised before any
    /// strategy or judge runs.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The external judge call could not be completed. Distinct from a
    /// failing verdict: the submission was not evaluated at all.
    #[error(transparent)]
    Judge(#[from] JudgeError),

    /// The pipeline itself was assembled wrong (e.g. no judge provider).
    /// A process-configuration mistake, not a caller-input error.
    #[error("Pipeline not configured: {0}")]
    NotConfigured(String),
}

/// The inbound evaluation payload.
///
/// Field names on the wire are `userInput`, `validationCriteria`, and
/// `pillContent` ("pill" is this system's word for one bite-sized learning
/// task; its content is the task description shown to the learner).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    /// The learner's raw submission.
    #[serde(rename = "userInput")]
    pub user_input: String,

    /// How to judge the submission.
    #[serde(rename = "validationCriteria")]
    pub criteria: CriteriaDescriptor,

    /// Task description passed through to the judge. Optional; defaults to
    /// empty.
    #[serde(rename = "pillContent", default)]
    pub task_context: String,
}

impl EvaluationRequest {
    /// Parse a request from JSON, mapping malformed payloads to
    /// [`PipelineError::InvalidRequest`].
    pub fn from_json(json: &str) -> Result<Self, PipelineError> {
        let request: Self = serde_json::from_str(json)
            .map_err(|e| PipelineError::InvalidRequest(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    /// Check the caller-input invariants serde cannot express.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.user_input.is_empty() {
            return Err(PipelineError::InvalidRequest(
                "userInput must not be empty".to_string(),
            ));
        }
        self.criteria
            .validate()
            .map_err(|e| PipelineError::InvalidRequest(e.to_string()))
    }
}

/// Strategy dispatch plus judge fallback, shared read-only across requests.
///
/// Holds no mutable state: concurrent evaluations need no locking, and no
/// state survives from one call to the next.
pub struct EvaluationPipeline {
    registry: StrategyRegistry,
    judge: EscalationJudge,
}

impl EvaluationPipeline {
    /// Create a pipeline with the built-in strategies and default judge
    /// settings.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            registry: StrategyRegistry::with_builtins(),
            judge: EscalationJudge::new(provider),
        }
    }

    /// Start building a customized pipeline.
    pub fn builder() -> EvaluationPipelineBuilder {
        EvaluationPipelineBuilder::new()
    }

    /// Evaluate one request.
    ///
    /// Deterministic strategies complete synchronously; only an
    /// unrecognized criteria tag awaits the judge.
    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
    ) -> Result<ValidationResult, PipelineError> {
        request.validate()?;

        let submission = Submission::new(request.user_input.clone());

        match self.registry.evaluate(&request.criteria, &submission) {
            Evaluation::Decided(result) => {
                tracing::info!(
                    tag = request.criteria.kind,
                    is_valid = result.is_valid,
                    "Evaluation decided deterministically"
                );
                Ok(result)
            }
            Evaluation::Unrecognized => {
                let context = TaskContext::new(request.task_context.clone());
                let result = self
                    .judge
                    .judge(&context, &request.criteria, &submission)
                    .await?;
                Ok(result)
            }
        }
    }
}

/// Builder for [`EvaluationPipeline`].
pub struct EvaluationPipelineBuilder {
    provider: Option<Arc<dyn LlmProvider>>,
    registry: StrategyRegistry,
    completion: CompletionConfig,
}

impl EvaluationPipelineBuilder {
    pub fn new() -> Self {
        Self {
            provider: None,
            registry: StrategyRegistry::with_builtins(),
            completion: CompletionConfig::default(),
        }
    }

    /// Set the judge's LLM provider.
    pub fn provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Replace the strategy registry (e.g. with extra strategies
    /// registered).
    pub fn registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Override the judge's completion settings.
    pub fn completion(mut self, completion: CompletionConfig) -> Self {
        self.completion = completion;
        self
    }

    /// Build the pipeline. Fails when no provider was set.
    pub fn build(self) -> Result<EvaluationPipeline, PipelineError> {
        let provider = self.provider.ok_or_else(|| {
            PipelineError::NotConfigured("No judge provider set".to_string())
        })?;

        Ok(EvaluationPipeline {
            registry: self.registry,
            judge: EscalationJudge::new(provider).with_config(self.completion),
        })
    }
}

impl Default for EvaluationPipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
