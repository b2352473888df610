//! Core data types for answer evaluation.

use serde::{Deserialize, Serialize};

/// A learner's submission: one opaque string.
///
/// Strategies decide how to interpret it (literal text, parseable number,
/// URL, ...). A submission is immutable for the duration of one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission(String);

impl Submission {
    /// Create a submission from any string-like value.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The raw submission text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the submission is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Submission {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Submission {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Free-text description of the task the submission answers.
///
/// Passed through to the escalation judge verbatim; deterministic strategies
/// never inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskContext(String);

impl TaskContext {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TaskContext {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskContext {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// The single output contract of the evaluation engine.
///
/// Both the deterministic strategies and the escalation judge produce this
/// shape and nothing else. `feedback` is always non-empty and agrees with
/// `is_valid`: a passing result never carries failure wording and vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the submission satisfied the criteria.
    #[serde(rename = "isValid")]
    pub is_valid: bool,

    /// Human-readable feedback for the learner.
    pub feedback: String,
}

impl ValidationResult {
    /// A passing result. `feedback` must be non-empty.
    pub fn pass(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            feedback: feedback.into(),
        }
    }

    /// A failing result. `feedback` must be non-empty.
    pub fn fail(feedback: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            feedback: feedback.into(),
        }
    }
}
