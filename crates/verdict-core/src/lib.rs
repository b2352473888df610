//! # verdict-core
//!
//! Deterministic answer-validation engine for learning tasks.
//!
//! This crate answers one question: does a learner's submission satisfy a
//! task's validation criteria? It dispatches among built-in predicate
//! strategies keyed by the criteria `type` tag and reports an unrecognized
//! tag as a control signal so the caller can escalate to a natural-language
//! judge (see `verdict-runtime`).
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No LLM calls**: All evaluation here is rule-based
//! 3. **Total**: Strategies never panic and never suspend
//! 4. **Additive**: New criteria types register new strategies; existing
//!    ones are untouched
//!
//! ## Example
//!
//! ```rust
//! use verdict_core::{evaluate, CriteriaDescriptor, Evaluation, Submission};
//!
//! let criteria = CriteriaDescriptor::contains_all(["tokenizer", "embedding"]);
//! let submission = Submission::new("a tokenizer feeds the embedding layer");
//!
//! match evaluate(&criteria, &submission) {
//!     Evaluation::Decided(result) => assert!(result.is_valid),
//!     Evaluation::Unrecognized => unreachable!("contains-all is built in"),
//! }
//! ```

pub mod criteria;
pub mod strategies;
pub mod types;

// Re-export main types at crate root
pub use criteria::{CriteriaDescriptor, CriteriaError};
pub use strategies::{
    ContainsAllStrategy, ContainsAnyStrategy, EqualsStrategy, Evaluation,
    NumberBetweenStrategy, PatternStrategy, Strategy, StrategyRegistry,
};
pub use types::{Submission, TaskContext, ValidationResult};

/// Evaluate a submission against a criteria descriptor with the built-in
/// strategies.
///
/// This is the convenience entry point; callers evaluating many requests
/// should build one [`StrategyRegistry`] and reuse it.
pub fn evaluate(criteria: &CriteriaDescriptor, submission: &Submission) -> Evaluation {
    StrategyRegistry::with_builtins().evaluate(criteria, submission)
}
