//! Criteria strategies and the tag-keyed dispatch registry.
//!
//! Each strategy is one deterministic predicate tied to a single criteria
//! tag. Dispatch is a lookup, not a conditional: adding a new criteria type
//! means implementing [`Strategy`] and registering it, with no edits to the
//! existing strategies.

use std::collections::HashMap;

use crate::criteria::CriteriaDescriptor;
use crate::types::{Submission, ValidationResult};

mod contains;
mod equals;
mod numeric;
mod pattern;

pub use contains::{ContainsAllStrategy, ContainsAnyStrategy};
pub use equals::EqualsStrategy;
pub use numeric::NumberBetweenStrategy;
pub use pattern::PatternStrategy;

/// One deterministic predicate implementation for a single criteria tag.
///
/// # Contract
/// - Total: must return a result for every submission, never panic.
/// - Pure: no I/O, no randomness, same input gives same output.
/// - Self-contained feedback: the valid/invalid wording is tied to this
///   strategy, not shared generic text.
pub trait Strategy: Send + Sync {
    /// The criteria `type` tag this strategy handles.
    fn tag(&self) -> &'static str;

    /// Evaluate a submission against the descriptor.
    ///
    /// The descriptor is guaranteed to carry this strategy's tag; the
    /// strategy reads only its own fields and treats absent ones per its
    /// documented defaults.
    fn evaluate(&self, criteria: &CriteriaDescriptor, submission: &Submission)
        -> ValidationResult;
}

/// Outcome of a dispatch attempt.
///
/// `Unrecognized` is a control signal, not an error: it tells the caller to
/// escalate to the natural-language judge.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// A built-in strategy matched and produced a verdict.
    Decided(ValidationResult),

    /// No built-in strategy handles this criteria tag.
    Unrecognized,
}

/// Tag-keyed strategy registry.
pub struct StrategyRegistry {
    strategies: HashMap<&'static str, Box<dyn Strategy>>,
}

impl StrategyRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            strategies: HashMap::new(),
        }
    }

    /// A registry with the five built-in strategies.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(ContainsAllStrategy));
        registry.register(Box::new(ContainsAnyStrategy));
        registry.register(Box::new(EqualsStrategy));
        registry.register(Box::new(PatternStrategy));
        registry.register(Box::new(NumberBetweenStrategy));
        registry
    }

    /// Register a strategy under its own tag, replacing any previous entry.
    pub fn register(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.insert(strategy.tag(), strategy);
    }

    /// Whether a strategy is registered for the given tag.
    pub fn recognizes(&self, tag: &str) -> bool {
        self.strategies.contains_key(tag)
    }

    /// Registered tags, sorted for stable output.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.strategies.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Dispatch on the descriptor's tag.
    ///
    /// Returns [`Evaluation::Unrecognized`] when no strategy is registered
    /// for the tag, letting the caller invoke escalation.
    pub fn evaluate(
        &self,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> Evaluation {
        match self.strategies.get(criteria.kind.as_str()) {
            Some(strategy) => {
                let result = strategy.evaluate(criteria, submission);
                tracing::debug!(
                    tag = criteria.kind,
                    is_valid = result.is_valid,
                    "Strategy evaluated"
                );
                Evaluation::Decided(result)
            }
            None => Evaluation::Unrecognized,
        }
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
