//! Exact-match strategy.

use crate::criteria::CriteriaDescriptor;
use crate::types::{Submission, ValidationResult};

use super::Strategy;

const EXACT_MATCH: &str = "Correct! The value is exactly what was expected.";
const NO_MATCH: &str = "The value does not match. Check it character by character.";

/// Valid iff the submission is character-for-character identical to `value`
/// (full string, case-sensitive). An absent `value` can never be matched.
pub struct EqualsStrategy;

impl Strategy for EqualsStrategy {
    fn tag(&self) -> &'static str {
        "string_equals"
    }

    fn evaluate(
        &self,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> ValidationResult {
        let matches = criteria
            .value
            .as_deref()
            .is_some_and(|expected| submission.as_str() == expected);

        if matches {
            ValidationResult::pass(EXACT_MATCH)
        } else {
            ValidationResult::fail(NO_MATCH)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let criteria = CriteriaDescriptor::equals("transformer");

        assert!(EqualsStrategy
            .evaluate(&criteria, &Submission::new("transformer"))
            .is_valid);

        // Any whitespace or case difference flips the verdict.
        assert!(!EqualsStrategy
            .evaluate(&criteria, &Submission::new("transformer "))
            .is_valid);
        assert!(!EqualsStrategy
            .evaluate(&criteria, &Submission::new("Transformer"))
            .is_valid);
    }

    #[test]
    fn test_absent_expected_value_never_matches() {
        let criteria = CriteriaDescriptor::tagged("string_equals");
        assert!(!EqualsStrategy
            .evaluate(&criteria, &Submission::new(""))
            .is_valid);
    }
}
