//! Substring-presence strategies.

use crate::criteria::CriteriaDescriptor;
use crate::types::{Submission, ValidationResult};

use super::Strategy;

const ALL_PRESENT: &str = "Excellent! Your answer includes every required element.";
const SOME_MISSING: &str =
    "Your answer does not include all of the expected elements. Review and try again.";

const ANY_PRESENT: &str = "We found one of the key terms. Good work!";
const NONE_PRESENT: &str = "None of the key terms were found. Try again.";

/// Valid iff every entry in `values` appears in the submission as a literal,
/// case-sensitive substring. An empty or absent list is vacuously valid.
pub struct ContainsAllStrategy;

impl Strategy for ContainsAllStrategy {
    fn tag(&self) -> &'static str {
        "string_contains_all"
    }

    fn evaluate(
        &self,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> ValidationResult {
        let values = criteria.values.as_deref().unwrap_or_default();
        let all_present = values
            .iter()
            .all(|value| submission.as_str().contains(value.as_str()));

        if all_present {
            ValidationResult::pass(ALL_PRESENT)
        } else {
            ValidationResult::fail(SOME_MISSING)
        }
    }
}

/// Valid iff at least one entry in `values` appears in the submission as a
/// literal substring. An empty or absent list is invalid: nothing can match.
pub struct ContainsAnyStrategy;

impl Strategy for ContainsAnyStrategy {
    fn tag(&self) -> &'static str {
        "string_contains_any"
    }

    fn evaluate(
        &self,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> ValidationResult {
        let values = criteria.values.as_deref().unwrap_or_default();
        let any_present = values
            .iter()
            .any(|value| submission.as_str().contains(value.as_str()));

        if any_present {
            ValidationResult::pass(ANY_PRESENT)
        } else {
            ValidationResult::fail(NONE_PRESENT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn all() -> ContainsAllStrategy {
        ContainsAllStrategy
    }

    fn any() -> ContainsAnyStrategy {
        ContainsAnyStrategy
    }

    #[test]
    fn test_contains_all_every_value_required() {
        let criteria = CriteriaDescriptor::contains_all(["a", "b"]);

        let result = all().evaluate(&criteria, &Submission::new("abc"));
        assert!(result.is_valid);

        // Removing a required value flips the verdict.
        let result = all().evaluate(&criteria, &Submission::new("ac"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_contains_all_is_case_sensitive() {
        let criteria = CriteriaDescriptor::contains_all(["Token"]);
        let result = all().evaluate(&criteria, &Submission::new("the token is here"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_contains_all_empty_values_vacuously_valid() {
        let criteria = CriteriaDescriptor::contains_all(Vec::<String>::new());
        assert!(all().evaluate(&criteria, &Submission::new("")).is_valid);

        // Absent list behaves the same as an empty one.
        let criteria = CriteriaDescriptor::tagged("string_contains_all");
        assert!(all().evaluate(&criteria, &Submission::new("x")).is_valid);
    }

    #[test]
    fn test_contains_any_one_match_suffices() {
        let criteria = CriteriaDescriptor::contains_any(["gradient", "backprop"]);

        let result = any().evaluate(&criteria, &Submission::new("we use backprop"));
        assert!(result.is_valid);

        let result = any().evaluate(&criteria, &Submission::new("nothing relevant"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_contains_any_empty_values_always_invalid() {
        let criteria = CriteriaDescriptor::contains_any(Vec::<String>::new());
        let result = any().evaluate(&criteria, &Submission::new("anything at all"));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_feedback_matches_verdict() {
        let criteria = CriteriaDescriptor::contains_all(["x"]);
        let pass = all().evaluate(&criteria, &Submission::new("x"));
        let fail = all().evaluate(&criteria, &Submission::new("y"));
        assert!(!pass.feedback.is_empty());
        assert!(!fail.feedback.is_empty());
        assert_ne!(pass.feedback, fail.feedback);
    }

    proptest! {
        // A submission built by concatenating the required values always
        // contains each of them.
        #[test]
        fn prop_concatenation_satisfies_contains_all(
            values in proptest::collection::vec("[a-z]{1,8}", 0..5)
        ) {
            let criteria = CriteriaDescriptor::contains_all(values.clone());
            let submission = Submission::new(values.concat());
            prop_assert!(all().evaluate(&criteria, &submission).is_valid);
        }
    }
}
