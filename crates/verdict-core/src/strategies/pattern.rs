//! Regex-pattern strategy.

use lazy_static::lazy_static;
use regex::Regex;

use crate::criteria::CriteriaDescriptor;
use crate::types::{Submission, ValidationResult};

use super::Strategy;

const PATTERN_MATCHED: &str = "Valid URL! Connection established.";
const PATTERN_NOT_MATCHED: &str =
    "The submission does not match the expected pattern. Check the format.";
const PATTERN_UNREADABLE: &str =
    "The expected pattern could not be interpreted, so the submission was not accepted.";

lazy_static! {
    /// Default when the criteria omit a pattern: require a literal
    /// `https://` somewhere in the submission. This default comes from the
    /// URL-submission tasks this engine was first built for and is kept as
    /// documented behavior.
    static ref DEFAULT_URL_PATTERN: Regex = Regex::new("https://").unwrap();
}

/// Valid iff `pattern` (regular expression, search semantics: a match
/// anywhere in the string) matches the submission. Absent `pattern` falls
/// back to the default `https://` requirement.
pub struct PatternStrategy;

impl Strategy for PatternStrategy {
    fn tag(&self) -> &'static str {
        "url_matches_pattern"
    }

    fn evaluate(
        &self,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> ValidationResult {
        let matched = match criteria.pattern.as_deref() {
            None => DEFAULT_URL_PATTERN.is_match(submission.as_str()),
            Some(pattern) => match Regex::new(pattern) {
                Ok(regex) => regex.is_match(submission.as_str()),
                Err(error) => {
                    tracing::warn!(pattern, %error, "Criteria pattern is not a valid regex");
                    return ValidationResult::fail(PATTERN_UNREADABLE);
                }
            },
        };

        if matched {
            ValidationResult::pass(PATTERN_MATCHED)
        } else {
            ValidationResult::fail(PATTERN_NOT_MATCHED)
        }
    }
}
