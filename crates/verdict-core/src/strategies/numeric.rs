//! Numeric-range strategy with a relaxed leading-prefix parse.

use lazy_static::lazy_static;
use regex::Regex;

use crate::criteria::CriteriaDescriptor;
use crate::types::{Submission, ValidationResult};

use super::Strategy;

const IN_RANGE: &str = "The number is within the expected range. Nice work!";
const OUT_OF_RANGE: &str =
    "That is not a number in the expected range. Adjust your answer and try again.";

lazy_static! {
    /// Longest numeric prefix: optional sign, integer/fraction digits,
    /// optional exponent. Trailing text is ignored, the way a relaxed
    /// `parseFloat`-style parse behaves.
    static ref LEADING_FLOAT: Regex =
        Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap();
}

/// Parse the leading numeric prefix of `text` after skipping leading
/// whitespace. Returns `None` when no numeric prefix exists.
pub fn parse_leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let matched = LEADING_FLOAT.find(trimmed)?;
    matched.as_str().parse::<f64>().ok()
}

/// Valid iff the submission parses as a number and that number lies in
/// `[min, max]`, both bounds inclusive. A submission with no numeric prefix
/// is invalid, never an error. Absent bounds are open on that side.
pub struct NumberBetweenStrategy;

impl Strategy for NumberBetweenStrategy {
    fn tag(&self) -> &'static str {
        "is_number_between"
    }

    fn evaluate(
        &self,
        criteria: &CriteriaDescriptor,
        submission: &Submission,
    ) -> ValidationResult {
        let min = criteria.min.unwrap_or(f64::NEG_INFINITY);
        let max = criteria.max.unwrap_or(f64::INFINITY);

        let in_range = parse_leading_float(submission.as_str())
            .is_some_and(|parsed| parsed >= min && parsed <= max);

        if in_range {
            ValidationResult::pass(IN_RANGE)
        } else {
            ValidationResult::fail(OUT_OF_RANGE)
        }
    }
}
