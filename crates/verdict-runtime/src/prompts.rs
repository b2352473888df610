//! Prompt construction for the escalation judge.
//!
//! The prompt has two layers:
//! 1. A fixed framing that pins the judge to the evaluator role and to the
//!    exact two-field JSON reply shape.
//! 2. Dynamic sections carrying the task context, the criteria tag, the
//!    serialized expected value, and the raw submission.

use verdict_core::{CriteriaDescriptor, Submission, TaskContext};

/// Fixed role framing and output contract for the judge.
///
/// The reply contract is deliberately minimal: exactly `isValid` and
/// `feedback`, nothing additional, so the reply can be projected straight
/// into a `ValidationResult`.
pub const JUDGE_SYSTEM_PROMPT: &str = r#"
You are an evaluator for hands-on AI-engineering learning tasks.
Your job is to judge the "Learner Submission" against the "Task Content"
and the "Validation Criteria".

Reply with ONLY a JSON object of this exact shape and nothing else:
{"isValid": true, "feedback": "Your positive feedback here."}
when the submission is correct or acceptable, or
{"isValid": false, "feedback": "Your constructive feedback here."}
when it is incorrect or needs improvement.

Be concise and direct. Do not add fields, prose, or markdown around the JSON.
"#;

/// Compose the single judge prompt for one evaluation.
pub fn compose_judge_prompt(
    context: &TaskContext,
    criteria: &CriteriaDescriptor,
    submission: &Submission,
) -> String {
    format!(
        "{framing}\n\
         Task Content (context for the submission):\n{context}\n\n\
         Validation Criteria (what is expected):\n\
         Type: {kind}\n\
         Expected: {expected}\n\n\
         Learner Submission:\n{submission}\n",
        framing = JUDGE_SYSTEM_PROMPT,
        context = context.as_str(),
        kind = criteria.kind,
        expected = criteria.expected_summary(),
        submission = submission.as_str(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_sections() {
        let context = TaskContext::new("Deploy a demo on Hugging Face Spaces.");
        let criteria = CriteriaDescriptor::tagged("essay_quality");
        let submission = Submission::new("I deployed it at https://example.com");

        let prompt = compose_judge_prompt(&context, &criteria, &submission);

        assert!(prompt.contains("Deploy a demo on Hugging Face Spaces."));
        assert!(prompt.contains("Type: essay_quality"));
        assert!(prompt.contains("I deployed it at https://example.com"));
        assert!(prompt.contains(r#"{"isValid": true"#));
    }

    #[test]
    fn test_prompt_serializes_expected_values() {
        let criteria = CriteriaDescriptor::contains_all(["a", "b"]);
        let prompt = compose_judge_prompt(
            &TaskContext::default(),
            &criteria,
            &Submission::new("ab"),
        );
        assert!(prompt.contains(r#"Expected: ["a","b"]"#));
    }

    #[test]
    fn test_framing_pins_reply_shape() {
        assert!(JUDGE_SYSTEM_PROMPT.contains("ONLY a JSON object"));
        assert!(JUDGE_SYSTEM_PROMPT.contains("isValid"));
        assert!(JUDGE_SYSTEM_PROMPT.contains("feedback"));
    }
}
