//! Prompt assembly for the review and recommendation operations.
//!
//! Message order is fixed per operation. Stored values are inserted verbatim;
//! a missing document becomes the literal `ABSENT_DOCUMENT` placeholder.

use crate::advice::prompts::{
    ABSENT_DOCUMENT, JOB_DESCRIPTION_PREFIX, RECOMMENDATION_RESUME_PREFIX,
    RECOMMENDATION_SYSTEM, REFERENCE_DOCUMENT_PREFIX, REVIEW_RESUME_PREFIX, REVIEW_SYSTEM,
};
use crate::models::prompt::{Prompt, PromptMessage};

/// `[system, résumé]`
pub fn review_prompt(resume: Option<&str>) -> Prompt {
    vec![
        PromptMessage::system(REVIEW_SYSTEM),
        PromptMessage::user(format!(
            "{REVIEW_RESUME_PREFIX}{}",
            or_placeholder(resume)
        )),
    ]
}

/// `[system, résumé, job description, reference document]`
pub fn recommendation_prompt(
    resume: Option<&str>,
    job_description: &str,
    reference: Option<&str>,
) -> Prompt {
    vec![
        PromptMessage::system(RECOMMENDATION_SYSTEM),
        PromptMessage::user(format!(
            "{RECOMMENDATION_RESUME_PREFIX}{}",
            or_placeholder(resume)
        )),
        PromptMessage::user(format!("{JOB_DESCRIPTION_PREFIX}{job_description}")),
        PromptMessage::user(format!(
            "{REFERENCE_DOCUMENT_PREFIX}{}",
            or_placeholder(reference)
        )),
    ]
}

fn or_placeholder(document: Option<&str>) -> &str {
    document.unwrap_or(ABSENT_DOCUMENT)
}
