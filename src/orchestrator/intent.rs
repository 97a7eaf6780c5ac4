//! Intent classification
//!
//! A keyword predicate, not a learned classifier: input mentioning both
//! "summarize" and "email" (any case) is a summarize request, everything
//! else is unknown. Phrasings like "summarise my mail" do not match.

use crate::models::TaskIntent;

const SUMMARIZE_KEYWORD: &str = "summarize";
const EMAIL_KEYWORD: &str = "email";

/// Map raw user input to a [`TaskIntent`]
pub fn classify(user_input: &str) -> TaskIntent {
    let lowered = user_input.to_lowercase();
    if lowered.contains(SUMMARIZE_KEYWORD) && lowered.contains(EMAIL_KEYWORD) {
        TaskIntent::SummarizeLatestEmail
    } else {
        TaskIntent::Unknown
    }
}
