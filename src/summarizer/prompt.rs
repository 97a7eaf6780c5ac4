//! Prompt templates sent to the generative backend

/// Instruction prepended to every email body
pub const SUMMARY_INSTRUCTION: &str =
    "Please summarize the following email in 2-3 lines, highlighting the main points or action items:";

/// Trivial prompt sent by the health check
pub const HEALTH_CHECK_PROMPT: &str = "Test summarization";

/// Embed already-sanitized text in the summary instruction
pub fn build_summary_prompt(cleaned: &str) -> String {
    format!("{SUMMARY_INSTRUCTION}\n\n{cleaned}")
}
