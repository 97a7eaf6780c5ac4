//! Summarization-specific error types

use thiserror::Error;

/// Why a single model candidate did not produce a summary
///
/// These are logged by the fallback loop and never returned to callers.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The HTTP request could not be sent or the connection failed
    #[error("Failed to send HTTP request to Gemini API: {0}")]
    Request(String),

    /// The call exceeded the configured timeout
    #[error("Gemini API call timed out")]
    Timeout,

    /// HTTP 429 from the provider
    #[error("Gemini API rate limit exceeded (HTTP 429): {0}")]
    RateLimited(String),

    /// Any other non-success HTTP status
    #[error("Gemini API returned error status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body was not the expected JSON shape
    #[error("Failed to parse JSON response from Gemini API: {0}")]
    InvalidResponse(String),

    /// The provider refused the prompt
    #[error("Gemini API blocked the prompt: {0}")]
    Blocked(String),

    /// The response carried no candidates
    #[error("Gemini API response contains no candidates")]
    NoCandidates,

    /// The response carried no usable text
    #[error("Gemini API response text is empty")]
    EmptyText,
}

impl From<reqwest::Error> for ModelError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ModelError::Timeout
        } else {
            ModelError::Request(error.to_string())
        }
    }
}

/// One failed candidate, kept for the final error report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFailure {
    /// Model identifier that was tried
    pub model: String,
    /// Why it was skipped
    pub reason: String,
}

/// Errors surfaced by the Summarization Service
#[derive(Error, Debug)]
pub enum SummarizationError {
    /// Every candidate was tried and none produced text
    #[error("All available models failed to generate summary (tried: {})", attempted_models(.attempts))]
    AllModelsFailed {
        /// Failures in the order the candidates were tried
        attempts: Vec<CandidateFailure>,
    },
}

fn attempted_models(attempts: &[CandidateFailure]) -> String {
    if attempts.is_empty() {
        return "none".to_string();
    }
    attempts
        .iter()
        .map(|a| a.model.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
