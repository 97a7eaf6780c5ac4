//! Orchestration error types

use thiserror::Error;

/// Transport-level failure calling one of the services
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused, DNS failure, reset, ...
    #[error("request failed: {0}")]
    Request(String),

    /// The call exceeded the client timeout
    #[error("request timed out")]
    Timeout,

    /// The service answered with a non-success status
    #[error("service returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// The success body did not match the contract
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ClientError::Timeout
        } else if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Request(error.to_string())
        }
    }
}

/// Why an orchestrator run produced no summary
#[derive(Error, Debug)]
pub enum OrchestrationError {
    /// The input did not classify to a known task
    #[error("Unknown task: no matching task for this request")]
    NoMatchingTask,

    /// A downstream service failed, timed out, or was unreachable
    #[error("{service} is unavailable: {reason}")]
    UpstreamUnavailable {
        /// Which service failed
        service: &'static str,
        /// What went wrong
        reason: String,
    },

    /// The mail service returned no messages
    #[error("No messages found to summarize")]
    EmptyResult,
}

impl OrchestrationError {
    pub(crate) fn upstream(service: &'static str, error: ClientError) -> Self {
        OrchestrationError::UpstreamUnavailable {
            service,
            reason: error.to_string(),
        }
    }
}
