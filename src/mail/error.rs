//! Mailbox provider error types

use thiserror::Error;

/// Errors talking to the mailbox provider
#[derive(Error, Debug)]
pub enum MailboxError {
    /// The HTTP request could not be sent or the connection failed
    #[error("request to mailbox provider failed: {0}")]
    Request(String),

    /// The call exceeded the configured timeout
    #[error("mailbox provider timed out")]
    Timeout,

    /// The access token was rejected (HTTP 401)
    #[error("mailbox access token expired or was rejected")]
    AuthExpired,

    /// Any other non-success HTTP status
    #[error("mailbox provider returned status {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        message: String,
    },

    /// The provider answered with an unexpected body
    #[error("invalid response from mailbox provider: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for MailboxError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            MailboxError::Timeout
        } else if error.is_decode() {
            MailboxError::InvalidResponse(error.to_string())
        } else {
            MailboxError::Request(error.to_string())
        }
    }
}
