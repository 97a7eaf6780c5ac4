//! HTTP-facing error type for both services
//!
//! Domain errors from the mail and summarizer modules convert into
//! `AppError`, which implements `IntoResponse` so every failing handler
//! renders the same `{"error", "status"}` JSON body.

use crate::mail::MailboxError;
use crate::summarizer::SummarizationError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error types
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body failed validation
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Every model candidate failed to produce a summary
    #[error(transparent)]
    Summarization(#[from] SummarizationError),

    /// The mailbox provider could not be reached or rejected the call
    #[error("Mailbox provider error: {0}")]
    Mailbox(#[from] MailboxError),

    /// Internal server error (catch-all for unexpected errors)
    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Summarization(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Mailbox(_) => StatusCode::BAD_GATEWAY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = status.as_u16(), error = %self, "Request failed");

        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
