//! Model fallback
//!
//! `first_success` walks an ordered candidate list and returns the first
//! non-empty answer. It knows nothing about HTTP; the capability it drives
//! is any closure mapping a model name to a future, which in production is
//! [`ModelBackend::summarize_with`].

use crate::summarizer::error::{CandidateFailure, ModelError, SummarizationError};
use async_trait::async_trait;
use std::fmt::Display;
use std::future::Future;

/// A generative backend that can be asked to complete a prompt with a named model
#[async_trait]
pub trait ModelBackend: Send + Sync {
    /// Send `prompt` to `model` and return the raw text it produced
    async fn summarize_with(&self, model: &str, prompt: &str) -> Result<String, ModelError>;
}

/// The winning candidate and its trimmed output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelOutput {
    /// Model that produced the text
    pub model: String,
    /// Trimmed, non-empty text
    pub text: String,
}

/// Try each candidate in order; the first non-empty answer wins
///
/// A candidate that errors or answers with only whitespace is logged and
/// skipped; it is never retried. Later candidates are not called once one
/// succeeds.
///
/// # Errors
/// * `SummarizationError::AllModelsFailed` once every candidate has been
///   tried (or when the list is empty), carrying each failure in order
pub async fn first_success<'a, E, F, Fut>(
    candidates: &'a [String],
    mut attempt: F,
) -> Result<ModelOutput, SummarizationError>
where
    E: Display,
    F: FnMut(&'a str) -> Fut,
    Fut: Future<Output = Result<String, E>>,
{
    let mut attempts = Vec::with_capacity(candidates.len());

    for model in candidates {
        tracing::info!(model = %model, "Trying model");

        match attempt(model.as_str()).await {
            Ok(text) => {
                let text = text.trim();
                if text.is_empty() {
                    tracing::warn!(model = %model, "No valid response from model");
                    attempts.push(CandidateFailure {
                        model: model.clone(),
                        reason: "empty response".to_string(),
                    });
                    continue;
                }

                tracing::info!(
                    model = %model,
                    summary_len = text.len(),
                    "Successfully generated summary"
                );
                return Ok(ModelOutput {
                    model: model.clone(),
                    text: text.to_string(),
                });
            }
            Err(e) => {
                tracing::warn!(model = %model, error = %e, "Model failed");
                attempts.push(CandidateFailure {
                    model: model.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::error!(attempted = attempts.len(), "All models failed");
    Err(SummarizationError::AllModelsFailed { attempts })
}
