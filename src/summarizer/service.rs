//! Summarization service core
//!
//! Glues sanitization, the prompt template and the fallback loop together.
//! Holds no per-request state; one instance is shared by every handler.

use crate::models::{HealthReport, SummarizeRequest, SummarizeResponse};
use crate::summarizer::error::SummarizationError;
use crate::summarizer::fallback::{first_success, ModelBackend};
use crate::summarizer::prompt::{build_summary_prompt, HEALTH_CHECK_PROMPT};
use crate::summarizer::sanitize::sanitize;
use std::sync::Arc;

/// Summarizes text by trying model candidates in a fixed order
pub struct SummarizationService {
    backend: Arc<dyn ModelBackend>,
    models: Vec<String>,
}

impl SummarizationService {
    /// Create a service over `backend` with candidates in priority order
    pub fn new(backend: Arc<dyn ModelBackend>, models: Vec<String>) -> Self {
        Self { backend, models }
    }

    /// Candidate list, primary first
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Sanitize the input and return the first candidate's non-empty summary
    ///
    /// # Errors
    /// * `SummarizationError::AllModelsFailed` if no candidate produced text
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, SummarizationError> {
        tracing::info!(
            input_len = request.input.len(),
            "Received summarize request"
        );

        let cleaned = sanitize(&request.input);
        tracing::info!(cleaned_len = cleaned.len(), "Cleaned input");

        let prompt = build_summary_prompt(&cleaned);
        let prompt = prompt.as_str();
        let backend = self.backend.as_ref();

        let output = first_success(&self.models, |model| backend.summarize_with(model, prompt)).await?;

        Ok(SummarizeResponse {
            summary: output.text,
        })
    }

    /// Send a trivial prompt to the primary candidate
    ///
    /// Never fails; problems are reported in the returned report.
    pub async fn health(&self) -> HealthReport {
        let Some(primary) = self.models.first() else {
            return HealthReport {
                status: "unhealthy".to_string(),
                gemini_api: None,
                test_response: None,
                model: None,
                error: Some("no model candidates configured".to_string()),
            };
        };

        tracing::info!(model = %primary, "Testing Gemini API connection");
        match self.backend.summarize_with(primary, HEALTH_CHECK_PROMPT).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!(model = %primary, "Health check returned no text");
                HealthReport {
                    status: "unhealthy".to_string(),
                    gemini_api: Some("accessible".to_string()),
                    test_response: Some(false),
                    model: Some(primary.clone()),
                    error: Some("primary model returned an empty response".to_string()),
                }
            }
            Ok(_) => HealthReport {
                status: "healthy".to_string(),
                gemini_api: Some("accessible".to_string()),
                test_response: Some(true),
                model: Some(primary.clone()),
                error: None,
            },
            Err(e) => {
                tracing::error!(model = %primary, error = %e, "Health check failed");
                HealthReport {
                    status: "unhealthy".to_string(),
                    gemini_api: None,
                    test_response: None,
                    model: Some(primary.clone()),
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
