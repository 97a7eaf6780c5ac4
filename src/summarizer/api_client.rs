//! Gemini API client
//!
//! Direct HTTP client for the Gemini `generateContent` endpoint. This is
//! the production [`ModelBackend`]: one call per candidate, no retries.

use crate::config::{ConfigError, SummarizerConfig};
use crate::summarizer::error::ModelError;
use crate::summarizer::fallback::ModelBackend;
use crate::summarizer::gemini_types::{GeminiApiRequest, GeminiApiResponse};
use async_trait::async_trait;
use std::time::Duration;

/// Gemini-backed implementation of [`ModelBackend`]
pub struct GeminiBackend {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiBackend {
    /// Build a backend whose HTTP client enforces the configured timeout
    pub fn new(config: &SummarizerConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(
            client,
            config.api_key.clone(),
            config.gemini_base_url.clone(),
        ))
    }

    /// Build a backend around an existing client (shared connection pool, tests)
    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ModelBackend for GeminiBackend {
    async fn summarize_with(&self, model: &str, prompt: &str) -> Result<String, ModelError> {
        call_gemini_api(&self.client, &self.base_url, &self.api_key, model, prompt).await
    }
}

/// Call Gemini with a single text prompt
///
/// # Returns
/// * `Ok(String)` - The concatenated text of the first candidate
/// * `Err(ModelError)` - Transport failure, timeout, error status, blocked
///   prompt, unparsable body, or a response without text
pub async fn call_gemini_api(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<String, ModelError> {
    let url = format!("{}/models/{}:generateContent", base_url, model);
    let request_body = GeminiApiRequest::from_prompt(prompt);

    tracing::debug!(
        url = %url,
        model = %model,
        prompt_len = prompt.len(),
        "Calling Gemini API"
    );

    let response = client
        .post(&url)
        .query(&[("key", api_key)])
        .json(&request_body)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let status_code = status.as_u16();
        let error_body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());

        tracing::error!(
            status_code = status_code,
            error_body = %error_body,
            "Gemini API returned error status"
        );

        if status_code == 429 {
            return Err(ModelError::RateLimited(error_body));
        }
        return Err(ModelError::Status {
            status: status_code,
            body: error_body,
        });
    }

    let response_body = response.text().await?;

    let parsed: GeminiApiResponse = serde_json::from_str(&response_body)
        .map_err(|e| ModelError::InvalidResponse(format!("{} - Response body: {}", e, response_body)))?;

    if let Some(reason) = parsed
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_ref())
    {
        return Err(ModelError::Blocked(reason.clone()));
    }

    if parsed.candidates.is_empty() {
        return Err(ModelError::NoCandidates);
    }

    let text = parsed.first_text().unwrap_or_default();
    if text.trim().is_empty() {
        return Err(ModelError::EmptyText);
    }

    tracing::debug!(
        response_len = text.len(),
        "Successfully received response from Gemini API"
    );

    Ok(text)
}
