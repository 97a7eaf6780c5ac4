//! Typed clients for the two services
//!
//! Each trait is the orchestrator's view of one request/response contract.
//! The `Http*` implementations speak JSON over HTTP with an explicit
//! per-request timeout; a timeout is reported like any other transport
//! failure.

use crate::models::{EmailMessage, MailFetchRequest, SummarizeRequest, SummarizeResponse};
use crate::orchestrator::error::ClientError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Client for the Mail Retrieval Service
#[async_trait]
pub trait MailClient: Send + Sync {
    /// `POST /read_emails`
    async fn read_emails(&self, request: &MailFetchRequest)
        -> Result<Vec<EmailMessage>, ClientError>;
}

/// Client for the Summarization Service
#[async_trait]
pub trait SummarizerClient: Send + Sync {
    /// `POST /summarize`
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, ClientError>;
}

/// Build an HTTP client with a whole-request timeout
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client, ClientError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Request(format!("failed to build HTTP client: {}", e)))
}

async fn post_json<B, R>(client: &reqwest::Client, url: &str, body: &B) -> Result<R, ClientError>
where
    B: Serialize + Sync,
    R: DeserializeOwned + Send,
{
    tracing::debug!(url = %url, "Calling service");

    let response = client.post(url).json(body).send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error body".to_string());
        return Err(ClientError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let text = response.text().await?;
    serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// HTTP client for the Mail Retrieval Service
pub struct HttpMailClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMailClient {
    /// Create a client for the service at `base_url`
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl MailClient for HttpMailClient {
    async fn read_emails(
        &self,
        request: &MailFetchRequest,
    ) -> Result<Vec<EmailMessage>, ClientError> {
        post_json(&self.client, &join_url(&self.base_url, "/read_emails"), request).await
    }
}

/// HTTP client for the Summarization Service
pub struct HttpSummarizerClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSummarizerClient {
    /// Create a client for the service at `base_url`
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SummarizerClient for HttpSummarizerClient {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, ClientError> {
        post_json(&self.client, &join_url(&self.base_url, "/summarize"), request).await
    }
}
