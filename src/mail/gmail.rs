//! Gmail API v1 mailbox provider
//!
//! Lists message ids for a filter, then fetches each message in `full`
//! format. The bearer token is supplied by configuration.

use crate::config::{ConfigError, MailConfig};
use crate::mail::error::MailboxError;
use crate::models::MailFilter;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

// ============================================================================
// API response types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MessageListResponse {
    #[serde(default)]
    messages: Vec<MessageStub>,
}

#[derive(Debug, Deserialize)]
struct MessageStub {
    id: String,
}

#[derive(Debug, Deserialize)]
struct FullMessage {
    #[serde(default)]
    payload: Option<MessagePayload>,
}

/// A message payload node as returned by `format=full`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    /// Declared media type of this node
    #[serde(default)]
    pub mime_type: String,
    /// Header list (populated on the root node)
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Inline body data, if any
    #[serde(default)]
    pub body: Option<PartBody>,
    /// Child parts for multipart nodes
    #[serde(default)]
    pub parts: Vec<MessagePayload>,
}

/// A single message header
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    /// Header name, as sent
    #[serde(default)]
    pub name: String,
    /// Header value
    #[serde(default)]
    pub value: String,
}

/// Body of a payload node
#[derive(Debug, Clone, Deserialize)]
pub struct PartBody {
    /// URL-safe base64 content
    #[serde(default)]
    pub data: Option<String>,
}

// ============================================================================
// Provider trait
// ============================================================================

/// Source of raw messages for the Mail Retrieval Service
#[async_trait]
pub trait MailboxProvider: Send + Sync {
    /// Ids of up to `max_results` messages matching `filter`, newest first
    async fn list_message_ids(
        &self,
        filter: MailFilter,
        max_results: u32,
    ) -> Result<Vec<String>, MailboxError>;

    /// Full payload of one message
    async fn get_message(&self, id: &str) -> Result<MessagePayload, MailboxError>;
}

// ============================================================================
// Gmail implementation
// ============================================================================

/// Gmail REST client for the signed-in user (`users/me`)
pub struct GmailProvider {
    client: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl GmailProvider {
    /// Build a provider whose HTTP client enforces the configured timeout
    pub fn new(config: &MailConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(
            client,
            config.access_token.clone(),
            config.gmail_base_url.clone(),
        ))
    }

    /// Build a provider around an existing client
    pub fn with_client(client: reqwest::Client, access_token: String, base_url: String) -> Self {
        Self {
            client,
            access_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, MailboxError> {
        let response = request.bearer_auth(&self.access_token).send().await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(MailboxError::AuthExpired);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(
                status_code = status.as_u16(),
                error_body = %message,
                "Gmail API returned error status"
            );
            return Err(MailboxError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl MailboxProvider for GmailProvider {
    async fn list_message_ids(
        &self,
        filter: MailFilter,
        max_results: u32,
    ) -> Result<Vec<String>, MailboxError> {
        let url = format!("{}/users/me/messages", self.base_url);
        let mut query = vec![("maxResults", max_results.to_string())];
        if let Some(q) = filter.search_query() {
            query.push(("q", q.to_string()));
        }

        let response = self.send(self.client.get(&url).query(&query)).await?;
        let list: MessageListResponse = response.json().await?;

        tracing::debug!(count = list.messages.len(), "Listed messages");
        Ok(list.messages.into_iter().map(|m| m.id).collect())
    }

    async fn get_message(&self, id: &str) -> Result<MessagePayload, MailboxError> {
        let url = format!("{}/users/me/messages/{}", self.base_url, id);
        let response = self
            .send(self.client.get(&url).query(&[("format", "full")]))
            .await?;
        let message: FullMessage = response.json().await?;

        Ok(message.payload.unwrap_or_default())
    }
}
