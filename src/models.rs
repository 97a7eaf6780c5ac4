//! Wire types shared by the services and the orchestrator
//!
//! Every request/response body that crosses a service boundary is defined
//! here so both sides of each contract serialize the same shape.

use serde::{Deserialize, Serialize};

/// The classified user goal driving which downstream services are invoked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskIntent {
    /// Fetch the newest unread message and summarize its body
    SummarizeLatestEmail,
    /// No known task matched the input
    Unknown,
}

/// A fetched message reduced to the two fields the pipeline needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    /// Value of the `Subject` header, or a placeholder
    pub subject: String,
    /// Decoded `text/plain` body, or empty
    pub body: String,
}

/// Which messages the mailbox should be searched for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MailFilter {
    /// Only unread messages
    #[default]
    Unread,
    /// Any message, newest first
    All,
}

impl MailFilter {
    /// Mailbox search query for this filter, if it needs one
    pub fn search_query(self) -> Option<&'static str> {
        match self {
            MailFilter::Unread => Some("is:unread"),
            MailFilter::All => None,
        }
    }
}

fn default_count() -> u32 {
    1
}

/// Request body for `POST /read_emails`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailFetchRequest {
    /// Message filter
    #[serde(default)]
    pub filter: MailFilter,
    /// Maximum number of messages to return, must be at least 1
    #[serde(default = "default_count")]
    pub count: u32,
}

impl MailFetchRequest {
    /// The request the orchestrator sends: one unread message
    pub fn latest_unread() -> Self {
        Self {
            filter: MailFilter::Unread,
            count: 1,
        }
    }

    /// Check the request constraints
    /// Returns Ok(()) if valid, Err with message if invalid
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("count must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Request body for `POST /summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Raw text to summarize; sanitized server side
    pub input: String,
}

/// Response body for `POST /summarize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// Trimmed, non-empty summary text
    pub summary: String,
}

/// Response body for `GET /health` on the summarization service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// "healthy" or "unhealthy"
    pub status: String,
    /// Set to "accessible" when the primary model answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_api: Option<String>,
    /// Whether the health check got any text back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_response: Option<bool>,
    /// Model that was checked
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Failure detail when unhealthy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of the `GET /` banner endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerResponse {
    /// Human-readable liveness message
    pub message: String,
}
