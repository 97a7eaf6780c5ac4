//! Mail retrieval service core

use crate::mail::error::MailboxError;
use crate::mail::extract::extract_email;
use crate::mail::gmail::MailboxProvider;
use crate::models::{EmailMessage, MailFetchRequest};
use std::sync::Arc;

/// Fetches messages from a provider and applies the extraction rule
pub struct MailService {
    provider: Arc<dyn MailboxProvider>,
}

impl MailService {
    /// Create a service over `provider`
    pub fn new(provider: Arc<dyn MailboxProvider>) -> Self {
        Self { provider }
    }

    /// Return up to `request.count` messages matching `request.filter`
    ///
    /// Messages keep the provider's listing order. Any provider failure
    /// fails the whole fetch.
    pub async fn fetch(&self, request: &MailFetchRequest) -> Result<Vec<EmailMessage>, MailboxError> {
        let ids = self
            .provider
            .list_message_ids(request.filter, request.count)
            .await?;

        let mut emails = Vec::with_capacity(ids.len());
        for id in ids.iter().take(request.count as usize) {
            let payload = self.provider.get_message(id).await?;
            let email = extract_email(&payload);
            tracing::debug!(
                message_id = %id,
                subject = %email.subject,
                body_len = email.body.len(),
                "Extracted message"
            );
            emails.push(email);
        }

        tracing::info!(count = emails.len(), filter = ?request.filter, "Fetched messages");
        Ok(emails)
    }
}
