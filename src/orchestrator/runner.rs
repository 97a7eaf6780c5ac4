//! Orchestrator pipeline
//!
//! Runs the two service calls strictly in order: the summarize request is
//! built from the fetched message, so nothing can overlap. Dropping the
//! future returned by [`Orchestrator::run`] cancels whichever call is in
//! flight; nothing is retried.

use crate::models::{EmailMessage, MailFetchRequest, SummarizeRequest, TaskIntent};
use crate::orchestrator::client::{MailClient, SummarizerClient};
use crate::orchestrator::error::OrchestrationError;

const MAIL_SERVICE: &str = "mail retrieval service";
const SUMMARIZER_SERVICE: &str = "summarization service";

/// The fetched message and its summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digest {
    /// Message that was summarized
    pub email: EmailMessage,
    /// Summary returned by the summarization service
    pub summary: String,
}

/// Sequences the mail and summarizer services for a classified task
pub struct Orchestrator<M, S> {
    mail: M,
    summarizer: S,
}

impl<M, S> Orchestrator<M, S>
where
    M: MailClient,
    S: SummarizerClient,
{
    /// Create an orchestrator over the two service clients
    pub fn new(mail: M, summarizer: S) -> Self {
        Self { mail, summarizer }
    }

    /// Run `intent` and return only the summary text
    ///
    /// # Errors
    /// See [`Orchestrator::run_detailed`].
    pub async fn run(&self, intent: TaskIntent) -> Result<String, OrchestrationError> {
        self.run_detailed(intent).await.map(|digest| digest.summary)
    }

    /// Run `intent` and return the fetched message alongside its summary
    ///
    /// # Errors
    /// * `NoMatchingTask` - `intent` is `Unknown`; no service is called
    /// * `UpstreamUnavailable` - either call failed, timed out, or the summary was empty
    /// * `EmptyResult` - the mail service returned no messages; the summarizer is not called
    pub async fn run_detailed(&self, intent: TaskIntent) -> Result<Digest, OrchestrationError> {
        if intent == TaskIntent::Unknown {
            return Err(OrchestrationError::NoMatchingTask);
        }

        let emails = self
            .mail
            .read_emails(&MailFetchRequest::latest_unread())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Mail retrieval failed");
                OrchestrationError::upstream(MAIL_SERVICE, e)
            })?;

        let email = emails
            .into_iter()
            .next()
            .ok_or(OrchestrationError::EmptyResult)?;

        tracing::info!(
            subject = %email.subject,
            body_len = email.body.len(),
            "Email fetched"
        );

        let response = self
            .summarizer
            .summarize(&SummarizeRequest {
                input: email.body.clone(),
            })
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Summarization failed");
                OrchestrationError::upstream(SUMMARIZER_SERVICE, e)
            })?;

        if response.summary.trim().is_empty() {
            return Err(OrchestrationError::UpstreamUnavailable {
                service: SUMMARIZER_SERVICE,
                reason: "returned an empty summary".to_string(),
            });
        }

        Ok(Digest {
            email,
            summary: response.summary,
        })
    }
}
