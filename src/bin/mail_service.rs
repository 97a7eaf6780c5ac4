//! Mail Retrieval Service
//!
//! Serves `POST /read_emails` backed by the Gmail API. The access token is
//! read once here; if it is missing the process exits before binding.

use mail_digest::api::mail_router;
use mail_digest::config::{MailConfig, ServerConfig};
use mail_digest::mail::{GmailProvider, MailService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mail_digest::telemetry::init_tracing();

    let server = ServerConfig::from_env("MAIL_SERVICE", 8001);
    let config = MailConfig::from_env()?;
    info!("Configuration loaded: {:?}", config);

    let provider = Arc::new(GmailProvider::new(&config)?);
    let service = Arc::new(MailService::new(provider));

    mail_digest::server::serve(mail_router(service), &server, "mail").await
}
