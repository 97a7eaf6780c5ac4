//! Summarization Service
//!
//! Serves `POST /summarize` and `GET /health`. The Gemini API key is read
//! once here; if it is missing the process exits before binding.

use mail_digest::api::summarizer_router;
use mail_digest::config::{ServerConfig, SummarizerConfig};
use mail_digest::summarizer::{GeminiBackend, SummarizationService};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mail_digest::telemetry::init_tracing();

    let server = ServerConfig::from_env("SUMMARIZER", 8002);
    let config = SummarizerConfig::from_env()?;
    info!("Configuration loaded: {:?}", config);
    info!(
        fallback_budget_secs = config.fallback_budget_secs(),
        "Worst-case summarize latency; callers must wait longer than this"
    );

    let backend = Arc::new(GeminiBackend::new(&config)?);
    let service = Arc::new(SummarizationService::new(backend, config.models.clone()));

    mail_digest::server::serve(summarizer_router(service), &server, "summarizer").await
}
