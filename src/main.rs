//! Mail Digest client
//!
//! Classifies a free-text request and, for "summarize my email", fetches the
//! latest unread message from the mail service and prints its summary from
//! the summarization service.

use clap::Parser;
use mail_digest::config::DEFAULT_ORCHESTRATOR_TIMEOUT_SECS;
use mail_digest::models::TaskIntent;
use mail_digest::orchestrator::client::build_http_client;
use mail_digest::orchestrator::{
    classify, HttpMailClient, HttpSummarizerClient, OrchestrationError, Orchestrator,
};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "mail-digest", version, about = "Summarize your latest email")]
struct Cli {
    /// What to do, in plain words
    #[arg(default_value = "Summarize my latest email")]
    request: Vec<String>,

    /// Base URL of the mail retrieval service
    #[arg(long, env = "MAIL_SERVICE_URL", default_value = "http://localhost:8001")]
    mail_url: String,

    /// Base URL of the summarization service
    #[arg(long, env = "SUMMARIZER_URL", default_value = "http://localhost:8002")]
    summarizer_url: String,

    /// Timeout for each service call, in seconds
    #[arg(long, env = "ORCHESTRATOR_TIMEOUT_SECS", default_value_t = DEFAULT_ORCHESTRATOR_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    mail_digest::telemetry::init_tracing();

    let cli = Cli::parse();
    let user_input = cli.request.join(" ");

    let intent = classify(&user_input);
    if intent == TaskIntent::SummarizeLatestEmail {
        println!("🧠 Task identified: summarize email");
    }

    let http = build_http_client(Duration::from_secs(cli.timeout_secs))?;
    let orchestrator = Orchestrator::new(
        HttpMailClient::new(http.clone(), cli.mail_url),
        HttpSummarizerClient::new(http, cli.summarizer_url),
    );

    let outcome = tokio::select! {
        result = orchestrator.run_detailed(intent) => result,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("Cancelled.");
            return Ok(ExitCode::from(130));
        }
    };

    match outcome {
        Ok(digest) => {
            println!(
                "\n📨 Email Fetched:\nSubject: {}\nBody: {}\n",
                digest.email.subject, digest.email.body
            );
            println!("📋 Summary:\n{}", digest.summary);
            Ok(ExitCode::SUCCESS)
        }
        Err(OrchestrationError::NoMatchingTask) => {
            println!("⚠️ Unknown task.");
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
