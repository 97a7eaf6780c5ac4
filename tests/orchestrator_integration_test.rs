//! Integration tests for the orchestrator pipeline
//!
//! These tests verify:
//! 1. Intent gating (unknown input performs no downstream calls)
//! 2. Error mapping for each downstream failure mode
//! 3. The full task -> fetch -> summarize flow over real HTTP, with the
//!    mailbox provider and model backend replaced by fakes

use async_trait::async_trait;
use axum::Router;
use base64::Engine;
use mail_digest::api::{mail_router, summarizer_router};
use mail_digest::mail::gmail::{Header, PartBody};
use mail_digest::mail::{MailService, MailboxError, MailboxProvider, MessagePayload};
use mail_digest::models::{
    EmailMessage, MailFetchRequest, MailFilter, SummarizeRequest, SummarizeResponse, TaskIntent,
};
use mail_digest::orchestrator::{
    classify, ClientError, HttpMailClient, HttpSummarizerClient, MailClient, OrchestrationError,
    Orchestrator, SummarizerClient,
};
use mail_digest::summarizer::{ModelBackend, ModelError, SummarizationService};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// In-memory service fakes
// ============================================================================

struct FakeMail {
    result: Result<Vec<EmailMessage>, u16>,
    calls: Arc<Mutex<Vec<MailFetchRequest>>>,
}

#[async_trait]
impl MailClient for FakeMail {
    async fn read_emails(
        &self,
        request: &MailFetchRequest,
    ) -> Result<Vec<EmailMessage>, ClientError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.result {
            Ok(emails) => Ok(emails.clone()),
            Err(status) => Err(ClientError::Status {
                status: *status,
                body: "mailbox down".to_string(),
            }),
        }
    }
}

struct FakeSummarizer {
    summary: Option<String>,
    calls: Arc<Mutex<Vec<SummarizeRequest>>>,
}

#[async_trait]
impl SummarizerClient for FakeSummarizer {
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse, ClientError> {
        self.calls.lock().unwrap().push(request.clone());
        match &self.summary {
            Some(summary) => Ok(SummarizeResponse {
                summary: summary.clone(),
            }),
            None => Err(ClientError::Timeout),
        }
    }
}

type Calls<T> = Arc<Mutex<Vec<T>>>;

fn fakes(
    mail: Result<Vec<EmailMessage>, u16>,
    summary: Option<&str>,
) -> (
    Orchestrator<FakeMail, FakeSummarizer>,
    Calls<MailFetchRequest>,
    Calls<SummarizeRequest>,
) {
    let mail_calls = Arc::new(Mutex::new(Vec::new()));
    let summarize_calls = Arc::new(Mutex::new(Vec::new()));
    let orchestrator = Orchestrator::new(
        FakeMail {
            result: mail,
            calls: mail_calls.clone(),
        },
        FakeSummarizer {
            summary: summary.map(str::to_string),
            calls: summarize_calls.clone(),
        },
    );
    (orchestrator, mail_calls, summarize_calls)
}

fn hi_email() -> EmailMessage {
    EmailMessage {
        subject: "Hi".to_string(),
        body: "Meeting at 3pm. See http://x.co for agenda.".to_string(),
    }
}

// ============================================================================
// Orchestrator against fakes
// ============================================================================

#[tokio::test]
async fn test_unknown_intent_makes_no_calls() {
    for input in ["Read my email", "Summarize the news", "hello"] {
        let (orchestrator, mail_calls, summarize_calls) =
            fakes(Ok(vec![hi_email()]), Some("unused"));

        let intent = classify(input);
        assert_eq!(intent, TaskIntent::Unknown);

        let result = orchestrator.run(intent).await;
        assert!(matches!(result, Err(OrchestrationError::NoMatchingTask)));
        assert!(mail_calls.lock().unwrap().is_empty());
        assert!(summarize_calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_happy_path_passes_body_through() {
    let (orchestrator, mail_calls, summarize_calls) =
        fakes(Ok(vec![hi_email()]), Some("Meeting at 3pm."));

    let summary = orchestrator
        .run(classify("Summarize my latest email"))
        .await
        .unwrap();

    assert_eq!(summary, "Meeting at 3pm.");
    assert_eq!(
        *mail_calls.lock().unwrap(),
        vec![MailFetchRequest {
            filter: MailFilter::Unread,
            count: 1
        }]
    );
    assert_eq!(
        summarize_calls.lock().unwrap()[0].input,
        "Meeting at 3pm. See http://x.co for agenda."
    );
}

#[tokio::test]
async fn test_empty_mailbox_is_empty_result() {
    let (orchestrator, _, summarize_calls) = fakes(Ok(vec![]), Some("unused"));

    let result = orchestrator.run(TaskIntent::SummarizeLatestEmail).await;

    assert!(matches!(result, Err(OrchestrationError::EmptyResult)));
    assert!(summarize_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_mail_failure_is_upstream_unavailable() {
    let (orchestrator, _, summarize_calls) = fakes(Err(502), Some("unused"));

    let result = orchestrator.run(TaskIntent::SummarizeLatestEmail).await;

    match result {
        Err(OrchestrationError::UpstreamUnavailable { service, reason }) => {
            assert_eq!(service, "mail retrieval service");
            assert!(reason.contains("502"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(summarize_calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_summarizer_timeout_is_upstream_unavailable() {
    let (orchestrator, _, _) = fakes(Ok(vec![hi_email()]), None);

    let result = orchestrator.run(TaskIntent::SummarizeLatestEmail).await;

    match result {
        Err(OrchestrationError::UpstreamUnavailable { service, reason }) => {
            assert_eq!(service, "summarization service");
            assert!(reason.contains("timed out"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_blank_summary_is_rejected() {
    let (orchestrator, _, _) = fakes(Ok(vec![hi_email()]), Some("   "));

    let result = orchestrator.run(TaskIntent::SummarizeLatestEmail).await;

    assert!(matches!(
        result,
        Err(OrchestrationError::UpstreamUnavailable { .. })
    ));
}

#[tokio::test]
async fn test_only_first_message_is_summarized() {
    let second = EmailMessage {
        subject: "Second".to_string(),
        body: "ignored".to_string(),
    };
    let (orchestrator, _, summarize_calls) =
        fakes(Ok(vec![hi_email(), second]), Some("summary"));

    let digest = orchestrator
        .run_detailed(TaskIntent::SummarizeLatestEmail)
        .await
        .unwrap();

    assert_eq!(digest.email.subject, "Hi");
    assert_eq!(summarize_calls.lock().unwrap().len(), 1);
}

// ============================================================================
// End to end over HTTP
// ============================================================================

/// Mailbox holding a fixed list of (subject, plain body) messages
struct StaticMailbox {
    messages: Vec<(String, String)>,
}

#[async_trait]
impl MailboxProvider for StaticMailbox {
    async fn list_message_ids(
        &self,
        _filter: MailFilter,
        max_results: u32,
    ) -> Result<Vec<String>, MailboxError> {
        Ok((0..self.messages.len())
            .take(max_results as usize)
            .map(|i| i.to_string())
            .collect())
    }

    async fn get_message(&self, id: &str) -> Result<MessagePayload, MailboxError> {
        let index: usize = id
            .parse()
            .map_err(|_| MailboxError::InvalidResponse(id.to_string()))?;
        let (subject, body) = &self.messages[index];
        Ok(MessagePayload {
            mime_type: "multipart/alternative".to_string(),
            headers: vec![Header {
                name: "Subject".to_string(),
                value: subject.clone(),
            }],
            body: None,
            parts: vec![MessagePayload {
                mime_type: "text/plain".to_string(),
                headers: vec![],
                body: Some(PartBody {
                    data: Some(base64::engine::general_purpose::URL_SAFE.encode(body)),
                }),
                parts: vec![],
            }],
        })
    }
}

/// Model backend where only the listed models answer
struct RecordingBackend {
    answers: Vec<(String, String)>,
    calls: Mutex<Vec<(String, String)>>,
    count: AtomicUsize,
}

#[async_trait]
impl ModelBackend for RecordingBackend {
    async fn summarize_with(&self, model: &str, prompt: &str) -> Result<String, ModelError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.calls
            .lock()
            .unwrap()
            .push((model.to_string(), prompt.to_string()));
        self.answers
            .iter()
            .find(|(m, _)| m == model)
            .map(|(_, text)| text.clone())
            .ok_or(ModelError::Timeout)
    }
}

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

fn candidates() -> Vec<String> {
    vec![
        "gemini-1.5-flash".to_string(),
        "gemini-1.5-flash-8b".to_string(),
        "gemini-pro".to_string(),
    ]
}

#[tokio::test]
async fn test_end_to_end_first_candidate_wins() {
    let mailbox = Arc::new(StaticMailbox {
        messages: vec![(
            "Hi".to_string(),
            "Meeting at 3pm. See http://x.co for agenda.".to_string(),
        )],
    });
    let backend = Arc::new(RecordingBackend {
        answers: vec![(
            "gemini-1.5-flash".to_string(),
            "Meeting scheduled for 3pm; agenda link removed.".to_string(),
        )],
        calls: Mutex::new(Vec::new()),
        count: AtomicUsize::new(0),
    });

    let mail_url = spawn(mail_router(Arc::new(MailService::new(mailbox)))).await;
    let summarizer_url = spawn(summarizer_router(Arc::new(SummarizationService::new(
        backend.clone(),
        candidates(),
    ))))
    .await;

    let http = reqwest::Client::new();
    let orchestrator = Orchestrator::new(
        HttpMailClient::new(http.clone(), mail_url),
        HttpSummarizerClient::new(http, summarizer_url),
    );

    let digest = orchestrator
        .run_detailed(classify("Summarize my latest email"))
        .await
        .unwrap();

    assert_eq!(digest.email.subject, "Hi");
    assert_eq!(
        digest.summary,
        "Meeting scheduled for 3pm; agenda link removed."
    );
    assert_eq!(backend.count.load(Ordering::SeqCst), 1);
    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls[0].0, "gemini-1.5-flash");
    assert!(calls[0].1.ends_with("\n\nMeeting at 3pm. See for agenda."));
}

#[tokio::test]
async fn test_end_to_end_empty_mailbox() {
    let mailbox = Arc::new(StaticMailbox { messages: vec![] });
    let backend = Arc::new(RecordingBackend {
        answers: vec![],
        calls: Mutex::new(Vec::new()),
        count: AtomicUsize::new(0),
    });

    let mail_url = spawn(mail_router(Arc::new(MailService::new(mailbox)))).await;
    let summarizer_url = spawn(summarizer_router(Arc::new(SummarizationService::new(
        backend.clone(),
        candidates(),
    ))))
    .await;

    let http = reqwest::Client::new();
    let orchestrator = Orchestrator::new(
        HttpMailClient::new(http.clone(), mail_url),
        HttpSummarizerClient::new(http, summarizer_url),
    );

    let result = orchestrator.run(TaskIntent::SummarizeLatestEmail).await;

    assert!(matches!(result, Err(OrchestrationError::EmptyResult)));
    assert_eq!(backend.count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_end_to_end_all_models_fail() {
    let mailbox = Arc::new(StaticMailbox {
        messages: vec![("Hi".to_string(), "body".to_string())],
    });
    let backend = Arc::new(RecordingBackend {
        answers: vec![],
        calls: Mutex::new(Vec::new()),
        count: AtomicUsize::new(0),
    });

    let mail_url = spawn(mail_router(Arc::new(MailService::new(mailbox)))).await;
    let summarizer_url = spawn(summarizer_router(Arc::new(SummarizationService::new(
        backend.clone(),
        candidates(),
    ))))
    .await;

    let http = reqwest::Client::new();
    let orchestrator = Orchestrator::new(
        HttpMailClient::new(http.clone(), mail_url),
        HttpSummarizerClient::new(http, summarizer_url),
    );

    let result = orchestrator.run(TaskIntent::SummarizeLatestEmail).await;

    match result {
        Err(OrchestrationError::UpstreamUnavailable { service, reason }) => {
            assert_eq!(service, "summarization service");
            assert!(reason.contains("500"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(backend.count.load(Ordering::SeqCst), 3);
}
