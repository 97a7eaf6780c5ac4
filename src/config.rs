//! Application configuration
//!
//! Configuration is read once at process start from environment variables
//! (with defaults) and local secret files, then passed explicitly into the
//! services. A missing secret is fatal: the process never starts serving.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default Gemini REST endpoint
pub const GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default Gmail REST endpoint
pub const GMAIL_API_BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1";

/// Model candidates in fallback order, cheapest first
pub const DEFAULT_MODELS: [&str; 3] = ["gemini-1.5-flash", "gemini-1.5-flash-8b", "gemini-pro"];

/// Per-call timeout for one model candidate, in seconds
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;

/// Per-call timeout for the mailbox provider, in seconds
pub const DEFAULT_MAIL_TIMEOUT_SECS: u64 = 30;

/// Orchestrator timeout for each service call, in seconds
///
/// Must exceed the default fallback budget (every default candidate timing
/// out in turn), otherwise a late success from the last model is lost.
pub const DEFAULT_ORCHESTRATOR_TIMEOUT_SECS: u64 = 120;

/// Errors raised while building configuration at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required secret file is absent, unreadable, or empty
    #[error("Missing credential: {name} could not be read from {}", .path.display())]
    MissingCredential {
        /// Which credential was being loaded
        name: &'static str,
        /// Where it was expected
        path: PathBuf,
    },

    /// A setting is present but unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Host/port binding for one of the HTTP services
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

impl ServerConfig {
    /// Load `{prefix}_HOST` / `{prefix}_PORT`, falling back to the given port
    pub fn from_env(prefix: &str, default_port: u16) -> Self {
        Self {
            port: env::var(format!("{prefix}_PORT"))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(default_port),
            host: env::var(format!("{prefix}_HOST")).unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Summarization service configuration
#[derive(Clone)]
pub struct SummarizerConfig {
    /// Gemini API key, read from a local file at startup
    pub api_key: String,
    /// Model candidates in priority order
    pub models: Vec<String>,
    /// Gemini API base URL
    pub gemini_base_url: String,
    /// Per-call timeout for the generative backend
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &"<redacted>")
            .field("models", &self.models)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl SummarizerConfig {
    /// Load from `GEMINI_API_KEY_FILE`, `SUMMARIZER_MODELS`,
    /// `GEMINI_API_BASE_URL` and `GEMINI_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let key_path = env::var("GEMINI_API_KEY_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("gemini_api_key.txt"));
        let api_key = read_secret("Gemini API key", &key_path)?;

        let models = match env::var("SUMMARIZER_MODELS") {
            Ok(raw) => parse_model_list(&raw)?,
            Err(_) => DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
        };

        Ok(Self {
            api_key,
            models,
            gemini_base_url: env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| GEMINI_API_BASE_URL.to_string()),
            request_timeout_secs: env::var("GEMINI_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_MODEL_TIMEOUT_SECS),
        })
    }

    /// Worst-case wall time of one summarize request: every candidate
    /// running into its per-call timeout
    pub fn fallback_budget_secs(&self) -> u64 {
        self.request_timeout_secs
            .saturating_mul(self.models.len() as u64)
    }
}

/// Mail retrieval service configuration
#[derive(Clone)]
pub struct MailConfig {
    /// Bearer token for the mailbox provider
    pub access_token: String,
    /// Gmail API base URL
    pub gmail_base_url: String,
    /// Per-call timeout for the mailbox provider
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("access_token", &"<redacted>")
            .field("gmail_base_url", &self.gmail_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl MailConfig {
    /// Load from `MAIL_TOKEN_FILE`, `GMAIL_API_BASE_URL` and `MAIL_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_path = env::var("MAIL_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("token.json"));
        let raw = read_secret("mail access token", &token_path)?;
        let access_token = parse_access_token(&raw).ok_or(ConfigError::MissingCredential {
            name: "mail access token",
            path: token_path,
        })?;

        Ok(Self {
            access_token,
            gmail_base_url: env::var("GMAIL_API_BASE_URL")
                .unwrap_or_else(|_| GMAIL_API_BASE_URL.to_string()),
            request_timeout_secs: env::var("MAIL_TIMEOUT_SECS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_MAIL_TIMEOUT_SECS),
        })
    }
}

/// Read a secret file, trimming surrounding whitespace
///
/// # Errors
/// * `ConfigError::MissingCredential` if the file is absent, unreadable or blank
pub fn read_secret(name: &'static str, path: &Path) -> Result<String, ConfigError> {
    let missing = || ConfigError::MissingCredential {
        name,
        path: path.to_path_buf(),
    };

    let contents = fs::read_to_string(path).map_err(|_| missing())?;
    let secret = contents.trim();
    if secret.is_empty() {
        return Err(missing());
    }
    Ok(secret.to_string())
}

/// Extract a bearer token from a token file's contents
///
/// Accepts either an authorized-user JSON document carrying a `token`
/// field or a bare token string.
pub fn parse_access_token(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.starts_with('{') {
        let value: serde_json::Value = serde_json::from_str(raw).ok()?;
        return value
            .get("token")
            .and_then(|t| t.as_str())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string);
    }
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Parse a comma-separated model list, rejecting an empty result
pub fn parse_model_list(raw: &str) -> Result<Vec<String>, ConfigError> {
    let models: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();

    if models.is_empty() {
        return Err(ConfigError::Invalid(
            "SUMMARIZER_MODELS must name at least one model".to_string(),
        ));
    }
    Ok(models)
}
