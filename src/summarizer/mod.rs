//! Summarization Service
//!
//! Cleans incoming text, wraps it in a fixed prompt, and asks an ordered
//! list of model candidates for a summary until one of them answers.
//!
//! Candidates are tried strictly one at a time; each call to the external
//! provider is billable, so there is no fan-out.

pub mod api_client;
pub mod error;
pub mod fallback;
pub mod gemini_types;
pub mod prompt;
pub mod sanitize;
pub mod service;

pub use api_client::GeminiBackend;
pub use error::{CandidateFailure, ModelError, SummarizationError};
pub use fallback::{first_success, ModelBackend, ModelOutput};
pub use sanitize::{sanitize, MAX_INPUT_CHARS};
pub use service::SummarizationService;
