//! Orchestrator module
//!
//! Classifies free-text input into a task and sequences the two service
//! calls for it. The Orchestrator is the only component that knows about
//! both services; it reaches them through the client traits in [`client`]
//! so the pipeline can run against fakes.

pub mod client;
pub mod error;
pub mod intent;
pub mod runner;

pub use client::{HttpMailClient, HttpSummarizerClient, MailClient, SummarizerClient};
pub use error::{ClientError, OrchestrationError};
pub use intent::classify;
pub use runner::{Digest, Orchestrator};
