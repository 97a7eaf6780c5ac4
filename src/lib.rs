//! Mail Digest Library
//!
//! A two-hop "fetch, then summarize" pipeline split across two HTTP
//! services and a client that sequences them:
//!
//! - [`mail`]: the Mail Retrieval Service (fetch messages from a mailbox provider)
//! - [`summarizer`]: the Summarization Service (sanitize input, try model candidates in order)
//! - [`orchestrator`]: intent classification and the sequential client pipeline
//!
//! The binaries live in `src/main.rs` (orchestrator) and `src/bin/`.

pub mod api;
pub mod config;
pub mod error;
pub mod mail;
pub mod models;
pub mod orchestrator;
pub mod server;
pub mod summarizer;
pub mod telemetry;
