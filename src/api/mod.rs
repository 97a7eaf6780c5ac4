//! API module
//!
//! HTTP routers and request handlers for both services

pub mod mail;
pub mod middleware;
pub mod summarize;

pub use mail::mail_router;
pub use summarize::summarizer_router;
