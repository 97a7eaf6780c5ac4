//! Mail Retrieval Service
//!
//! Lists messages matching a filter at the mailbox provider, downloads
//! each one and reduces it to `{subject, body}`. Obtaining and refreshing
//! the provider's access token happens outside this crate.

pub mod error;
pub mod extract;
pub mod gmail;
pub mod service;

pub use error::MailboxError;
pub use extract::{extract_email, NO_SUBJECT};
pub use gmail::{GmailProvider, MailboxProvider, MessagePayload};
pub use service::MailService;
