//! Message extraction rule
//!
//! Reduces a provider message payload to an [`EmailMessage`]. Missing
//! pieces degrade to placeholders instead of failing.
//!
//! Only top-level parts are scanned for the body. HTML-only messages and
//! messages whose plain text sits inside a nested multipart yield an
//! empty body.

use crate::mail::gmail::MessagePayload;
use crate::models::EmailMessage;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// Subject used when the `Subject` header is absent
pub const NO_SUBJECT: &str = "(No Subject)";

const PLAIN_TEXT: &str = "text/plain";

/// URL-safe base64 that accepts data with or without padding
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Apply the extraction rule to one message payload
pub fn extract_email(payload: &MessagePayload) -> EmailMessage {
    let subject = payload
        .headers
        .iter()
        .find(|h| h.name == "Subject")
        .map(|h| h.value.clone())
        .unwrap_or_else(|| NO_SUBJECT.to_string());

    let body = payload
        .parts
        .iter()
        .filter(|part| part.mime_type == PLAIN_TEXT)
        .find_map(|part| {
            let data = part.body.as_ref()?.data.as_deref()?;
            decode_body(data)
        })
        .unwrap_or_default();

    EmailMessage { subject, body }
}

/// Decode a provider body blob; `None` when it is not valid base64
pub fn decode_body(data: &str) -> Option<String> {
    match URL_SAFE_LENIENT.decode(data) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            tracing::debug!(error = %e, "Skipping undecodable body part");
            None
        }
    }
}
