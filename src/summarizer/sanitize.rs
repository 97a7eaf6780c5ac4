//! Input sanitization
//!
//! Deterministic cleanup applied to every summarize request before any
//! model sees it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hard cap on the cleaned input, in characters
pub const MAX_INPUT_CHARS: usize = 4000;

/// Known URL schemes only, so text glued to the front of a link survives
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?|ftps?|wss?|file)://\S+").expect("URL pattern is valid")
});

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Clean raw text for the model
///
/// Removes `http(s)://`, `ftp(s)://`, `ws(s)://` and `file://` links,
/// collapses whitespace runs (newlines included) to a single space, trims,
/// then keeps at most [`MAX_INPUT_CHARS`] characters. The cut is a plain prefix and may land
/// mid-word.
pub fn sanitize(text: &str) -> String {
    let without_urls = URL_PATTERN.replace_all(text, "");
    let collapsed = WHITESPACE_RUN.replace_all(&without_urls, " ");
    collapsed.trim().chars().take(MAX_INPUT_CHARS).collect()
}
