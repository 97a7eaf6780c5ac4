//! Gemini API request/response types
//!
//! Only the fields the summarizer reads are modelled; everything else in
//! the provider's JSON is ignored.

use serde::{Deserialize, Serialize};

/// Top-level `generateContent` response
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GeminiApiResponse {
    /// Candidate completions
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the prompt itself was rejected
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

/// A single candidate completion
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Absent when generation stopped before producing anything
    #[serde(default)]
    pub content: Option<Content>,
    /// Why the model stopped generating
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Content of a candidate
#[derive(Deserialize, Debug)]
pub struct Content {
    /// Ordered parts; text parts are concatenated
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a candidate's content
#[derive(Deserialize, Debug)]
pub struct Part {
    /// Text for text parts, absent for other part kinds
    #[serde(default)]
    pub text: Option<String>,
}

/// Feedback about the prompt
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Reason the prompt was blocked
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// `generateContent` request body
#[derive(Serialize, Debug)]
pub struct GeminiApiRequest {
    /// Conversation turns; the summarizer always sends one
    pub contents: Vec<RequestContent>,
}

impl GeminiApiRequest {
    /// A single-turn text request
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

/// One turn in a request
#[derive(Serialize, Debug)]
pub struct RequestContent {
    /// Text parts
    pub parts: Vec<RequestPart>,
}

/// A text part in a request
#[derive(Serialize, Debug)]
pub struct RequestPart {
    /// The text content
    pub text: String,
}

impl GeminiApiResponse {
    /// Concatenated text of the first candidate, if it has any
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let json = serde_json::to_string(&GeminiApiRequest::from_prompt("hi")).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"hi"}]}]}"#);
    }

    #[test]
    fn test_response_concatenates_parts() {
        let json = r#"{
            "candidates": [{
                "content": {"parts": [{"text": "Hello "}, {"text": "world"}], "role": "model"},
                "finishReason": "STOP"
            }]
        }"#;
        let parsed: GeminiApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_text(), Some("Hello world".to_string()));
        assert_eq!(parsed.candidates[0].finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn test_response_blocked_prompt() {
        let json = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let parsed: GeminiApiResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.candidates.is_empty());
        assert_eq!(
            parsed.prompt_feedback.unwrap().block_reason.as_deref(),
            Some("SAFETY")
        );
    }

    #[test]
    fn test_candidate_without_content() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let parsed: GeminiApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.first_text(), None);
    }
}
