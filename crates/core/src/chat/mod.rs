//! Rule-based sales assistant for the website chat widget.
//!
//! The caller resubmits the whole transcript on every turn and the
//! assistant answers with exactly one reply. No session state is kept
//! between requests, so replies are a pure function of the transcript.
//!
//! - [`keywords`] -- keyword tables.
//! - [`qualification`] -- name / location / project-type detection.
//! - [`rules`] -- the ordered rule table and canned replies.
//! - [`bot`] -- [`SalesBot`], which evaluates the table.

pub mod bot;
pub mod keywords;
pub mod qualification;
pub mod rules;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub use bot::SalesBot;
pub use qualification::Qualification;

/// Author of a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

impl ChatRole {
    pub fn is_user(self) -> bool {
        self == ChatRole::User
    }
}

/// One entry of a chat transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }

    /// Decode a transcript entry without failing.
    ///
    /// A missing or unknown role is treated as `user` and missing or
    /// non-string content as the empty string.
    pub fn from_json_lenient(value: &serde_json::Value) -> Self {
        let role = value
            .get("role")
            .and_then(|r| serde_json::from_value::<ChatRole>(r.clone()).ok())
            .unwrap_or(ChatRole::User);
        let content = value
            .get("content")
            .and_then(|c| c.as_str())
            .unwrap_or_default()
            .to_string();
        Self { role, content }
    }

    /// Decode a JSON array into a transcript. Returns `None` if `value` is
    /// not an array.
    pub fn transcript_from_json(value: &serde_json::Value) -> Option<Vec<ChatMessage>> {
        value
            .as_array()
            .map(|entries| entries.iter().map(Self::from_json_lenient).collect())
    }
}

/// Something that can answer a chat transcript.
///
/// Injected into the HTTP layer so alternative assistants can be swapped in
/// (and failing ones substituted in tests).
#[async_trait]
pub trait ChatResponder: Send + Sync {
    async fn respond(&self, transcript: &[ChatMessage]) -> Result<String, CoreError>;
}

/// Canned reply used when a responder fails, chosen from the latest message.
pub fn fallback_reply(transcript: &[ChatMessage]) -> &'static str {
    let latest = transcript
        .last()
        .map(|m| m.content.to_lowercase())
        .unwrap_or_default();

    if keywords::contains_any(&latest, keywords::FALLBACK_CONSTRUCTION) {
        rules::replies::DEGRADED_CONSTRUCTION
    } else if keywords::contains_any(&latest, keywords::FALLBACK_PRICING) {
        rules::replies::DEGRADED_PRICING
    } else {
        rules::replies::DEGRADED_GENERIC
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lenient_decoding_defaults_role_and_content() {
        let msg = ChatMessage::from_json_lenient(&json!({ "role": "robot", "content": 42 }));
        assert_eq!(msg, ChatMessage::user(""));

        let msg = ChatMessage::from_json_lenient(&json!({ "role": "assistant", "content": "Hi" }));
        assert_eq!(msg, ChatMessage::assistant("Hi"));

        let msg = ChatMessage::from_json_lenient(&json!("just a string"));
        assert_eq!(msg, ChatMessage::user(""));
    }

    #[test]
    fn transcript_requires_an_array() {
        assert!(ChatMessage::transcript_from_json(&json!({ "content": "hi" })).is_none());
        assert!(ChatMessage::transcript_from_json(&json!(null)).is_none());

        let transcript =
            ChatMessage::transcript_from_json(&json!([{ "role": "user", "content": "hi" }]))
                .unwrap();
        assert_eq!(transcript, vec![ChatMessage::user("hi")]);
    }

    #[test]
    fn fallback_prefers_construction_then_pricing() {
        assert_eq!(
            fallback_reply(&[ChatMessage::user("How much to build a new pool?")]),
            rules::replies::DEGRADED_CONSTRUCTION
        );
        assert_eq!(
            fallback_reply(&[ChatMessage::user("What's the price?")]),
            rules::replies::DEGRADED_PRICING
        );
        assert_eq!(fallback_reply(&[]), rules::replies::DEGRADED_GENERIC);
    }
}
