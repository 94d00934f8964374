//! Request payloads sent to the assistant backend.

use serde::{Deserialize, Serialize};

/// How the user produced an utterance, as reported to the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    Text,
    Voice,
}

/// Body of the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    /// The user's utterance
    pub message: String,
    /// Whether the utterance was typed or transcribed
    pub input_type: InputType,
    /// Additional context (unused for now, the endpoint accepts it)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    /// Existing conversation to append to; omitted for a draft conversation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

impl ChatRequest {
    /// Build a chat request with no extra context.
    pub fn new(message: impl Into<String>, input_type: InputType, conversation_id: Option<String>) -> Self {
        Self {
            message: message.into(),
            input_type,
            context: None,
            conversation_id,
        }
    }
}

/// Body of the confirmation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmRequest {
    /// Correlator from the confirmation-requiring reply
    pub interaction_id: i64,
    /// The user's decision
    pub confirmed: bool,
}

/// Body of the rename endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenameRequest {
    /// New conversation title
    pub title: String,
}

/// Query options for paginated message fetches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Maximum number of messages to return
    pub limit: u32,
    /// Only return messages strictly older than this server id
    pub before_id: Option<i64>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { limit: 30, before_id: None }
    }
}

impl PageQuery {
    /// Page of the latest messages (no cursor).
    pub fn latest() -> Self {
        Self::default()
    }

    /// Page of messages strictly older than `before_id`.
    pub fn before(before_id: i64) -> Self {
        Self { limit: 30, before_id: Some(before_id) }
    }

    /// Render the query string, including the leading `?`.
    pub fn to_query_string(&self) -> String {
        match self.before_id {
            Some(id) => format!("?limit={}&before_id={}", self.limit, id),
            None => format!("?limit={}", self.limit),
        }
    }
}
