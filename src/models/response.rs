//! Response payloads from the assistant backend.

use serde::{Deserialize, Serialize};

use super::conversation::ConversationSummary;
use super::message::ServerMessage;
use super::deserialize_opt_id;

/// The assistant's reply text, which the backend delivers under either
/// `message` or `text` depending on the handler that produced it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AssistantReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AssistantReply {
    /// The reply text, preferring `message` over `text`.
    pub fn text(&self) -> Option<&str> {
        self.message.as_deref().or(self.text.as_deref())
    }
}

/// Response to the chat endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    /// The assistant's reply
    #[serde(default)]
    pub response: AssistantReply,
    /// The conversation this exchange landed in; differs from the request's
    /// id when the server created a conversation for a first message
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub conversation_id: Option<String>,
    /// Whether the reply asks the user to confirm an action
    #[serde(default)]
    pub requires_confirmation: bool,
    /// Correlator for a later confirm/cancel decision
    #[serde(default)]
    pub interaction_id: Option<i64>,
    /// Opaque result of an already-executed action
    #[serde(default)]
    pub action_result: Option<serde_json::Value>,
}

/// Response to the confirmation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfirmResponse {
    /// The assistant's follow-up message
    #[serde(default)]
    pub response: AssistantReply,
    /// Opaque result of the confirmed action
    #[serde(default)]
    pub action_result: Option<serde_json::Value>,
}

/// Response to the conversation list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationsResponse {
    pub success: bool,
    #[serde(default)]
    pub conversations: Vec<ConversationSummary>,
}

/// Response to the paginated messages endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessagesResponse {
    pub success: bool,
    #[serde(default)]
    pub messages: Vec<ServerMessage>,
    /// Whether older messages exist beyond this page
    #[serde(default)]
    pub has_more: bool,
}

/// Response to the delete and rename endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AckResponse {
    pub success: bool,
}
