//! Message types for the active conversation transcript.

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identity of a transcript message.
///
/// The backend assigns integer ids; optimistic entries carry a locally
/// allocated id until (and unless) the server echoes them back on a later
/// history load. The welcome sentinel is synthetic: it is never sent to the
/// server and never acts as a pagination cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// The synthetic welcome message seeded into empty conversations.
    Welcome,
    /// Client-allocated id for an optimistic entry (epoch milliseconds,
    /// strictly increasing).
    Local(i64),
    /// Server-assigned id; the only kind usable as a `before_id` cursor.
    Server(i64),
}

impl MessageId {
    /// The server-assigned id, if this message has one.
    pub fn server_id(&self) -> Option<i64> {
        match self {
            MessageId::Server(id) => Some(*id),
            _ => None,
        }
    }

    /// Whether this is the welcome sentinel.
    pub fn is_welcome(&self) -> bool {
        matches!(self, MessageId::Welcome)
    }
}

impl Serialize for MessageId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MessageId::Welcome => serializer.serialize_str("welcome"),
            MessageId::Local(id) | MessageId::Server(id) => serializer.serialize_i64(*id),
        }
    }
}

impl<'de> Deserialize<'de> for MessageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = MessageId;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("an integer message id or the string \"welcome\"")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<MessageId, E> {
                Ok(MessageId::Server(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<MessageId, E> {
                Ok(MessageId::Server(v as i64))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<MessageId, E> {
                if v == "welcome" {
                    Ok(MessageId::Welcome)
                } else {
                    // Some backends stringify numeric ids.
                    v.parse::<i64>().map(MessageId::Server).map_err(|_| {
                        de::Error::invalid_value(de::Unexpected::Str(v), &self)
                    })
                }
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Role of a message in a conversation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A message as held in the client transcript.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Message identity (server, local, or the welcome sentinel)
    pub id: MessageId,
    /// Who authored the message
    pub role: MessageRole,
    /// Display text
    pub text: String,
    /// When the message was created
    pub created_at: DateTime<Utc>,
    /// Whether this entry is an inline error bubble
    #[serde(default)]
    pub is_error: bool,
    /// Whether this reply is asking the user to confirm an action
    #[serde(default)]
    pub requires_confirmation: bool,
    /// Correlator for the two-phase confirmation protocol
    #[serde(default)]
    pub interaction_id: Option<i64>,
    /// Opaque result of an executed action, if any
    #[serde(default)]
    pub action_result: Option<serde_json::Value>,
}

impl Message {
    /// Create a plain message with no confirmation or error flags.
    pub fn new(id: MessageId, role: MessageRole, text: impl Into<String>) -> Self {
        Self {
            id,
            role,
            text: text.into(),
            created_at: Utc::now(),
            is_error: false,
            requires_confirmation: false,
            interaction_id: None,
            action_result: None,
        }
    }

    /// Create an inline error bubble authored by the assistant.
    pub fn error(id: MessageId, text: impl Into<String>) -> Self {
        let mut msg = Self::new(id, MessageRole::Assistant, text);
        msg.is_error = true;
        msg
    }
}

/// Text of the synthetic welcome message.
pub const WELCOME_TEXT: &str = "Hi! I'm Lumen, your trading assistant. Ask me about your \
positions or strategies, or tell me to turn a strategy on or off.";

/// Build the welcome sentinel message.
///
/// Synthetic: seeded into every empty conversation, never sent to the
/// server, never paginated past.
pub fn welcome_message() -> Message {
    Message::new(MessageId::Welcome, MessageRole::Assistant, WELCOME_TEXT)
}

/// Canned prompts surfaced by the panel's empty state.
pub const EXAMPLE_PROMPTS: [&str; 5] = [
    "What are my positions?",
    "Show active strategies",
    "How did I do today?",
    "What's my P&L?",
    "Turn on my momentum strategy",
];

/// Message format from the server (different from the client [`Message`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerMessage {
    /// Server-assigned message id
    pub id: i64,
    /// Role of the sender ("user" or "assistant")
    #[serde(rename = "type")]
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
}

impl ServerMessage {
    /// Convert a server history entry into a client [`Message`].
    pub fn into_message(self) -> Message {
        Message {
            id: MessageId::Server(self.id),
            role: self.role,
            text: self.content,
            created_at: self.timestamp,
            is_error: false,
            requires_confirmation: false,
            interaction_id: None,
            action_result: None,
        }
    }
}
