//! Wire and domain types shared across the crate.

mod conversation;
mod message;
mod request;
mod response;
mod utterance;

pub use conversation::ConversationSummary;
pub use message::{
    welcome_message, Message, MessageId, MessageRole, ServerMessage, EXAMPLE_PROMPTS,
    WELCOME_TEXT,
};
pub use request::{ChatRequest, ConfirmRequest, InputType, PageQuery, RenameRequest};
pub use response::{
    AckResponse, AssistantReply, ChatResponse, ConfirmResponse, ConversationsResponse,
    MessagesResponse,
};
pub use utterance::{Utterance, UtteranceSource};

use serde::{Deserialize, Deserializer};

/// Helper to deserialize an id as either string or integer.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or integer")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// Helper to deserialize an optional id as string, integer, or null.
pub(crate) fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Str(String),
        Int(i64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Str(s) => s,
        RawId::Int(n) => n.to_string(),
    }))
}
