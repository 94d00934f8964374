//! Conversation summary metadata for the conversation list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::deserialize_id;

/// Lightweight metadata for one entry in the conversation list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConversationSummary {
    /// Opaque conversation id (the backend sends string or integer)
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Title derived from the first message
    #[serde(default)]
    pub title: String,
    /// Preview of the last message
    #[serde(default)]
    pub preview: String,
    /// When the conversation was last updated
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}
