//! Active conversation state.

use crate::models::{welcome_message, Message};

/// The conversation currently shown to the user.
///
/// `conversation_id` is `None` for a draft conversation that does not exist
/// server-side yet; it becomes `Some` once the server assigns an id on the
/// first successful send.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveConversation {
    /// Server-side identity, if the conversation exists there
    pub conversation_id: Option<String>,
    /// Transcript in display order (oldest first)
    pub messages: Vec<Message>,
    /// Whether older messages exist beyond the loaded window
    pub has_more_older: bool,
    /// Whether an older-page fetch is in flight
    pub is_loading_older: bool,
}

impl ActiveConversation {
    /// A fresh draft conversation holding only the welcome message.
    pub fn draft() -> Self {
        Self {
            conversation_id: None,
            messages: vec![welcome_message()],
            has_more_older: false,
            is_loading_older: false,
        }
    }

    /// Build the active conversation from a loaded history page.
    ///
    /// An empty history is seeded with the welcome message so the transcript
    /// is never blank.
    pub fn from_history(
        conversation_id: impl Into<String>,
        messages: Vec<Message>,
        has_more_older: bool,
    ) -> Self {
        let messages = if messages.is_empty() { vec![welcome_message()] } else { messages };
        Self {
            conversation_id: Some(conversation_id.into()),
            messages,
            has_more_older,
            is_loading_older: false,
        }
    }

    /// The pagination cursor: the oldest loaded message's server id.
    ///
    /// `None` when the oldest entry is the welcome sentinel or an optimistic
    /// local message; neither has predecessors on the server.
    pub fn oldest_server_id(&self) -> Option<i64> {
        self.messages.first().and_then(|m| m.id.server_id())
    }
}

impl Default for ActiveConversation {
    fn default() -> Self {
        Self::draft()
    }
}
