//! Conversation store: the single write path for dialogue state.
//!
//! All mutation of the conversation list, the active transcript, and the
//! pending confirmation goes through the patch methods here. Higher layers
//! (dispatch, pagination, confirmation) never touch fields directly, which
//! keeps state transitions deterministic under test.
//!
//! The store also carries an `epoch` counter: every wholesale replacement
//! of the active conversation bumps it. In-flight operations capture the
//! epoch before suspending and discard their result if it no longer
//! matches, so a slow response can never mutate a conversation the user has
//! already navigated away from.

use std::collections::HashSet;

use chrono::Utc;

use crate::models::{ConversationSummary, Message, MessageId};

use super::active::ActiveConversation;
use super::confirmation::PendingConfirmation;

/// In-memory session state for the assistant client.
#[derive(Debug, Default)]
pub struct ConversationStore {
    /// Known conversation summaries, ordered by `updated_at` descending
    conversations: Vec<ConversationSummary>,
    /// The conversation currently on screen
    active: ActiveConversation,
    /// Outstanding confirmation request, if any
    pending_confirmation: Option<PendingConfirmation>,
    /// Bumped on every wholesale active-conversation replacement
    epoch: u64,
    /// Last locally allocated optimistic message id
    last_local_id: i64,
}

impl ConversationStore {
    /// Create a store holding a draft conversation.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// Conversation summaries, most recently updated first.
    pub fn conversations(&self) -> &[ConversationSummary] {
        &self.conversations
    }

    /// The active conversation.
    pub fn active(&self) -> &ActiveConversation {
        &self.active
    }

    /// The outstanding confirmation request, if any.
    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending_confirmation.as_ref()
    }

    /// Current epoch; captured by in-flight operations for stale discard.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether `epoch` still denotes the current active conversation.
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }

    // ------------------------------------------------------------------
    // Conversation list patches
    // ------------------------------------------------------------------

    /// Replace the summary list, keeping it ordered by recency.
    pub fn set_conversations(&mut self, mut conversations: Vec<ConversationSummary>) {
        conversations.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        self.conversations = conversations;
    }

    /// Remove one summary from the list.
    pub fn remove_conversation(&mut self, id: &str) {
        self.conversations.retain(|c| c.id != id);
    }

    /// Update a summary's title in place.
    pub fn set_conversation_title(&mut self, id: &str, title: &str) {
        if let Some(summary) = self.conversations.iter_mut().find(|c| c.id == id) {
            summary.title = title.to_string();
        }
    }

    // ------------------------------------------------------------------
    // Active conversation patches
    // ------------------------------------------------------------------

    /// Replace the active conversation wholesale (switch or reload).
    ///
    /// Bumps the epoch and clears any pending confirmation: a confirmation
    /// prompt is scoped to the conversation that raised it.
    pub fn replace_active(&mut self, active: ActiveConversation) {
        self.epoch += 1;
        self.pending_confirmation = None;
        self.active = active;
    }

    /// Reset to a draft conversation holding only the welcome message.
    pub fn start_new(&mut self) {
        self.replace_active(ActiveConversation::draft());
    }

    /// Adopt a server-assigned identity for the active conversation.
    ///
    /// This is an in-place identity discovery, not a switch: the epoch is
    /// unchanged and in-flight results stay applicable.
    pub fn adopt_conversation_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(conversation = %id, "adopting server-assigned conversation id");
        self.active.conversation_id = Some(id);
    }

    /// Append a message to the transcript.
    pub fn append_message(&mut self, message: Message) {
        self.active.messages.push(message);
    }

    /// Prepend an older page, skipping ids already present.
    ///
    /// Server order within the batch is preserved, and the batch lands
    /// strictly before the current window. Returns how many messages were
    /// actually prepended.
    pub fn prepend_older(&mut self, batch: Vec<Message>, has_more_older: bool) -> usize {
        let known: HashSet<MessageId> = self.active.messages.iter().map(|m| m.id).collect();
        let fresh: Vec<Message> =
            batch.into_iter().filter(|m| !known.contains(&m.id)).collect();
        let count = fresh.len();

        let mut messages = fresh;
        messages.append(&mut self.active.messages);
        self.active.messages = messages;
        self.active.has_more_older = has_more_older;
        count
    }

    /// Flip the older-page in-flight flag.
    pub fn set_loading_older(&mut self, loading: bool) {
        self.active.is_loading_older = loading;
    }

    /// Allocate a strictly increasing local id for an optimistic message.
    ///
    /// Derived from the wall clock, with a tie-break so two sends within
    /// one millisecond still order correctly.
    pub fn allocate_local_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_local_id = now.max(self.last_local_id + 1);
        self.last_local_id
    }

    // ------------------------------------------------------------------
    // Confirmation patches
    // ------------------------------------------------------------------

    /// Install a pending confirmation, replacing any unanswered one.
    pub fn install_confirmation(&mut self, pending: PendingConfirmation) {
        if let Some(old) = &self.pending_confirmation {
            tracing::warn!(
                abandoned_interaction = old.interaction_id,
                new_interaction = pending.interaction_id,
                "replacing unanswered confirmation"
            );
        }
        self.pending_confirmation = Some(pending);
    }

    /// Take the pending confirmation, leaving none behind.
    pub fn take_confirmation(&mut self) -> Option<PendingConfirmation> {
        self.pending_confirmation.take()
    }

    /// Drop the pending confirmation, if any.
    pub fn clear_confirmation(&mut self) {
        self.pending_confirmation = None;
    }
}
