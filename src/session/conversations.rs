//! Conversation list and navigation operations.

use crate::error::LumenResult;
use crate::models::{PageQuery, ServerMessage};
use crate::state::ActiveConversation;
use crate::traits::HttpClient;

use super::Session;

impl<C: HttpClient> Session<C> {
    /// Refresh the conversation summary list from the server.
    ///
    /// Conversation-agnostic: the result is applied regardless of what the
    /// active conversation has become in the meantime.
    pub async fn refresh_conversations(&self) -> LumenResult<()> {
        let response = self.client().list_conversations().await?;
        tracing::debug!(count = response.conversations.len(), "conversation list refreshed");
        self.lock().set_conversations(response.conversations);
        Ok(())
    }

    /// Load a conversation and make it active, replacing the current one.
    ///
    /// On failure nothing is mutated; the caller surfaces the error outside
    /// the transcript (there is no conversation to report into).
    pub async fn load_conversation(&self, conversation_id: &str) -> LumenResult<()> {
        tracing::info!(conversation = conversation_id, "loading conversation");
        let page = self.client().get_messages(conversation_id, PageQuery::latest()).await?;

        let messages = page.messages.into_iter().map(ServerMessage::into_message).collect();
        self.lock().replace_active(ActiveConversation::from_history(
            conversation_id,
            messages,
            page.has_more,
        ));
        Ok(())
    }

    /// Switch to another conversation; a no-op when it is already active.
    pub async fn switch_conversation(&self, conversation_id: &str) -> LumenResult<()> {
        if self.active_conversation_id().as_deref() == Some(conversation_id) {
            return Ok(());
        }
        self.load_conversation(conversation_id).await
    }

    /// Reset to a fresh draft conversation.
    ///
    /// The local reset is immediate; the summary-list refresh that follows
    /// is best-effort (a draft does not exist server-side yet, so a failed
    /// refresh loses nothing).
    pub async fn start_new(&self) {
        tracing::info!("starting new conversation");
        self.lock().start_new();

        if let Err(err) = self.refresh_conversations().await {
            tracing::warn!(error = %err, "conversation list refresh failed after reset");
        }
    }

    /// Delete a conversation.
    ///
    /// If it was the active conversation, the session falls back to a fresh
    /// draft (which also clears any pending confirmation). On failure
    /// nothing is mutated.
    pub async fn delete_conversation(&self, conversation_id: &str) -> LumenResult<()> {
        tracing::info!(conversation = conversation_id, "deleting conversation");
        self.client().delete_conversation(conversation_id).await?;

        let was_active = {
            let mut store = self.lock();
            store.remove_conversation(conversation_id);
            let was_active =
                store.active().conversation_id.as_deref() == Some(conversation_id);
            if was_active {
                store.start_new();
            }
            was_active
        };

        if was_active {
            if let Err(err) = self.refresh_conversations().await {
                tracing::warn!(error = %err, "conversation list refresh failed after delete");
            }
        }
        Ok(())
    }

    /// Rename a conversation.
    ///
    /// On failure nothing is mutated.
    pub async fn rename_conversation(&self, conversation_id: &str, title: &str) -> LumenResult<()> {
        self.client().rename_conversation(conversation_id, title).await?;
        self.lock().set_conversation_title(conversation_id, title);
        Ok(())
    }
}
