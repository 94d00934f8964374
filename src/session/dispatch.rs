//! Message dispatch: optimistic send and reply reconciliation.

use crate::models::{ChatRequest, Message, MessageId, MessageRole, Utterance};
use crate::state::PendingConfirmation;
use crate::traits::HttpClient;

use super::Session;

/// Shown when a reply carries no text at all.
const EMPTY_REPLY_TEXT: &str = "I received your message.";

/// Inline bubble appended when a send fails.
const SEND_FAILED_TEXT: &str =
    "Sorry, I ran into an error processing your request. Please try again.";

/// Result of a dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Empty or whitespace-only text; no side effect at all.
    Skipped,
    /// The reply was applied to the transcript.
    Delivered,
    /// The request failed; an inline error bubble was appended.
    Failed,
    /// The response arrived after the user left the conversation and was
    /// discarded. The optimistic message died with the old transcript.
    Discarded,
}

impl<C: HttpClient> Session<C> {
    /// Send a user utterance to the assistant.
    ///
    /// The user's message is appended optimistically before the request
    /// suspends, so it is visible immediately and survives regardless of
    /// network outcome. Failures become inline error bubbles; the transcript
    /// is the error-reporting channel for sends.
    ///
    /// Concurrent sends are allowed: optimistic appends happen in call
    /// order, replies in arrival order (the backend does not promise reply
    /// ordering either).
    pub async fn send(&self, utterance: Utterance) -> DispatchOutcome {
        let text = utterance.text.trim();
        if text.is_empty() {
            return DispatchOutcome::Skipped;
        }

        // Optimistic append, synchronous with the call.
        let (epoch, conversation_id) = {
            let mut store = self.lock();
            let local_id = store.allocate_local_id();
            store.append_message(Message::new(
                MessageId::Local(local_id),
                MessageRole::User,
                text,
            ));
            (store.epoch(), store.active().conversation_id.clone())
        };

        tracing::info!(source = ?utterance.source, conversation = ?conversation_id, "dispatching message");
        let request =
            ChatRequest::new(text, utterance.source.input_type(), conversation_id.clone());

        match self.client().send_message(&request).await {
            Ok(response) => {
                let adopted = {
                    let mut store = self.lock();
                    if !store.is_current(epoch) {
                        tracing::debug!("discarding reply for replaced conversation");
                        return DispatchOutcome::Discarded;
                    }

                    // A differing id covers both "draft got created" and
                    // "server renumbered the conversation".
                    let adopted = match &response.conversation_id {
                        Some(new_id)
                            if store.active().conversation_id.as_deref()
                                != Some(new_id.as_str()) =>
                        {
                            store.adopt_conversation_id(new_id.clone());
                            true
                        }
                        _ => false,
                    };

                    let reply_text = response
                        .response
                        .text()
                        .unwrap_or(EMPTY_REPLY_TEXT)
                        .to_string();
                    let reply_id = store.allocate_local_id();
                    let mut reply = Message::new(
                        MessageId::Local(reply_id),
                        MessageRole::Assistant,
                        reply_text.clone(),
                    );
                    reply.requires_confirmation = response.requires_confirmation;
                    reply.interaction_id = response.interaction_id;
                    reply.action_result = response.action_result.clone();
                    store.append_message(reply);

                    if response.requires_confirmation {
                        match response.interaction_id {
                            Some(interaction_id) => store.install_confirmation(
                                PendingConfirmation::new(interaction_id, reply_text),
                            ),
                            None => tracing::warn!(
                                "reply requires confirmation but carries no interaction id"
                            ),
                        }
                    }

                    adopted
                };

                // The summary list now has (or renamed) an entry for this
                // conversation; refreshing is conversation-agnostic and safe.
                if adopted {
                    if let Err(err) = self.refresh_conversations().await {
                        tracing::warn!(error = %err, "conversation list refresh failed after id adoption");
                    }
                }

                DispatchOutcome::Delivered
            }
            Err(err) => {
                tracing::error!(error = %err, code = err.error_code(), "send failed");
                let mut store = self.lock();
                if !store.is_current(epoch) {
                    return DispatchOutcome::Discarded;
                }
                // The optimistic user message stays; only the failure is
                // reported inline.
                let error_id = store.allocate_local_id();
                store.append_message(Message::error(MessageId::Local(error_id), SEND_FAILED_TEXT));
                DispatchOutcome::Failed
            }
        }
    }
}
