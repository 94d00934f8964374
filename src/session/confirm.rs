//! The two-phase action confirmation gate.

use crate::models::{ConfirmRequest, Message, MessageId, MessageRole};
use crate::traits::HttpClient;

use super::Session;

/// Inline bubble appended when resolving a confirmation fails.
const CONFIRM_FAILED_TEXT: &str = "Error processing that confirmation. Please try again.";

/// Result of resolving a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// No confirmation was pending; nothing happened.
    NoPending,
    /// The decision was delivered and the follow-up applied.
    Resolved,
    /// Delivery failed; an inline error bubble was appended. The pending
    /// confirmation is gone either way - stale buttons must not linger.
    Failed,
    /// The follow-up arrived after the user left the conversation.
    Discarded,
}

impl<C: HttpClient> Session<C> {
    /// Resolve the pending confirmation with the user's yes/no decision.
    ///
    /// Valid only while a confirmation is pending; it is consumed before the
    /// request suspends, so a second resolve (or a resolve after navigating
    /// away, which clears it) finds nothing to act on.
    pub async fn resolve_confirmation(&self, confirmed: bool) -> ResolveOutcome {
        let (epoch, pending) = {
            let mut store = self.lock();
            match store.take_confirmation() {
                Some(pending) => (store.epoch(), pending),
                None => return ResolveOutcome::NoPending,
            }
        };

        tracing::info!(
            interaction_id = pending.interaction_id,
            confirmed,
            "resolving confirmation"
        );
        let request = ConfirmRequest { interaction_id: pending.interaction_id, confirmed };

        match self.client().send_confirmation(&request).await {
            Ok(response) => {
                let mut store = self.lock();
                if !store.is_current(epoch) {
                    tracing::debug!("discarding confirmation follow-up for replaced conversation");
                    return ResolveOutcome::Discarded;
                }

                let text = response
                    .response
                    .text()
                    .map(str::to_string)
                    .unwrap_or_else(|| default_followup(confirmed).to_string());
                let id = store.allocate_local_id();
                let mut followup = Message::new(MessageId::Local(id), MessageRole::Assistant, text);
                followup.action_result = response.action_result;
                store.append_message(followup);

                ResolveOutcome::Resolved
            }
            Err(err) => {
                tracing::error!(error = %err, "confirmation failed");
                let mut store = self.lock();
                if !store.is_current(epoch) {
                    return ResolveOutcome::Discarded;
                }
                let id = store.allocate_local_id();
                store.append_message(Message::error(MessageId::Local(id), CONFIRM_FAILED_TEXT));
                ResolveOutcome::Failed
            }
        }
    }
}

fn default_followup(confirmed: bool) -> &'static str {
    if confirmed {
        "Action confirmed."
    } else {
        "Action cancelled."
    }
}
