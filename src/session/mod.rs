//! Session facade: orchestrates dialogue state against the backend.
//!
//! [`Session`] ties the [`AssistantClient`] to the [`ConversationStore`] and
//! implements the four protocol concerns, one per submodule:
//!
//! - `conversations` - list refresh, switching, new/delete/rename
//! - `dispatch` - optimistic send and reply reconciliation
//! - `confirm` - the two-phase action confirmation gate
//! - `history` - backward pagination of older messages
//!
//! The store is the only shared mutable resource. It sits behind a mutex
//! that is never held across an await: every operation locks to read or
//! patch, releases before suspending at the network boundary, and re-locks
//! to apply the result, re-checking the store epoch so results that arrive
//! after the user navigated away are discarded, not applied.

mod confirm;
mod conversations;
mod dispatch;
mod history;

pub use confirm::ResolveOutcome;
pub use dispatch::DispatchOutcome;
pub use history::PageFetch;

use std::sync::{Arc, Mutex, MutexGuard};

use crate::client::AssistantClient;
use crate::models::{ConversationSummary, Message};
use crate::state::{ConversationStore, PendingConfirmation};
use crate::traits::HttpClient;

/// Orchestration core for one assistant session.
///
/// Cheap to clone; clones share the same store, so concurrent operations
/// (e.g. two overlapping sends) observe and patch one transcript.
#[derive(Debug)]
pub struct Session<C: HttpClient> {
    client: AssistantClient<C>,
    store: Arc<Mutex<ConversationStore>>,
}

impl<C: HttpClient> Clone for Session<C> {
    fn clone(&self) -> Self {
        Self { client: self.client.clone(), store: Arc::clone(&self.store) }
    }
}

impl<C: HttpClient> Session<C> {
    /// Create a session starting in a draft conversation.
    pub fn new(client: AssistantClient<C>) -> Self {
        Self { client, store: Arc::new(Mutex::new(ConversationStore::new())) }
    }

    /// The backend client this session talks through.
    pub fn client(&self) -> &AssistantClient<C> {
        &self.client
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ConversationStore> {
        self.store.lock().expect("conversation store poisoned")
    }

    // ------------------------------------------------------------------
    // Read snapshots for consumers (input surfaces and the history view)
    // ------------------------------------------------------------------

    /// Known conversation summaries, most recently updated first.
    pub fn conversations(&self) -> Vec<ConversationSummary> {
        self.lock().conversations().to_vec()
    }

    /// The active transcript, oldest message first.
    pub fn messages(&self) -> Vec<Message> {
        self.lock().active().messages.clone()
    }

    /// The active conversation's server id, if it exists server-side.
    pub fn active_conversation_id(&self) -> Option<String> {
        self.lock().active().conversation_id.clone()
    }

    /// Whether older messages exist beyond the loaded window.
    pub fn has_more_older(&self) -> bool {
        self.lock().active().has_more_older
    }

    /// Whether an older-page fetch is in flight (for UI gating).
    pub fn is_loading_older(&self) -> bool {
        self.lock().active().is_loading_older
    }

    /// The outstanding confirmation request, if any.
    pub fn pending_confirmation(&self) -> Option<PendingConfirmation> {
        self.lock().pending_confirmation().cloned()
    }
}
