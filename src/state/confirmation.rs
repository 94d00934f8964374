//! Pending confirmation state for the two-phase action protocol.

/// A confirmation request awaiting the user's yes/no decision.
///
/// At most one exists at a time, and it is scoped to the conversation that
/// raised it: any conversation switch, deletion of the active conversation,
/// or new-conversation reset destroys it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    /// Opaque correlator tying the decision back to the original request
    pub interaction_id: i64,
    /// Human-readable prompt describing the action awaiting confirmation
    pub prompt: String,
}

impl PendingConfirmation {
    /// Create a pending confirmation.
    pub fn new(interaction_id: i64, prompt: impl Into<String>) -> Self {
        Self { interaction_id, prompt: prompt.into() }
    }
}
