//! Speech recognition boundary trait.
//!
//! The actual speech-to-text engine is a platform collaborator; the core
//! only needs to start and stop a listening session and consume the signals
//! the engine emits. Exactly one of [`VoiceSignal::Transcript`] or
//! [`VoiceSignal::Error`] is delivered per listening session, followed by
//! [`VoiceSignal::Ended`].

use thiserror::Error;

/// Errors raised when controlling the speech engine.
#[derive(Debug, Clone, Error)]
pub enum VoiceError {
    /// No speech engine is available on this platform.
    #[error("speech recognition is not available")]
    Unavailable,
    /// The engine refused to start (already busy, missing permissions, ...).
    #[error("speech recognition failed to start: {0}")]
    StartFailed(String),
}

/// Signal emitted by the speech engine during a listening session.
#[derive(Debug, Clone, PartialEq)]
pub enum VoiceSignal {
    /// A final transcript was recognized.
    Transcript(String),
    /// Recognition failed.
    Error(String),
    /// The listening session ended (always the last signal).
    Ended,
}

/// Control surface for a speech-to-text engine.
///
/// Implementations deliver [`VoiceSignal`]s to whatever sink the embedding
/// application wires up (typically `VoiceControl::on_signal`); this trait
/// only covers the imperative start/stop half of the boundary.
pub trait SpeechRecognizer: Send {
    /// Begin a listening session.
    fn start(&mut self) -> Result<(), VoiceError>;

    /// Stop the current listening session, if any.
    fn stop(&mut self);
}
