//! Voice capture state machine.

use crate::traits::{SpeechRecognizer, VoiceError, VoiceSignal};

/// Phase of the voice capture lifecycle.
///
/// `Idle -> Listening` on toggle; `Listening -> Idle` on explicit stop,
/// recognition error, or end-of-speech. A recognized transcript goes
/// straight to dispatch - there is no intermediate review phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePhase {
    Idle,
    Listening,
}

/// Drives a [`SpeechRecognizer`] and tracks the listening phase.
pub struct VoiceControl {
    phase: VoicePhase,
    recognizer: Box<dyn SpeechRecognizer>,
}

impl VoiceControl {
    /// Create a control around a speech engine.
    pub fn new(recognizer: Box<dyn SpeechRecognizer>) -> Self {
        Self { phase: VoicePhase::Idle, recognizer }
    }

    /// Current phase.
    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    /// Whether a listening session is active.
    pub fn is_listening(&self) -> bool {
        self.phase == VoicePhase::Listening
    }

    /// Toggle listening on or off. Returns the new listening state.
    pub fn toggle(&mut self) -> Result<bool, VoiceError> {
        match self.phase {
            VoicePhase::Listening => {
                self.recognizer.stop();
                self.phase = VoicePhase::Idle;
                Ok(false)
            }
            VoicePhase::Idle => {
                self.recognizer.start()?;
                self.phase = VoicePhase::Listening;
                Ok(true)
            }
        }
    }

    /// Consume a signal from the speech engine.
    ///
    /// Returns the transcript to auto-send, if the signal carried one.
    pub fn on_signal(&mut self, signal: VoiceSignal) -> Option<String> {
        match signal {
            VoiceSignal::Transcript(text) => {
                self.phase = VoicePhase::Idle;
                Some(text)
            }
            VoiceSignal::Error(message) => {
                tracing::warn!(error = %message, "speech recognition error");
                self.phase = VoicePhase::Idle;
                None
            }
            VoiceSignal::Ended => {
                self.phase = VoicePhase::Idle;
                None
            }
        }
    }
}

impl std::fmt::Debug for VoiceControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceControl").field("phase", &self.phase).finish()
    }
}
