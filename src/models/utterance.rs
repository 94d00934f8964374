//! User utterances and their originating input surfaces.

use super::request::InputType;

/// Which surface produced an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtteranceSource {
    /// The compact always-visible input pill
    Pill,
    /// The expanded chat panel's input
    Panel,
    /// A recognized voice transcript
    Voice,
    /// A clicked example suggestion
    Suggestion,
}

impl UtteranceSource {
    /// The input type reported to the backend for this source.
    pub fn input_type(&self) -> InputType {
        match self {
            UtteranceSource::Voice => InputType::Voice,
            _ => InputType::Text,
        }
    }
}

/// A completed user utterance, tagged with its source.
///
/// Typed text, voice transcripts, and suggestion clicks all flow through
/// this one type; the dispatcher treats them uniformly and only the input
/// coordinator cares about the source (for buffer clearing and UI events).
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub source: UtteranceSource,
}

impl Utterance {
    /// Create an utterance.
    pub fn new(text: impl Into<String>, source: UtteranceSource) -> Self {
        Self { text: text.into(), source }
    }
}
