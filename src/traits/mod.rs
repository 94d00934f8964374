//! Trait abstractions for external collaborators.
//!
//! These traits are the dependency-injection seams of the crate: the HTTP
//! transport and the speech engine are both swappable, with production
//! adapters and mocks living in [`crate::adapters`].

mod http;
mod speech;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use speech::{SpeechRecognizer, VoiceError, VoiceSignal};
