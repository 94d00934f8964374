//! Mock implementations for testing.
//!
//! Test doubles for the crate's trait abstractions, enabling unit testing
//! without network access or a speech engine.

pub mod http;
pub mod speech;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use speech::MockSpeechRecognizer;
