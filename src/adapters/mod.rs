//! Concrete implementations of trait abstractions.
//!
//! Production adapters implementing the traits in `crate::traits`, plus
//! test doubles under [`mock`].
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock implementations
//!
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockSpeechRecognizer`] - Recording speech-engine stub

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockSpeechRecognizer};
pub use reqwest_http::ReqwestHttpClient;
