//! Lumen client core - conversation orchestration for the Lumen trading
//! assistant.
//!
//! This crate holds the client-side dialogue logic: conversation state and
//! pagination, optimistic message dispatch, the two-phase action
//! confirmation protocol, and coordination of the pill/panel/voice input
//! surfaces. Rendering is a consumer concern; the core exposes state
//! snapshots and a UI event channel and knows nothing about pixels.

pub mod adapters;
pub mod client;
pub mod error;
pub mod events;
pub mod input;
pub mod models;
pub mod session;
pub mod state;
pub mod traits;
