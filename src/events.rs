//! Presentational events emitted toward the rendering layer.
//!
//! These carry no protocol state: dropping or ignoring them never affects
//! dialogue correctness. They exist so a renderer can animate without the
//! core knowing anything about rendering.

use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Event for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The expanded panel was opened.
    PanelOpened,
    /// A pill submission should animate toward the (about to open) panel.
    FlyingMessage { text: String },
    /// Voice capture started or stopped.
    ListeningChanged { listening: bool },
}

/// Sending half of the UI event channel.
pub type UiEventSender = UnboundedSender<UiEvent>;
/// Receiving half of the UI event channel.
pub type UiEventReceiver = UnboundedReceiver<UiEvent>;

/// Create the UI event channel.
pub fn ui_event_channel() -> (UiEventSender, UiEventReceiver) {
    unbounded_channel()
}
