//! Input coordination across the pill, panel, voice, and suggestions.
//!
//! [`InputCoordinator`] arbitrates the concurrent entry surfaces: each
//! completed utterance (Enter, send click, end-of-speech transcript, or
//! suggestion click) is forwarded to dispatch exactly once, only the
//! originating surface's buffer is cleared, and the transient presentation
//! effects (flying message, panel opening) are emitted as fire-and-forget
//! [`UiEvent`]s that never delay the send.

mod voice;

pub use voice::{VoiceControl, VoicePhase};

use crate::events::{ui_event_channel, UiEvent, UiEventReceiver, UiEventSender};
use crate::models::{Utterance, UtteranceSource};
use crate::session::{DispatchOutcome, Session};
use crate::traits::{HttpClient, SpeechRecognizer, VoiceError, VoiceSignal};

/// Arbitrates the input surfaces in front of one [`Session`].
#[derive(Debug)]
pub struct InputCoordinator<C: HttpClient> {
    session: Session<C>,
    pill_buffer: String,
    panel_buffer: String,
    panel_open: bool,
    voice: VoiceControl,
    events: UiEventSender,
}

impl<C: HttpClient> InputCoordinator<C> {
    /// Create a coordinator and the receiving half of its UI event channel.
    pub fn new(
        session: Session<C>,
        recognizer: Box<dyn SpeechRecognizer>,
    ) -> (Self, UiEventReceiver) {
        let (events, receiver) = ui_event_channel();
        let coordinator = Self {
            session,
            pill_buffer: String::new(),
            panel_buffer: String::new(),
            panel_open: false,
            voice: VoiceControl::new(recognizer),
            events,
        };
        (coordinator, receiver)
    }

    /// The session this coordinator dispatches into.
    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    // ------------------------------------------------------------------
    // Buffers and panel state
    // ------------------------------------------------------------------

    /// Current pill text.
    pub fn pill_text(&self) -> &str {
        &self.pill_buffer
    }

    /// Replace the pill text.
    pub fn set_pill_text(&mut self, text: impl Into<String>) {
        self.pill_buffer = text.into();
    }

    /// Current panel text.
    pub fn panel_text(&self) -> &str {
        &self.panel_buffer
    }

    /// Replace the panel text.
    pub fn set_panel_text(&mut self, text: impl Into<String>) {
        self.panel_buffer = text.into();
    }

    /// Whether the expanded panel is open.
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Open the expanded panel.
    pub fn open_panel(&mut self) {
        if !self.panel_open {
            self.panel_open = true;
            let _ = self.events.send(UiEvent::PanelOpened);
        }
    }

    /// Close the expanded panel.
    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    /// Toggle the expanded panel.
    pub fn toggle_panel(&mut self) {
        if self.panel_open {
            self.close_panel();
        } else {
            self.open_panel();
        }
    }

    // ------------------------------------------------------------------
    // Submission paths - exactly one dispatch per completed utterance
    // ------------------------------------------------------------------

    /// Submit the pill's current text.
    ///
    /// While the panel is closed this also emits the flying-message event
    /// and opens the panel; both are presentational and do not gate the
    /// dispatch.
    pub async fn submit_pill(&mut self) -> DispatchOutcome {
        let text = self.pill_buffer.trim().to_string();
        if text.is_empty() {
            return DispatchOutcome::Skipped;
        }
        self.pill_buffer.clear();

        if !self.panel_open {
            let _ = self.events.send(UiEvent::FlyingMessage { text: text.clone() });
            self.open_panel();
        }

        self.session.send(Utterance::new(text, UtteranceSource::Pill)).await
    }

    /// Submit the panel's current text.
    pub async fn submit_panel(&mut self) -> DispatchOutcome {
        let text = self.panel_buffer.trim().to_string();
        if text.is_empty() {
            return DispatchOutcome::Skipped;
        }
        self.panel_buffer.clear();
        self.open_panel();

        self.session.send(Utterance::new(text, UtteranceSource::Panel)).await
    }

    /// Submit a clicked example suggestion. Buffers are untouched.
    pub async fn submit_suggestion(&mut self, text: &str) -> DispatchOutcome {
        self.open_panel();
        self.session.send(Utterance::new(text, UtteranceSource::Suggestion)).await
    }

    // ------------------------------------------------------------------
    // Voice
    // ------------------------------------------------------------------

    /// Whether voice capture is listening.
    pub fn is_listening(&self) -> bool {
        self.voice.is_listening()
    }

    /// Toggle voice capture. Returns the new listening state.
    pub fn toggle_voice(&mut self) -> Result<bool, VoiceError> {
        let listening = self.voice.toggle()?;
        let _ = self.events.send(UiEvent::ListeningChanged { listening });
        Ok(listening)
    }

    /// Feed a signal from the speech engine.
    ///
    /// A transcript is auto-sent as a voice utterance - voice input is
    /// trusted like typed input for dispatch (action confirmation still
    /// requires its explicit yes/no). Returns the dispatch outcome when a
    /// send happened.
    pub async fn on_voice_signal(&mut self, signal: VoiceSignal) -> Option<DispatchOutcome> {
        let was_listening = self.voice.is_listening();
        let transcript = self.voice.on_signal(signal);

        if was_listening && !self.voice.is_listening() {
            let _ = self.events.send(UiEvent::ListeningChanged { listening: false });
        }

        let text = transcript?;
        self.open_panel();
        Some(self.session.send(Utterance::new(text, UtteranceSource::Voice)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockSpeechRecognizer};
    use crate::client::AssistantClient;

    fn coordinator_with(
        mock: MockHttpClient,
    ) -> (InputCoordinator<MockHttpClient>, UiEventReceiver) {
        let session =
            Session::new(AssistantClient::with_base_url(mock, "https://api.test"));
        InputCoordinator::new(session, Box::new(MockSpeechRecognizer::new()))
    }

    fn mock_with_chat() -> MockHttpClient {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "https://api.test/api/v1/assistant/chat",
            r#"{"response": {"message": "ok"}, "conversation_id": "c1"}"#,
        );
        mock.set_json_response(
            "https://api.test/api/v1/assistant/conversations",
            r#"{"success": true, "conversations": []}"#,
        );
        mock
    }

    #[tokio::test]
    async fn test_pill_submit_clears_only_pill_buffer() {
        let mock = mock_with_chat();
        let (mut coordinator, _events) = coordinator_with(mock);
        coordinator.set_pill_text("from pill");
        coordinator.set_panel_text("draft in panel");

        let outcome = coordinator.submit_pill().await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
        assert_eq!(coordinator.pill_text(), "");
        assert_eq!(coordinator.panel_text(), "draft in panel");
    }

    #[tokio::test]
    async fn test_panel_submit_clears_only_panel_buffer() {
        let mock = mock_with_chat();
        let (mut coordinator, _events) = coordinator_with(mock);
        coordinator.set_pill_text("draft in pill");
        coordinator.set_panel_text("from panel");

        coordinator.submit_panel().await;

        assert_eq!(coordinator.pill_text(), "draft in pill");
        assert_eq!(coordinator.panel_text(), "");
    }

    #[tokio::test]
    async fn test_empty_submissions_do_nothing() {
        let mock = MockHttpClient::new();
        let (mut coordinator, _events) = coordinator_with(mock.clone());
        coordinator.set_pill_text("   ");

        assert_eq!(coordinator.submit_pill().await, DispatchOutcome::Skipped);
        assert_eq!(coordinator.submit_panel().await, DispatchOutcome::Skipped);
        assert!(mock.requests().is_empty());
        assert!(!coordinator.is_panel_open());
    }

    #[tokio::test]
    async fn test_pill_submit_with_closed_panel_emits_flight_then_opens() {
        let mock = mock_with_chat();
        let (mut coordinator, mut events) = coordinator_with(mock);
        coordinator.set_pill_text("show P&L");

        coordinator.submit_pill().await;

        assert!(coordinator.is_panel_open());
        assert_eq!(
            events.recv().await,
            Some(UiEvent::FlyingMessage { text: "show P&L".to_string() })
        );
        assert_eq!(events.recv().await, Some(UiEvent::PanelOpened));
    }

    #[tokio::test]
    async fn test_pill_submit_with_open_panel_skips_flight() {
        let mock = mock_with_chat();
        let (mut coordinator, mut events) = coordinator_with(mock);
        coordinator.open_panel();
        assert_eq!(events.recv().await, Some(UiEvent::PanelOpened));

        coordinator.set_pill_text("hello");
        coordinator.submit_pill().await;

        // No further presentation events
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_suggestion_submits_once_without_touching_buffers() {
        let mock = mock_with_chat();
        let (mut coordinator, _events) = coordinator_with(mock.clone());
        coordinator.set_pill_text("keep me");

        coordinator.submit_suggestion("What are my positions?").await;

        assert_eq!(coordinator.pill_text(), "keep me");
        assert_eq!(mock.request_count("/chat"), 1);
        let body = mock.requests()[0].body.clone().unwrap();
        assert!(body.contains("What are my positions?"));
    }

    #[tokio::test]
    async fn test_voice_transcript_auto_sends() {
        let mock = mock_with_chat();
        let (mut coordinator, mut events) = coordinator_with(mock.clone());

        coordinator.toggle_voice().unwrap();
        assert!(coordinator.is_listening());
        assert_eq!(events.recv().await, Some(UiEvent::ListeningChanged { listening: true }));

        let outcome = coordinator
            .on_voice_signal(VoiceSignal::Transcript("what are my positions".to_string()))
            .await;

        assert_eq!(outcome, Some(DispatchOutcome::Delivered));
        assert!(!coordinator.is_listening());
        assert_eq!(mock.request_count("/chat"), 1);
        let body = mock.requests()[0].body.clone().unwrap();
        assert!(body.contains(r#""input_type":"voice""#));
    }

    #[tokio::test]
    async fn test_voice_error_ends_listening_without_send() {
        let mock = MockHttpClient::new();
        let (mut coordinator, _events) = coordinator_with(mock.clone());
        coordinator.toggle_voice().unwrap();

        let outcome = coordinator.on_voice_signal(VoiceSignal::Error("no speech".to_string())).await;

        assert_eq!(outcome, None);
        assert!(!coordinator.is_listening());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_voice_end_after_transcript_sends_exactly_once() {
        let mock = mock_with_chat();
        let (mut coordinator, _events) = coordinator_with(mock.clone());
        coordinator.toggle_voice().unwrap();

        coordinator.on_voice_signal(VoiceSignal::Transcript("hello".to_string())).await;
        coordinator.on_voice_signal(VoiceSignal::Ended).await;

        assert_eq!(mock.request_count("/chat"), 1);
    }

    #[tokio::test]
    async fn test_panel_toggle() {
        let mock = MockHttpClient::new();
        let (mut coordinator, _events) = coordinator_with(mock);

        assert!(!coordinator.is_panel_open());
        coordinator.toggle_panel();
        assert!(coordinator.is_panel_open());
        coordinator.toggle_panel();
        assert!(!coordinator.is_panel_open());
    }
}
