//! Mock speech recognizer for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{SpeechRecognizer, VoiceError};

/// Mock speech recognizer that records start/stop calls.
///
/// Signal delivery is driven by the test itself (signals are plain values
/// fed to `VoiceControl::on_signal`), so the mock only tracks the
/// imperative half of the boundary.
#[derive(Debug, Clone, Default)]
pub struct MockSpeechRecognizer {
    starts: Arc<Mutex<u32>>,
    stops: Arc<Mutex<u32>>,
    fail_start: Arc<Mutex<bool>>,
}

impl MockSpeechRecognizer {
    /// Create a new mock recognizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `start()` calls fail.
    pub fn fail_next_start(&self) {
        *self.fail_start.lock().unwrap() = true;
    }

    /// Number of times `start()` was called.
    pub fn start_count(&self) -> u32 {
        *self.starts.lock().unwrap()
    }

    /// Number of times `stop()` was called.
    pub fn stop_count(&self) -> u32 {
        *self.stops.lock().unwrap()
    }
}

impl SpeechRecognizer for MockSpeechRecognizer {
    fn start(&mut self) -> Result<(), VoiceError> {
        if *self.fail_start.lock().unwrap() {
            return Err(VoiceError::StartFailed("mock failure".to_string()));
        }
        *self.starts.lock().unwrap() += 1;
        Ok(())
    }

    fn stop(&mut self) {
        *self.stops.lock().unwrap() += 1;
    }
}
