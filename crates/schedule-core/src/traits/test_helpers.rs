//! In-memory collaborators for tests and previews.

use std::sync::Mutex;

use super::form_data::FormDataStore;
use super::notifier::{NotificationKind, Notifier};
use super::speaker::{SpeechOptions, Speaker};
use crate::types::{Circuit, ReadingStore};

/// Form data held in memory. Counts write-backs so tests can assert that a
/// rejected entry never touched the store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormData {
    pub circuits: Vec<Circuit>,
    pub readings: ReadingStore,
    pub writes: usize,
}

impl InMemoryFormData {
    pub fn new(circuits: Vec<Circuit>) -> Self {
        Self {
            circuits,
            readings: ReadingStore::new(),
            writes: 0,
        }
    }

    pub fn with_readings(mut self, readings: ReadingStore) -> Self {
        self.readings = readings;
        self
    }
}

impl FormDataStore for InMemoryFormData {
    fn circuits(&self) -> Vec<Circuit> {
        self.circuits.clone()
    }

    fn readings(&self) -> ReadingStore {
        self.readings.clone()
    }

    fn set_readings(&mut self, readings: ReadingStore) {
        self.readings = readings;
        self.writes += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedNotification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

/// Notifier that keeps everything it is sent.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<RecordedNotification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<RecordedNotification> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn count(&self, kind: NotificationKind) -> usize {
        self.sent().iter().filter(|n| n.kind == kind).count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(RecordedNotification {
                kind,
                title: title.to_string(),
                description: description.to_string(),
            });
        }
    }
}

/// Speaker that keeps every utterance.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    spoken: Mutex<Vec<(String, SpeechOptions)>>,
}

impl RecordingSpeaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spoken(&self) -> Vec<(String, SpeechOptions)> {
        self.spoken.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&self, text: &str, options: SpeechOptions) {
        if let Ok(mut spoken) = self.spoken.lock() {
            spoken.push((text.to_string(), options));
        }
    }
}
