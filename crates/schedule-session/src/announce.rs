//! Announcer: routes flow outcomes to the notification and speech
//! collaborators. Both are optional; with neither attached every call is a
//! no-op.

use std::sync::Arc;

use schedule_core::traits::{NotificationKind, Notifier, SpeechOptions, SpeechPriority, Speaker};
use schedule_core::types::{Circuit, TestTypeDefinition};
use schedule_core::ValidationError;

#[derive(Clone, Default)]
pub struct Announcer {
    notifier: Option<Arc<dyn Notifier>>,
    speaker: Option<Arc<dyn Speaker>>,
    speak: bool,
}

impl std::fmt::Debug for Announcer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Announcer")
            .field("notifier", &self.notifier.is_some())
            .field("speaker", &self.speaker.is_some())
            .field("speak", &self.speak)
            .finish()
    }
}

impl Announcer {
    pub fn new(speak: bool) -> Self {
        Self {
            notifier: None,
            speaker: None,
            speak,
        }
    }

    pub fn set_notifier(&mut self, notifier: Arc<dyn Notifier>) {
        self.notifier = Some(notifier);
    }

    pub fn set_speaker(&mut self, speaker: Arc<dyn Speaker>) {
        self.speaker = Some(speaker);
    }

    pub fn validation_failed(&self, error: ValidationError) {
        self.notify(NotificationKind::Warning, error.title(), error.description());
        self.say(error.description(), SpeechOptions::new(SpeechPriority::High, true));
    }

    pub fn reading_saved(&self, test_type: &TestTypeDefinition, circuit: &Circuit, value: &str) {
        let reading = test_type.format_reading(value);
        self.notify(
            NotificationKind::Success,
            "Reading saved",
            &format!("Circuit {}: {} {}", circuit.number, test_type.name, reading),
        );
        self.say(
            &format!("Circuit {} saved, {}", circuit.number, reading),
            SpeechOptions::default(),
        );
    }

    pub fn applied_to_all(&self, test_type: &TestTypeDefinition, value: &str, count: usize) {
        let reading = test_type.format_reading(value);
        self.notify(
            NotificationKind::Success,
            "Applied to all circuits",
            &format!("Applied {} \"{}\" to {} circuits", test_type.name, reading, count),
        );
        self.say(
            &format!("{} applied to {} circuits", reading, count),
            SpeechOptions::default(),
        );
    }

    pub fn filled(&self, test_type: &TestTypeDefinition, value: &str, count: usize) {
        self.notify(
            NotificationKind::Success,
            "Bulk fill",
            &format!("Filled {} {} readings with \"{}\"", count, test_type.name, value.trim()),
        );
    }

    pub fn test_type_complete(&self, test_type: &TestTypeDefinition) {
        let text = format!("All {} tests complete", test_type.name);
        self.notify(NotificationKind::Success, "Test complete", &text);
        self.say(&text, SpeechOptions::new(SpeechPriority::Low, false));
    }

    fn notify(&self, kind: NotificationKind, title: &str, description: &str) {
        if let Some(notifier) = &self.notifier {
            notifier.notify(kind, title, description);
        }
    }

    fn say(&self, text: &str, options: SpeechOptions) {
        if !self.speak {
            return;
        }
        if let Some(speaker) = &self.speaker {
            speaker.speak(text, options);
        }
    }
}
