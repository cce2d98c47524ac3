//! `Speaker`: optional text-to-speech output.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpeechPriority {
    Low,
    Normal,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeechOptions {
    pub priority: SpeechPriority,
    /// Cut off whatever is currently being spoken.
    pub interrupt: bool,
}

impl SpeechOptions {
    pub fn new(priority: SpeechPriority, interrupt: bool) -> Self {
        Self { priority, interrupt }
    }
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self::new(SpeechPriority::Normal, false)
    }
}

pub trait Speaker: Send + Sync {
    fn speak(&self, text: &str, options: SpeechOptions);
}

impl<T: Speaker + ?Sized> Speaker for Arc<T> {
    fn speak(&self, text: &str, options: SpeechOptions) {
        (**self).speak(text, options)
    }
}
