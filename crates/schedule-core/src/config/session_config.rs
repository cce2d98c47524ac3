//! Reading entry session configuration.

use serde::{Deserialize, Serialize};

/// Which circuits "apply to all" writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyScope {
    /// Every circuit in the session, applicable or not.
    #[default]
    AllCircuits,
    /// Only circuits the selected test type applies to.
    ApplicableOnly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Move to the next circuit after a successful save.
    pub auto_advance: bool,
    pub apply_to_all_scope: ApplyScope,
    /// Seed the completion set from readings already in the form.
    /// `false` starts every session at 0 %.
    pub derive_completion_from_store: bool,
    /// Speak confirmations and warnings when a speaker is attached.
    pub speak_feedback: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            auto_advance: true,
            apply_to_all_scope: ApplyScope::AllCircuits,
            derive_completion_from_store: true,
            speak_feedback: true,
        }
    }
}
