//! ValidationError: user-correctable problems with a reading entry.
//! Reported back to the user, never fatal, never mutates state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("empty value")]
    EmptyValue,

    #[error("no circuit to record against")]
    NoCircuit,
}

impl ValidationError {
    /// Notification title.
    pub fn title(&self) -> &'static str {
        match self {
            Self::EmptyValue => "Missing value",
            Self::NoCircuit => "No circuits",
        }
    }

    /// Notification body, also used as the spoken prompt.
    pub fn description(&self) -> &'static str {
        match self {
            Self::EmptyValue => "Please enter a reading before saving",
            Self::NoCircuit => "Add circuits to the schedule before recording readings",
        }
    }
}
