/// Top-level error type for the schedule of tests.
/// Covers catalogue/config loading and data arriving from the form.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    #[error("unknown test type: {id}")]
    UnknownTestType { id: String },

    #[error("duplicate test type id: {id}")]
    DuplicateTestType { id: String },

    #[error("invalid catalogue: {0}")]
    InvalidCatalogue(String),

    #[error("invalid circuit at position {position}: {reason}")]
    InvalidCircuit { position: usize, reason: String },

    #[error("duplicate circuit id: {id}")]
    DuplicateCircuit { id: String },

    #[error("invalid readings: {0}")]
    InvalidReadings(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias.
pub type ScheduleResult<T> = Result<T, ScheduleError>;
