//! Circuit: one row of the schedule, supplied by the form.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::identifiers::CircuitId;

/// Human-facing circuit label. Forms carry either a plain number or a
/// designation such as `"C3"` or `"L1/2"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CircuitNumber {
    Numeric(u32),
    Label(String),
}

impl fmt::Display for CircuitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

impl From<u32> for CircuitNumber {
    fn from(n: u32) -> Self {
        Self::Numeric(n)
    }
}

impl From<&str> for CircuitNumber {
    fn from(label: &str) -> Self {
        Self::Label(label.to_string())
    }
}

/// A circuit as seen by the schedule. Read-only for the whole session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Circuit {
    pub id: CircuitId,
    pub number: CircuitNumber,
    /// Free text; the only field applicability rules look at.
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cable_size: Option<String>,
    #[serde(default)]
    pub device_rating: Option<String>,
}

impl Circuit {
    pub fn new(
        id: impl Into<CircuitId>,
        number: impl Into<CircuitNumber>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            number: number.into(),
            description: description.into(),
            cable_size: None,
            device_rating: None,
        }
    }
}
