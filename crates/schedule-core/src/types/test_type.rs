//! Test-type definitions: what can be measured and where it applies.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::identifiers::TestTypeId;

/// Which circuits a test type applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Applicability {
    /// Every circuit gets this test.
    AllCircuits,
    /// Only circuits whose description contains one of these keywords.
    /// Keywords are lower-case and unique once normalised.
    CircuitKeywordMatch { keywords: SmallVec<[String; 4]> },
}

impl Applicability {
    /// Build a keyword rule, lower-casing and de-duplicating the keywords.
    pub fn keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalised: SmallVec<[String; 4]> = SmallVec::new();
        for keyword in keywords {
            let keyword = keyword.as_ref().trim().to_lowercase();
            if !keyword.is_empty() && !normalised.contains(&keyword) {
                normalised.push(keyword);
            }
        }
        Self::CircuitKeywordMatch { keywords: normalised }
    }

    /// Re-normalise keywords that arrived through deserialisation.
    pub fn normalised(&self) -> Self {
        match self {
            Self::AllCircuits => Self::AllCircuits,
            Self::CircuitKeywordMatch { keywords } => Self::keywords(keywords.iter()),
        }
    }
}

/// Static description of a test type. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTypeDefinition {
    pub id: TestTypeId,
    pub name: String,
    /// Unit shown next to the reading, e.g. `"MΩ"`. Empty for pass/fail tests.
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    pub applicability: Applicability,
}

impl TestTypeDefinition {
    pub fn new(
        id: impl Into<TestTypeId>,
        name: impl Into<String>,
        unit: impl Into<String>,
        applicability: Applicability,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit: unit.into(),
            description: String::new(),
            icon: None,
            applicability,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Format a reading with this test type's unit, e.g. `"0.35 Ω"`.
    pub fn format_reading(&self, value: &str) -> String {
        let value = value.trim();
        if self.unit.is_empty() {
            value.to_string()
        } else {
            format!("{value} {}", self.unit)
        }
    }
}
