//! ReadingStore: circuit id → test type id → recorded value.
//!
//! Owned by the surrounding form. The schedule reads it, writes into a copy,
//! and hands the whole map back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::identifiers::{CircuitId, TestTypeId};

/// A value counts as recorded only if it has non-whitespace content.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingStore {
    entries: BTreeMap<CircuitId, BTreeMap<TestTypeId, String>>,
}

impl ReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value, blank or not.
    pub fn get(&self, circuit: &CircuitId, test_type: &TestTypeId) -> Option<&str> {
        self.entries
            .get(circuit)
            .and_then(|row| row.get(test_type))
            .map(String::as_str)
    }

    /// Value for display: the stored reading or `""` when absent.
    pub fn value_or_empty(&self, circuit: &CircuitId, test_type: &TestTypeId) -> String {
        self.get(circuit, test_type).unwrap_or_default().to_string()
    }

    /// Store a value as given (no trimming).
    pub fn set(&mut self, circuit: CircuitId, test_type: TestTypeId, value: impl Into<String>) {
        self.entries
            .entry(circuit)
            .or_default()
            .insert(test_type, value.into());
    }

    /// True if a non-blank value is stored.
    pub fn is_recorded(&self, circuit: &CircuitId, test_type: &TestTypeId) -> bool {
        self.get(circuit, test_type).is_some_and(|v| !is_blank(v))
    }

    /// All non-blank entries as `(circuit, test type, value)`.
    pub fn recorded(&self) -> impl Iterator<Item = (&CircuitId, &TestTypeId, &str)> {
        self.entries.iter().flat_map(|(circuit, row)| {
            row.iter()
                .filter(|(_, value)| !is_blank(value))
                .map(move |(test_type, value)| (circuit, test_type, value.as_str()))
        })
    }

    /// Number of stored entries, blank ones included.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
