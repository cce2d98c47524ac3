//! CompletionTracker: which (test type, circuit) pairs have a recorded reading.
//!
//! Only ever grows within a session. Applicability is the caller's concern;
//! the tracker will hold keys for circuits a test type does not apply to.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{Circuit, CircuitId, ReadingStore, TestTypeId};

/// A single completed test.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompletionKey {
    pub test_type: TestTypeId,
    pub circuit: CircuitId,
}

impl CompletionKey {
    pub fn new(test_type: impl Into<TestTypeId>, circuit: impl Into<CircuitId>) -> Self {
        Self {
            test_type: test_type.into(),
            circuit: circuit.into(),
        }
    }
}

/// Set of completed tests, grouped by test type for cheap per-type counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionTracker {
    by_test_type: FxHashMap<TestTypeId, FxHashSet<CircuitId>>,
}

impl CompletionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from every non-blank entry in `readings`.
    pub fn from_readings(readings: &ReadingStore) -> Self {
        let mut tracker = Self::new();
        for (circuit, test_type, _) in readings.recorded() {
            tracker.mark_complete(test_type.clone(), circuit.clone());
        }
        debug!(completed = tracker.len(), "Completion set derived from readings");
        tracker
    }

    pub fn is_complete(&self, test_type: &TestTypeId, circuit: &CircuitId) -> bool {
        self.by_test_type
            .get(test_type)
            .is_some_and(|circuits| circuits.contains(circuit))
    }

    /// Idempotent insert. Returns true if the key was new.
    pub fn mark_complete(&mut self, test_type: TestTypeId, circuit: CircuitId) -> bool {
        self.by_test_type.entry(test_type).or_default().insert(circuit)
    }

    /// Circuits in `circuits` with `test_type` complete, applicable or not.
    pub fn count_completed_for(&self, test_type: &TestTypeId, circuits: &[Circuit]) -> usize {
        let Some(done) = self.by_test_type.get(test_type) else {
            return 0;
        };
        circuits.iter().filter(|c| done.contains(&c.id)).count()
    }

    /// Total number of completed keys.
    pub fn len(&self) -> usize {
        self.by_test_type.values().map(|circuits| circuits.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All keys, sorted for stable output.
    pub fn keys(&self) -> Vec<CompletionKey> {
        let mut keys: Vec<CompletionKey> = self
            .by_test_type
            .iter()
            .flat_map(|(test_type, circuits)| {
                circuits.iter().map(move |circuit| CompletionKey {
                    test_type: test_type.clone(),
                    circuit: circuit.clone(),
                })
            })
            .collect();
        keys.sort();
        keys
    }
}

impl Extend<CompletionKey> for CompletionTracker {
    fn extend<I: IntoIterator<Item = CompletionKey>>(&mut self, iter: I) {
        for key in iter {
            self.mark_complete(key.test_type, key.circuit);
        }
    }
}
