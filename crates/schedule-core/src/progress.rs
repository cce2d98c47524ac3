//! Progress accounting over circuits × test types.
//!
//! `total` counts applicable (test type, circuit) pairs, `completed` counts
//! the applicable ones that are complete. Completed keys for inapplicable
//! pairs are ignored. An empty denominator gives 0 % and counts as done.

use serde::{Deserialize, Serialize};

use crate::applicability::{applicable_circuits, applicable_test_types};
use crate::completion::CompletionTracker;
use crate::types::{Circuit, TestTypeDefinition, TestTypeId};

/// Completed/total with a display percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    /// `round(100 * completed / total)`, half rounds up; 0 when `total == 0`.
    pub percent: u8,
}

impl Progress {
    pub const ZERO: Progress = Progress {
        completed: 0,
        total: 0,
        percent: 0,
    };

    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed,
            total,
            percent: round_percent(completed, total),
        }
    }

    /// Everything applicable is done. Vacuously true when nothing applies.
    pub fn is_complete(&self) -> bool {
        self.completed >= self.total
    }

    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Integer percentage with round-half-up, never dividing by zero.
pub fn round_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    // floor(100c/t + 1/2) == floor((200c + t) / 2t)
    ((200 * completed + total) / (2 * total)) as u8
}

/// Overall progress across every test type and circuit.
pub fn compute_progress(
    test_types: &[TestTypeDefinition],
    circuits: &[Circuit],
    tracker: &CompletionTracker,
) -> Progress {
    let mut completed = 0;
    let mut total = 0;
    for circuit in circuits {
        for test_type in applicable_test_types(test_types, circuit) {
            total += 1;
            if tracker.is_complete(&test_type.id, &circuit.id) {
                completed += 1;
            }
        }
    }
    Progress::new(completed, total)
}

/// Progress of one test type over the circuits it applies to.
pub fn compute_test_type_progress(
    test_type: &TestTypeDefinition,
    circuits: &[Circuit],
    tracker: &CompletionTracker,
) -> Progress {
    let mut completed = 0;
    let mut total = 0;
    for circuit in applicable_circuits(test_type, circuits) {
        total += 1;
        if tracker.is_complete(&test_type.id, &circuit.id) {
            completed += 1;
        }
    }
    Progress::new(completed, total)
}

/// Progress of one circuit over the test types that apply to it.
pub fn compute_circuit_progress(
    test_types: &[TestTypeDefinition],
    circuit: &Circuit,
    tracker: &CompletionTracker,
) -> Progress {
    let mut completed = 0;
    let mut total = 0;
    for test_type in applicable_test_types(test_types, circuit) {
        total += 1;
        if tracker.is_complete(&test_type.id, &circuit.id) {
            completed += 1;
        }
    }
    Progress::new(completed, total)
}

/// Overall figure plus the per-test-type breakdown, in catalogue order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub overall: Progress,
    pub by_test_type: Vec<(TestTypeId, Progress)>,
}

impl ProgressReport {
    pub fn build(
        test_types: &[TestTypeDefinition],
        circuits: &[Circuit],
        tracker: &CompletionTracker,
    ) -> Self {
        let by_test_type = test_types
            .iter()
            .map(|t| (t.id.clone(), compute_test_type_progress(t, circuits, tracker)))
            .collect();
        Self {
            overall: compute_progress(test_types, circuits, tracker),
            by_test_type,
        }
    }

    pub fn for_test_type(&self, id: &TestTypeId) -> Option<Progress> {
        self.by_test_type
            .iter()
            .find(|(t, _)| t == id)
            .map(|(_, p)| *p)
    }
}
