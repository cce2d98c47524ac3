//! Reading entry flow: record one test type circuit by circuit.
//!
//! The flow has a single state, the index of the circuit being shown. Every
//! successful write goes to the form's ReadingStore and the session's
//! completion set together; a rejected value touches neither.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use schedule_core::applicability::applies;
use schedule_core::config::ApplyScope;
use schedule_core::traits::FormDataStore;
use schedule_core::types::readings::is_blank;
use schedule_core::{
    compute_test_type_progress, Circuit, CircuitId, Progress, TestTypeDefinition, ValidationError,
};

use crate::session::ScheduleSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Prev,
    Next,
}

/// Which circuits a bulk fill overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillMode {
    /// Every in-scope circuit, replacing existing readings.
    All,
    /// Only in-scope circuits with no reading yet.
    EmptyOnly,
}

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveOutcome {
    pub circuit: CircuitId,
    /// Index after the save (moved on if auto-advance fired).
    pub circuit_index: usize,
    pub advanced: bool,
    /// This save finished the last applicable circuit for the test type.
    pub completed_test_type: bool,
}

pub struct ReadingEntryFlow<'s, S: FormDataStore> {
    session: &'s mut ScheduleSession<S>,
    test_type: TestTypeDefinition,
    circuit_index: usize,
    current_value: String,
    completion_announced: bool,
}

impl<'s, S: FormDataStore> ReadingEntryFlow<'s, S> {
    pub(crate) fn new(session: &'s mut ScheduleSession<S>, test_type: TestTypeDefinition) -> Self {
        let already_done = {
            let p = compute_test_type_progress(&test_type, &session.circuits, &session.tracker);
            p.total > 0 && p.is_complete()
        };
        info!(test_type = %test_type.id, circuits = session.circuits.len(), "Test type selected");

        let mut flow = Self {
            session,
            test_type,
            circuit_index: 0,
            current_value: String::new(),
            completion_announced: already_done,
        };
        flow.load_value();
        flow
    }

    pub fn test_type(&self) -> &TestTypeDefinition {
        &self.test_type
    }

    pub fn circuit_index(&self) -> usize {
        self.circuit_index
    }

    pub fn circuit_count(&self) -> usize {
        self.session.circuits.len()
    }

    /// `None` only when the session has no circuits.
    pub fn current_circuit(&self) -> Option<&Circuit> {
        self.session.circuits.get(self.circuit_index)
    }

    /// Whether the selected test type applies to the circuit being shown.
    pub fn current_applies(&self) -> bool {
        self.current_circuit()
            .is_some_and(|c| applies(&self.test_type, c))
    }

    pub fn current_value(&self) -> &str {
        &self.current_value
    }

    /// What the user has typed so far.
    pub fn set_current_value(&mut self, value: impl Into<String>) {
        self.current_value = value.into();
    }

    /// Refresh the shown value from the store; empty when nothing is saved.
    pub fn load_value(&mut self) -> &str {
        self.current_value = match self.current_circuit() {
            Some(circuit) => self
                .session
                .store
                .readings()
                .value_or_empty(&circuit.id, &self.test_type.id),
            None => String::new(),
        };
        &self.current_value
    }

    /// Progress of the selected test type.
    pub fn progress(&self) -> Progress {
        compute_test_type_progress(&self.test_type, &self.session.circuits, &self.session.tracker)
    }

    /// Save `value` against the current circuit. The value is stored as
    /// given, surrounding whitespace included.
    pub fn save(&mut self, value: &str) -> Result<SaveOutcome, ValidationError> {
        self.validate(value)?;
        let circuit = self.session.circuits[self.circuit_index].clone();

        self.write_readings(std::iter::once(&circuit), value);
        self.session.announcer.reading_saved(&self.test_type, &circuit, value);
        debug!(test_type = %self.test_type.id, circuit = %circuit.id, "Reading saved");

        let last = self.circuit_index + 1 >= self.session.circuits.len();
        let advanced = self.session.config.auto_advance && !last;
        if advanced {
            self.circuit_index += 1;
            self.load_value();
        } else if last {
            self.current_value.clear();
        } else {
            self.current_value = value.to_string();
        }

        Ok(SaveOutcome {
            circuit: circuit.id,
            circuit_index: self.circuit_index,
            advanced,
            completed_test_type: self.check_test_type_complete(),
        })
    }

    /// Save whatever is in the current value field.
    pub fn save_current(&mut self) -> Result<SaveOutcome, ValidationError> {
        let value = self.current_value.clone();
        self.save(&value)
    }

    /// Write `value` to every circuit in the apply-to-all scope. The circuit
    /// index does not move. Returns the number of circuits written; nothing
    /// is announced when that is zero.
    pub fn apply_to_all(&mut self, value: &str) -> Result<usize, ValidationError> {
        let written = self.fill_scoped(value, FillMode::All)?;
        self.load_value();
        if written > 0 {
            self.session.announcer.applied_to_all(&self.test_type, value, written);
        }
        info!(test_type = %self.test_type.id, written, "Reading applied to all circuits");
        self.check_test_type_complete();
        Ok(written)
    }

    /// Bulk fill over the apply-to-all scope. `EmptyOnly` leaves circuits
    /// that already have a reading untouched. Returns the number written.
    pub fn fill(&mut self, value: &str, mode: FillMode) -> Result<usize, ValidationError> {
        let written = self.fill_scoped(value, mode)?;
        self.load_value();
        if written > 0 {
            self.session.announcer.filled(&self.test_type, value, written);
        }
        info!(test_type = %self.test_type.id, ?mode, written, "Bulk fill");
        self.check_test_type_complete();
        Ok(written)
    }

    /// Step one circuit. Returns false (and does nothing) at either end.
    pub fn navigate(&mut self, direction: Direction) -> bool {
        let count = self.session.circuits.len();
        let target = match direction {
            Direction::Prev if self.circuit_index > 0 => self.circuit_index - 1,
            Direction::Next if self.circuit_index + 1 < count => self.circuit_index + 1,
            _ => return false,
        };
        self.move_to(target);
        true
    }

    /// Jump straight to a circuit. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.session.circuits.len() {
            return false;
        }
        self.move_to(index);
        true
    }

    /// First circuit at or after the current one that the test type applies
    /// to and that has no reading yet.
    pub fn next_outstanding(&self) -> Option<usize> {
        let tracker = &self.session.tracker;
        self.session
            .circuits
            .iter()
            .enumerate()
            .skip(self.circuit_index)
            .find(|(_, c)| applies(&self.test_type, c) && !tracker.is_complete(&self.test_type.id, &c.id))
            .map(|(i, _)| i)
    }

    fn move_to(&mut self, index: usize) {
        debug!(from = self.circuit_index, to = index, "Circuit changed");
        self.circuit_index = index;
        self.load_value();
    }

    fn validate(&self, value: &str) -> Result<(), ValidationError> {
        let result = if is_blank(value) {
            Err(ValidationError::EmptyValue)
        } else if self.current_circuit().is_none() {
            Err(ValidationError::NoCircuit)
        } else {
            Ok(())
        };
        if let Err(e) = result {
            warn!(test_type = %self.test_type.id, error = %e, "Reading rejected");
            self.session.announcer.validation_failed(e);
        }
        result
    }

    fn fill_scoped(&mut self, value: &str, mode: FillMode) -> Result<usize, ValidationError> {
        self.validate(value)?;

        let scope = self.session.config.apply_to_all_scope;
        let readings = self.session.store.readings();
        let targets: Vec<Circuit> = self
            .session
            .circuits
            .iter()
            .filter(|c| scope == ApplyScope::AllCircuits || applies(&self.test_type, c))
            .filter(|c| mode == FillMode::All || !readings.is_recorded(&c.id, &self.test_type.id))
            .cloned()
            .collect();

        if !targets.is_empty() {
            self.write_readings(targets.iter(), value);
        }
        Ok(targets.len())
    }

    /// The one place readings are written: each write is paired with a
    /// completion mark, and the store gets the whole map back once.
    fn write_readings<'c>(&mut self, circuits: impl Iterator<Item = &'c Circuit>, value: &str) {
        let mut readings = self.session.store.readings();
        for circuit in circuits {
            readings.set(circuit.id.clone(), self.test_type.id.clone(), value);
            self.session
                .tracker
                .mark_complete(self.test_type.id.clone(), circuit.id.clone());
        }
        self.session.store.set_readings(readings);
    }

    fn check_test_type_complete(&mut self) -> bool {
        if self.completion_announced {
            return false;
        }
        let progress = self.progress();
        if progress.total > 0 && progress.is_complete() {
            self.completion_announced = true;
            self.session.announcer.test_type_complete(&self.test_type);
            info!(test_type = %self.test_type.id, total = progress.total, "Test type complete");
            return true;
        }
        false
    }
}
