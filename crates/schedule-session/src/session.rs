//! ScheduleSession: state for one opening of the schedule of tests.
//!
//! Circuits are read from the form once, on open. The completion set is
//! derived from the readings already in the form unless
//! `derive_completion_from_store` is off, in which case every session starts
//! at 0 % regardless of saved readings.

use std::sync::Arc;

use tracing::info;

use schedule_core::config::{ScheduleConfig, SessionConfig};
use schedule_core::progress::{compute_circuit_progress, ProgressReport};
use schedule_core::traits::{FormDataStore, Notifier, Speaker};
use schedule_core::{
    compute_progress, compute_test_type_progress, Circuit, CircuitId, CompletionTracker, Progress,
    ScheduleResult, TestCatalogue, TestTypeId,
};

use crate::announce::Announcer;
use crate::flow::ReadingEntryFlow;

pub struct ScheduleSession<S: FormDataStore> {
    pub(crate) store: S,
    pub(crate) catalogue: TestCatalogue,
    pub(crate) circuits: Vec<Circuit>,
    pub(crate) tracker: CompletionTracker,
    pub(crate) config: SessionConfig,
    pub(crate) announcer: Announcer,
}

impl<S: FormDataStore> ScheduleSession<S> {
    /// Open a session over `store`.
    pub fn open(store: S, catalogue: TestCatalogue, config: SessionConfig) -> Self {
        let circuits = store.circuits();
        let tracker = if config.derive_completion_from_store {
            CompletionTracker::from_readings(&store.readings())
        } else {
            CompletionTracker::new()
        };
        let announcer = Announcer::new(config.speak_feedback);

        info!(
            circuits = circuits.len(),
            test_types = catalogue.len(),
            completed = tracker.len(),
            "Schedule session opened"
        );

        Self {
            store,
            catalogue,
            circuits,
            tracker,
            config,
            announcer,
        }
    }

    /// Open with the catalogue and session settings from a full config.
    pub fn from_config(store: S, config: &ScheduleConfig) -> ScheduleResult<Self> {
        Ok(Self::open(store, config.catalogue()?, config.session.clone()))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.announcer.set_notifier(notifier);
        self
    }

    pub fn with_speaker(mut self, speaker: Arc<dyn Speaker>) -> Self {
        self.announcer.set_speaker(speaker);
        self
    }

    /// Start recording `test_type`. Unknown ids are rejected.
    pub fn select_test_type(
        &mut self,
        test_type: impl Into<TestTypeId>,
    ) -> ScheduleResult<ReadingEntryFlow<'_, S>> {
        let definition = self.catalogue.require(&test_type.into())?.clone();
        Ok(ReadingEntryFlow::new(self, definition))
    }

    pub fn circuits(&self) -> &[Circuit] {
        &self.circuits
    }

    pub fn catalogue(&self) -> &TestCatalogue {
        &self.catalogue
    }

    pub fn tracker(&self) -> &CompletionTracker {
        &self.tracker
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn is_complete(&self, test_type: &TestTypeId, circuit: &CircuitId) -> bool {
        self.tracker.is_complete(test_type, circuit)
    }

    /// Overall progress across the catalogue.
    pub fn progress(&self) -> Progress {
        compute_progress(self.catalogue.as_slice(), &self.circuits, &self.tracker)
    }

    pub fn test_type_progress(&self, test_type: &TestTypeId) -> ScheduleResult<Progress> {
        let definition = self.catalogue.require(test_type)?;
        Ok(compute_test_type_progress(definition, &self.circuits, &self.tracker))
    }

    /// Progress for one circuit, or `None` if the id is not in this session.
    pub fn circuit_progress(&self, circuit: &CircuitId) -> Option<Progress> {
        self.circuits
            .iter()
            .find(|c| &c.id == circuit)
            .map(|c| compute_circuit_progress(self.catalogue.as_slice(), c, &self.tracker))
    }

    pub fn report(&self) -> ProgressReport {
        ProgressReport::build(self.catalogue.as_slice(), &self.circuits, &self.tracker)
    }
}
