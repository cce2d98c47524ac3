//! LookupCoordinator: debounce and supersession for address lookups.
//!
//! The caller owns the clock and the I/O. It feeds keystrokes in with
//! [`on_input`](LookupCoordinator::on_input), asks [`poll`](LookupCoordinator::poll)
//! whether a lookup is due, runs it however it likes, and hands the result
//! back with [`complete`](LookupCoordinator::complete). Results for a
//! generation that is no longer current never reach the display state.

use std::time::{Duration, Instant};

use tracing::debug;

use schedule_core::config::AddressConfig;

use crate::errors::LookupError;
use crate::query::{classify, LookupKind};
use crate::{AddressProvider, AddressSuggestion};

/// What the address finder should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    /// Waiting out the debounce window.
    Pending,
    Searching(LookupKind),
    Results(Vec<AddressSuggestion>),
    Failed(String),
}

/// A lookup the caller should run now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub generation: u64,
    pub kind: LookupKind,
}

#[derive(Debug, Clone)]
struct PendingInput {
    generation: u64,
    kind: LookupKind,
    due: Instant,
}

#[derive(Debug)]
pub struct LookupCoordinator {
    config: AddressConfig,
    generation: u64,
    pending: Option<PendingInput>,
    in_flight: Option<u64>,
    state: LookupState,
}

impl LookupCoordinator {
    pub fn new(config: AddressConfig) -> Self {
        Self {
            config,
            generation: 0,
            pending: None,
            in_flight: None,
            state: LookupState::Idle,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Record a new input value. Supersedes any pending or in-flight lookup.
    /// Returns the new generation.
    pub fn on_input(&mut self, text: &str, now: Instant) -> u64 {
        self.generation += 1;
        self.in_flight = None;

        match classify(text, self.config.min_query_len) {
            Some(kind) => {
                self.pending = Some(PendingInput {
                    generation: self.generation,
                    kind,
                    due: now + self.config.debounce(),
                });
                self.state = LookupState::Pending;
            }
            None => {
                self.pending = None;
                self.state = LookupState::Idle;
            }
        }
        self.generation
    }

    /// Time left before the pending lookup is due, if one is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|p| p.due.saturating_duration_since(now))
    }

    /// Release the pending lookup once its debounce window has passed.
    pub fn poll(&mut self, now: Instant) -> Option<LookupRequest> {
        if self.pending.as_ref().map_or(true, |p| p.due > now) {
            return None;
        }
        let pending = self.pending.take()?;
        self.in_flight = Some(pending.generation);
        self.state = LookupState::Searching(pending.kind.clone());
        debug!(generation = pending.generation, query = %pending.kind.query(), "Address lookup issued");
        Some(LookupRequest {
            generation: pending.generation,
            kind: pending.kind,
        })
    }

    /// Deliver a lookup result. Returns false if the result was for a
    /// superseded generation and was dropped.
    pub fn complete(
        &mut self,
        generation: u64,
        result: Result<Vec<AddressSuggestion>, LookupError>,
    ) -> bool {
        if self.in_flight != Some(generation) {
            debug!(generation, current = self.generation, "Dropping superseded address lookup");
            return false;
        }
        self.in_flight = None;
        self.state = match result {
            Ok(mut suggestions) => {
                suggestions.truncate(self.config.max_suggestions);
                LookupState::Results(suggestions)
            }
            Err(e) => LookupState::Failed(e.to_string()),
        };
        true
    }

    /// Poll and, if a lookup is due, run it synchronously against `provider`.
    pub fn run_due(&mut self, provider: &dyn AddressProvider, now: Instant) -> bool {
        match self.poll(now) {
            Some(request) => {
                let result = provider.lookup(&request.kind);
                self.complete(request.generation, result)
            }
            None => false,
        }
    }

    /// Take the chosen suggestion and return to idle.
    pub fn select(&mut self, index: usize) -> Option<AddressSuggestion> {
        let LookupState::Results(suggestions) = &self.state else {
            return None;
        };
        let chosen = suggestions.get(index)?.clone();
        self.cancel();
        Some(chosen)
    }

    /// Drop everything pending or in flight.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.in_flight = None;
        self.state = LookupState::Idle;
    }
}

impl Default for LookupCoordinator {
    fn default() -> Self {
        Self::new(AddressConfig::default())
    }
}
