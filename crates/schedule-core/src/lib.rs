//! # schedule-core
//!
//! Foundation crate for the mobile schedule of tests.
//! Defines the circuit and test-type model, the test catalogue, applicability
//! rules, completion tracking, progress accounting, config, errors, and the
//! collaborator traits the session layer is wired through.
//!
//! ## Modules
//! - `applicability`: does a test type apply to a circuit
//! - `boundary`: loosely typed form data → validated circuits and readings
//! - `catalogue`: the fixed list of test-type definitions
//! - `completion`: CompletionTracker over (test type, circuit) keys
//! - `config`: ScheduleConfig, SessionConfig, AddressConfig
//! - `errors`: ScheduleError, ValidationError
//! - `logging`: tracing subscriber setup
//! - `progress`: completed/total/percent accounting
//! - `traits`: FormDataStore, Notifier, Speaker (+ in-memory helpers)
//! - `types`: identifiers, Circuit, TestTypeDefinition, ReadingStore

pub mod applicability;
pub mod boundary;
pub mod catalogue;
pub mod completion;
pub mod config;
pub mod errors;
pub mod logging;
pub mod progress;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use applicability::applies;
pub use catalogue::TestCatalogue;
pub use completion::{CompletionKey, CompletionTracker};
pub use config::ScheduleConfig;
pub use errors::{ScheduleError, ScheduleResult, ValidationError};
pub use progress::{compute_progress, compute_test_type_progress, Progress};
pub use types::{Applicability, Circuit, CircuitId, CircuitNumber, ReadingStore, TestTypeDefinition, TestTypeId};
