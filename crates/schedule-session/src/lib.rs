//! # schedule-session
//!
//! One editing session over a form's schedule of tests: the completion set
//! for the session, and the reading entry flow that steps through circuits
//! for one test type at a time.
//!
//! ```text
//! ScheduleSession::open(store, catalogue, config)
//!     └── select_test_type("zs") → ReadingEntryFlow
//!             ├── save / apply_to_all / fill
//!             └── navigate(Prev | Next) / go_to
//! ```

pub mod announce;
pub mod flow;
pub mod session;

pub use announce::Announcer;
pub use flow::{Direction, FillMode, ReadingEntryFlow, SaveOutcome};
pub use session::ScheduleSession;
