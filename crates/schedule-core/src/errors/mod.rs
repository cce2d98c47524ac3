mod schedule_error;
mod validation_error;

pub use schedule_error::{ScheduleError, ScheduleResult};
pub use validation_error::ValidationError;
