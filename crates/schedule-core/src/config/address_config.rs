//! Address finder configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{ScheduleError, ScheduleResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    /// Quiet period after the last keystroke before a lookup fires.
    pub debounce_ms: u64,
    /// Shorter queries never trigger a lookup.
    pub min_query_len: usize,
    /// Suggestions kept from a single response.
    pub max_suggestions: usize,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            min_query_len: 3,
            max_suggestions: 8,
        }
    }
}

impl AddressConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        if self.min_query_len == 0 {
            return Err(ScheduleError::Config(
                "address.min_query_len must be at least 1".to_string(),
            ));
        }
        if self.max_suggestions == 0 {
            return Err(ScheduleError::Config(
                "address.max_suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
