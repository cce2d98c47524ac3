pub mod address_config;
pub mod session_config;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

pub use address_config::AddressConfig;
pub use session_config::{ApplyScope, SessionConfig};

use crate::catalogue::TestCatalogue;
use crate::errors::{ScheduleError, ScheduleResult};
use crate::types::TestTypeDefinition;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScheduleConfig {
    pub session: SessionConfig,
    pub address: AddressConfig,
    /// Replaces the standard catalogue when present.
    pub test_types: Option<Vec<TestTypeDefinition>>,
}

impl ScheduleConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Read, parse, and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> ScheduleResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        info!(path = %path.display(), "Schedule config loaded");
        Ok(config)
    }

    pub fn validate(&self) -> ScheduleResult<()> {
        self.address.validate()?;
        if let Some(test_types) = &self.test_types {
            if test_types.is_empty() {
                return Err(ScheduleError::Config(
                    "test_types override must not be empty".to_string(),
                ));
            }
        }
        self.catalogue().map(drop)
    }

    /// The catalogue this config selects.
    pub fn catalogue(&self) -> ScheduleResult<TestCatalogue> {
        match &self.test_types {
            Some(test_types) => TestCatalogue::new(test_types.clone()),
            None => Ok(TestCatalogue::standard()),
        }
    }
}
