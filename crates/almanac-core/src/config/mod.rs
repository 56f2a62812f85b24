pub mod holiday_config;
pub mod observability_config;
pub mod offset_config;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use holiday_config::{FixedDate, HolidayConfig};
pub use observability_config::ObservabilityConfig;
pub use offset_config::OffsetConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct CalendarConfig {
    pub holiday: HolidayConfig,
    pub offset: OffsetConfig,
    pub observability: ObservabilityConfig,
}

impl CalendarConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a JSON string, falling back to defaults for missing fields.
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.holiday.validate()?;
        self.offset.validate()?;
        Ok(())
    }
}
