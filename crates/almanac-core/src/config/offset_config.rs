//! Offset calculator configuration.

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::models::OffsetUnit;

/// Configuration for the offset calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OffsetConfig {
    /// Unit tag used when the caller does not name one.
    pub default_unit: String,
}

impl Default for OffsetConfig {
    fn default() -> Self {
        Self {
            default_unit: OffsetUnit::DEFAULT_TAG.to_string(),
        }
    }
}

impl OffsetConfig {
    /// The configured default must be a recognized unit. Unknown tags are only
    /// tolerated when passed per call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match OffsetUnit::from_tag(&self.default_unit) {
            Some(_) => Ok(()),
            None => Err(ConfigError::UnknownUnit(self.default_unit.clone())),
        }
    }
}
