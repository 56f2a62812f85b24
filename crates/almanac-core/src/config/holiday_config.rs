//! Holiday resolver configuration.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// A month/day pair combined with a requested year to form a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedDate {
    pub month: u32,
    pub day: u32,
}

impl FixedDate {
    pub const fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Whether the pair occurs in at least one year (Feb 29 counts).
    pub fn exists_in_some_year(&self) -> bool {
        // 2000 is a leap year.
        NaiveDate::from_ymd_opt(2000, self.month, self.day).is_some()
    }
}

/// New Year's Day, Christmas Day, New Year's Eve.
pub const DEFAULT_FIXED_DATES: [FixedDate; 3] = [
    FixedDate::new(1, 1),
    FixedDate::new(12, 25),
    FixedDate::new(12, 31),
];

/// Configuration for the holiday resolver.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HolidayConfig {
    /// Simulated latency of the holiday source.
    pub lookup_delay_ms: u64,
    /// Holidays in the order they are returned.
    pub fixed_dates: Vec<FixedDate>,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            lookup_delay_ms: 100,
            fixed_dates: DEFAULT_FIXED_DATES.to_vec(),
        }
    }
}

impl HolidayConfig {
    pub fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fixed_dates.is_empty() {
            return Err(ConfigError::EmptyHolidaySet);
        }
        if let Some(bad) = self.fixed_dates.iter().find(|d| !d.exists_in_some_year()) {
            return Err(ConfigError::ImpossibleHoliday {
                month: bad.month,
                day: bad.day,
            });
        }
        Ok(())
    }
}
