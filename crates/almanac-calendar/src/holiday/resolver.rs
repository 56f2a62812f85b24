//! Simulated remote holiday source.

use tracing::debug;

use almanac_core::config::{FixedDate, HolidayConfig};
use almanac_core::models::Instant;

use crate::query::is_same_day;

/// Resolves the holiday set for a year.
///
/// Holds configuration only. Every lookup sleeps for the configured delay and
/// then builds a fresh sequence; nothing is cached or shared between calls.
#[derive(Debug, Clone, Default)]
pub struct HolidayResolver {
    config: HolidayConfig,
}

impl HolidayResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: HolidayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// The configured holidays of `year`, in configured order.
    ///
    /// A missing year yields one sentinel per configured date rather than an
    /// error. Never fails.
    pub async fn get_holidays(&self, year: impl Into<Option<i32>>) -> Vec<Instant> {
        let year = year.into();
        debug!(?year, delay_ms = self.config.lookup_delay_ms, "fetching holidays");

        tokio::time::sleep(self.config.lookup_delay()).await;

        holidays_for(year, &self.config.fixed_dates)
    }

    /// True iff `date` falls on one of its year's holidays.
    ///
    /// Suspends once, at the holiday fetch. A sentinel `date` resolves to false.
    pub async fn is_holiday(&self, date: &Instant) -> bool {
        let holidays = self.get_holidays(date.year()).await;
        let hit = holidays.iter().any(|holiday| is_same_day(holiday, date));
        debug!(%date, hit, "holiday check");
        hit
    }
}

/// Combine `year` with each fixed month/day pair.
///
/// Pairs that do not exist in `year` (Feb 29 in a common year) and a missing
/// year both produce the sentinel.
pub fn holidays_for(year: Option<i32>, dates: &[FixedDate]) -> Vec<Instant> {
    dates
        .iter()
        .map(|d| match year {
            Some(y) => Instant::from_ymd(y, d.month, d.day),
            None => Instant::INVALID,
        })
        .collect()
}
