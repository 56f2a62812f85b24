//! CalendarEngine — central orchestrator implementing ICalendarEngine.

use almanac_core::config::CalendarConfig;
use almanac_core::errors::CalendarResult;
use almanac_core::models::{Amount, Instant};
use almanac_core::traits::ICalendarEngine;

use crate::holiday::HolidayResolver;
use crate::{clock, offset, query};

/// The calendar engine.
///
/// Holds configuration only; every call is independent of every other.
#[derive(Debug, Clone, Default)]
pub struct CalendarEngine {
    config: CalendarConfig,
    holidays: HolidayResolver,
}

impl CalendarEngine {
    /// Create a new CalendarEngine from a validated config.
    pub fn new(config: CalendarConfig) -> CalendarResult<Self> {
        config.validate()?;
        let holidays = HolidayResolver::with_config(config.holiday.clone());
        Ok(Self { config, holidays })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn holidays(&self) -> &HolidayResolver {
        &self.holidays
    }
}

impl ICalendarEngine for CalendarEngine {
    fn current_year(&self) -> i32 {
        clock::current_year()
    }

    fn add(
        &self,
        date: &Instant,
        amount: impl Into<Amount>,
        unit: &str,
    ) -> CalendarResult<Instant> {
        offset::add(date, amount, unit)
    }

    fn add_default(&self, date: &Instant, amount: impl Into<Amount>) -> CalendarResult<Instant> {
        offset::add(date, amount, &self.config.offset.default_unit)
    }

    fn is_within_range(
        &self,
        date: &Instant,
        from: &Instant,
        to: &Instant,
    ) -> CalendarResult<bool> {
        query::is_within_range(date, from, to)
    }

    fn is_date_before(&self, date: &Instant, compare: &Instant) -> bool {
        query::is_date_before(date, compare)
    }

    fn is_same_day(&self, date: &Instant, compare: &Instant) -> bool {
        query::is_same_day(date, compare)
    }

    async fn get_holidays(&self, year: Option<i32>) -> Vec<Instant> {
        self.holidays.get_holidays(year).await
    }

    async fn is_holiday(&self, date: &Instant) -> bool {
        self.holidays.is_holiday(date).await
    }
}
