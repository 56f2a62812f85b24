//! ICalendarEngine — the complete calendar query interface.

use crate::errors::CalendarResult;
use crate::models::{Amount, Instant};

/// Calendar arithmetic and holiday engine.
///
/// `add` and `is_within_range` validate their inputs and return errors.
/// Every other method degrades to a defined value and never fails.
#[allow(async_fn_in_trait)]
pub trait ICalendarEngine: Send + Sync {
    /// Current year on the local clock.
    fn current_year(&self) -> i32;

    // Offset calculator
    fn add(
        &self,
        date: &Instant,
        amount: impl Into<Amount>,
        unit: &str,
    ) -> CalendarResult<Instant>;
    fn add_default(&self, date: &Instant, amount: impl Into<Amount>) -> CalendarResult<Instant>;

    // Classifiers
    fn is_within_range(
        &self,
        date: &Instant,
        from: &Instant,
        to: &Instant,
    ) -> CalendarResult<bool>;
    fn is_date_before(&self, date: &Instant, compare: &Instant) -> bool;
    fn is_same_day(&self, date: &Instant, compare: &Instant) -> bool;

    // Holiday resolver
    async fn get_holidays(&self, year: Option<i32>) -> Vec<Instant>;
    async fn is_holiday(&self, date: &Instant) -> bool;
}
