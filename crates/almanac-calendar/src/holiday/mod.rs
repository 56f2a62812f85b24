//! Holiday resolver: a fixed set of month/day holidays fetched asynchronously.

pub mod resolver;

pub use resolver::{holidays_for, HolidayResolver};

use almanac_core::models::Instant;

/// Holidays for `year` using the default resolver configuration.
pub async fn get_holidays(year: impl Into<Option<i32>>) -> Vec<Instant> {
    HolidayResolver::default().get_holidays(year).await
}

/// Whether `date` is a holiday, using the default resolver configuration.
pub async fn is_holiday(date: &Instant) -> bool {
    HolidayResolver::default().is_holiday(date).await
}
