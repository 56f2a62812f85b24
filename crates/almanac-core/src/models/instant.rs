//! The `Instant` value type: a local wall-clock date-time, or the invalid sentinel.

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// A local date-time with millisecond resolution.
///
/// An `Instant` either names a real calendar moment or is the *invalid sentinel*:
/// a well-typed value that represents no date at all. Validated operations reject
/// the sentinel as input, while lenient ones (holiday lookup, ordering) may
/// produce or consume it without failing.
///
/// Structural equality (`==`) compares representations, so two sentinels are
/// equal. Chronological comparisons live in the calendar crate and treat the
/// sentinel as incomparable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<NaiveDateTime>", into = "Option<NaiveDateTime>")]
pub struct Instant(Option<NaiveDateTime>);

impl Instant {
    /// The invalid-instant sentinel.
    pub const INVALID: Instant = Instant(None);

    /// Wrap a date-time, truncating sub-millisecond precision.
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(Some(truncate_to_millis(datetime)))
    }

    /// Midnight on the given calendar date, or the sentinel if no such date exists.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from)
            .unwrap_or(Self::INVALID)
    }

    /// A fully specified local date-time, or the sentinel if any field is out of range.
    pub fn from_ymd_hms_milli(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        milli: u32,
    ) -> Self {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_milli_opt(hour, minute, second, milli))
            .map(Self::new)
            .unwrap_or(Self::INVALID)
    }

    pub fn is_valid(&self) -> bool {
        self.0.is_some()
    }

    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.0
    }

    /// The local calendar day, ignoring time of day.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0.map(|dt| dt.date())
    }

    pub fn year(&self) -> Option<i32> {
        self.0.map(|dt| dt.year())
    }
}

fn truncate_to_millis(datetime: NaiveDateTime) -> NaiveDateTime {
    let nanos = datetime.nanosecond() / 1_000_000 * 1_000_000;
    datetime.with_nanosecond(nanos).unwrap_or(datetime)
}

impl From<NaiveDateTime> for Instant {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }
}

impl From<Option<NaiveDateTime>> for Instant {
    fn from(datetime: Option<NaiveDateTime>) -> Self {
        datetime.map(Self::new).unwrap_or(Self::INVALID)
    }
}

impl From<Instant> for Option<NaiveDateTime> {
    fn from(instant: Instant) -> Self {
        instant.0
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.3f")),
            None => f.write_str("Invalid Date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn impossible_date_is_sentinel() {
        assert!(!Instant::from_ymd(2023, 2, 29).is_valid());
        assert!(!Instant::from_ymd(2024, 13, 1).is_valid());
        assert!(Instant::from_ymd(2024, 2, 29).is_valid());
    }

    #[test]
    fn sub_millisecond_precision_is_dropped() {
        let dt = NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_nano_opt(7, 8, 9, 123_456_789)
            .unwrap();
        let instant = Instant::new(dt);
        assert_eq!(instant.datetime().unwrap().nanosecond(), 123_000_000);
    }

    #[test]
    fn display_renders_sentinel() {
        assert_eq!(Instant::INVALID.to_string(), "Invalid Date");
        assert_eq!(
            Instant::from_ymd_hms_milli(2024, 1, 2, 3, 4, 5, 6).to_string(),
            "2024-01-02T03:04:05.006"
        );
    }
}
