//! Local clock reads.

use chrono::{Datelike, Local};

use almanac_core::models::Instant;

/// The current year on the local clock.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Midnight of the current local day.
pub fn today() -> Instant {
    Instant::from(Local::now().date_naive())
}
