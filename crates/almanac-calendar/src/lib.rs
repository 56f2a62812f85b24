//! # almanac-calendar
//!
//! Calendar queries layered on `chrono`:
//! offsets in days/months/years, open-range membership, before-ordering,
//! same-day equality, and an asynchronous fixed-date holiday resolver.
//!
//! `add` and `is_within_range` validate and return errors. Everything else
//! degrades to a defined value (often involving the invalid `Instant` sentinel).

pub mod clock;
pub mod engine;
pub mod holiday;
pub mod observability;
pub mod offset;
pub mod query;

pub use clock::{current_year, today};
pub use engine::CalendarEngine;
pub use holiday::{get_holidays, is_holiday, HolidayResolver};
pub use offset::{add, add_default, add_unit};
pub use query::{is_date_after, is_date_before, is_in_range, is_same_day, is_within_range};
