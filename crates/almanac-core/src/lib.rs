//! # almanac-core
//!
//! Foundation crate for the almanac calendar utility.
//! Defines the `Instant` value type (with its invalid sentinel), offset units,
//! date ranges, error types, configuration, and the `ICalendarEngine` trait.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::CalendarConfig;
pub use errors::{CalendarError, CalendarResult};
pub use models::{Amount, DateRange, Instant, OffsetUnit};
pub use traits::ICalendarEngine;
