//! Open date ranges.

use serde::{Deserialize, Serialize};

use super::Instant;

/// An ordered `(from, to)` pair.
///
/// Ordering is not enforced at construction; the range classifier checks it on
/// every query and reports `CalendarError::InvalidRange` when `from` is after `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Instant,
    pub to: Instant,
}

impl DateRange {
    pub fn new(from: Instant, to: Instant) -> Self {
        Self { from, to }
    }
}
