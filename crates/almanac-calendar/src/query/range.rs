//! Open-interval range membership.

use tracing::debug;

use almanac_core::errors::{CalendarError, CalendarResult};
use almanac_core::models::{DateRange, Instant};

use super::ordering::{is_date_after, is_date_before};

/// True iff `from < date < to`. Both endpoints are excluded.
///
/// Fails with `InvalidRange` when `from` is after `to`. Equal endpoints are
/// allowed and describe an empty range.
pub fn is_within_range(date: &Instant, from: &Instant, to: &Instant) -> CalendarResult<bool> {
    if is_date_after(from, to) {
        debug!(%from, %to, "rejecting inverted range");
        return Err(CalendarError::InvalidRange {
            from: from.to_string(),
            to: to.to_string(),
        });
    }
    Ok(is_date_after(date, from) && is_date_before(date, to))
}

/// `is_within_range` over a `DateRange`.
pub fn is_in_range(date: &Instant, range: &DateRange) -> CalendarResult<bool> {
    is_within_range(date, &range.from, &range.to)
}
