//! Chronological ordering and same-day equality.
//!
//! None of these validate. Any comparison involving the invalid sentinel is
//! false, in every direction, so `!is_date_before(a, b)` does not imply
//! `a >= b` once a sentinel is involved.

use almanac_core::models::Instant;

/// True iff `date` is strictly earlier than `compare`.
pub fn is_date_before(date: &Instant, compare: &Instant) -> bool {
    matches!((date.datetime(), compare.datetime()), (Some(a), Some(b)) if a < b)
}

/// True iff `date` is strictly later than `compare`.
pub fn is_date_after(date: &Instant, compare: &Instant) -> bool {
    matches!((date.datetime(), compare.datetime()), (Some(a), Some(b)) if a > b)
}

/// True iff both instants fall on the same local calendar day.
pub fn is_same_day(date: &Instant, compare: &Instant) -> bool {
    matches!((date.date(), compare.date()), (Some(a), Some(b)) if a == b)
}
