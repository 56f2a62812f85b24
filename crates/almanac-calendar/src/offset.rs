//! Offset calculator: add a signed amount of days, months, or years to an instant.
//!
//! Month and year arithmetic is calendar-aware and clamps to the last valid day
//! of the target month (Jan 31 + 1 month = Feb 28/29). That behavior comes from
//! chrono's `Months` arithmetic and is not reimplemented here.

use chrono::{Months, NaiveDateTime, TimeDelta};
use tracing::debug;

use almanac_core::errors::{CalendarError, CalendarResult};
use almanac_core::models::{Amount, Instant, OffsetUnit};

/// Add `amount` of `unit` to `date`.
///
/// Fails with `InvalidInput` if `date` is the sentinel or `amount` is not finite.
/// A `unit` outside `days`/`months`/`years` is not an error: a copy of `date`
/// is returned unchanged.
pub fn add(date: &Instant, amount: impl Into<Amount>, unit: &str) -> CalendarResult<Instant> {
    let amount = amount.into();
    validate(date, amount)?;

    match OffsetUnit::from_tag(unit) {
        Some(unit) => Ok(shift(date, amount, unit)),
        None => {
            debug!(unit, "unrecognized offset unit, date returned unchanged");
            Ok(*date)
        }
    }
}

/// `add` with the default unit (days).
pub fn add_default(date: &Instant, amount: impl Into<Amount>) -> CalendarResult<Instant> {
    add(date, amount, OffsetUnit::DEFAULT_TAG)
}

/// `add` for callers holding a typed unit.
pub fn add_unit(
    date: &Instant,
    amount: impl Into<Amount>,
    unit: OffsetUnit,
) -> CalendarResult<Instant> {
    let amount = amount.into();
    validate(date, amount)?;
    Ok(shift(date, amount, unit))
}

fn validate(date: &Instant, amount: Amount) -> CalendarResult<()> {
    if !date.is_valid() {
        return Err(CalendarError::InvalidInput(
            "date must be a valid instant".to_string(),
        ));
    }
    if !amount.is_finite() {
        return Err(CalendarError::InvalidInput(format!(
            "amount must be a finite number, got {amount:?}"
        )));
    }
    Ok(())
}

/// Apply a validated offset. Results chrono cannot represent become the sentinel.
fn shift(date: &Instant, amount: Amount, unit: OffsetUnit) -> Instant {
    let shifted = match (date.datetime(), amount.truncated()) {
        (Some(dt), Some(n)) => match unit {
            OffsetUnit::Days => TimeDelta::try_days(n).and_then(|d| dt.checked_add_signed(d)),
            OffsetUnit::Months => shift_months(dt, n),
            OffsetUnit::Years => n.checked_mul(12).and_then(|m| shift_months(dt, m)),
        },
        _ => None,
    };

    match shifted {
        Some(dt) => Instant::new(dt),
        None => {
            debug!(%date, ?amount, %unit, "offset out of representable range");
            Instant::INVALID
        }
    }
}

fn shift_months(dt: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        dt.checked_add_months(magnitude)
    } else {
        dt.checked_sub_months(magnitude)
    }
}
