//! Property tests for the offset calculator and classifiers.

use proptest::prelude::*;

use almanac_calendar::{add, is_date_before, is_same_day, is_within_range};
use almanac_core::models::Instant;

fn any_instant() -> impl Strategy<Value = Instant> {
    (
        1900i32..2100,
        1u32..=12,
        1u32..=31,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
        .prop_map(|(y, mo, d, h, mi, s, ms)| Instant::from_ymd_hms_milli(y, mo, d, h, mi, s, ms))
        .prop_filter("must be a real date", Instant::is_valid)
}

/// Day of month ≤ 28, so month/year arithmetic never clamps.
fn unclamped_instant() -> impl Strategy<Value = Instant> {
    (1900i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60)
        .prop_map(|(y, mo, d, h, mi)| Instant::from_ymd_hms_milli(y, mo, d, h, mi, 0, 0))
}

proptest! {
    #[test]
    fn prop_days_round_trip(d in any_instant(), n in -100_000i64..100_000) {
        let forth = add(&d, n, "days").unwrap();
        prop_assert_eq!(add(&forth, -n, "days").unwrap(), d);
    }

    #[test]
    fn prop_months_round_trip_without_clamping(d in unclamped_instant(), n in -2_000i64..2_000) {
        let forth = add(&d, n, "months").unwrap();
        prop_assert_eq!(add(&forth, -n, "months").unwrap(), d);
    }

    #[test]
    fn prop_years_round_trip_without_clamping(d in unclamped_instant(), n in -500i64..500) {
        let forth = add(&d, n, "years").unwrap();
        prop_assert_eq!(add(&forth, -n, "years").unwrap(), d);
    }

    #[test]
    fn prop_unknown_unit_is_identity(d in any_instant(), n in any::<i32>(), unit in "[a-z]{0,8}") {
        prop_assume!(!matches!(unit.as_str(), "days" | "months" | "years"));
        prop_assert_eq!(add(&d, n, &unit).unwrap(), d);
    }

    #[test]
    fn prop_positive_days_move_forward(d in any_instant(), n in 1i64..10_000) {
        let later = add(&d, n, "days").unwrap();
        prop_assert!(is_date_before(&d, &later));
        prop_assert!(!is_same_day(&d, &later));
    }

    #[test]
    fn prop_endpoints_never_within(a in any_instant(), b in any_instant()) {
        let (from, to) = if is_date_before(&b, &a) { (b, a) } else { (a, b) };
        prop_assert!(!is_within_range(&from, &from, &to).unwrap());
        prop_assert!(!is_within_range(&to, &from, &to).unwrap());
    }

    #[test]
    fn prop_before_is_irreflexive(d in any_instant()) {
        prop_assert!(!is_date_before(&d, &d));
        prop_assert!(is_same_day(&d, &d));
    }
}
