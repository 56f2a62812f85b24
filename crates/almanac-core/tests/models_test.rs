//! Instant, unit, and range model tests.

use almanac_core::models::{DateRange, Instant, OffsetUnit, UnknownUnit};
use chrono::NaiveDate;
use proptest::prelude::*;

#[test]
fn unit_tags_match_exactly() {
    assert_eq!("days".parse::<OffsetUnit>(), Ok(OffsetUnit::Days));
    assert_eq!("months".parse::<OffsetUnit>(), Ok(OffsetUnit::Months));
    assert_eq!("years".parse::<OffsetUnit>(), Ok(OffsetUnit::Years));
    assert_eq!(
        "Days".parse::<OffsetUnit>(),
        Err(UnknownUnit("Days".to_string()))
    );
    assert_eq!(OffsetUnit::from_tag("weeks"), None);
    assert_eq!(OffsetUnit::default(), OffsetUnit::Days);
}

#[test]
fn unit_serializes_lowercase() {
    let json = serde_json::to_string(&OffsetUnit::Months).unwrap();
    assert_eq!(json, "\"months\"");
}

#[test]
fn sentinel_serializes_as_null() {
    assert_eq!(serde_json::to_string(&Instant::INVALID).unwrap(), "null");
    let back: Instant = serde_json::from_str("null").unwrap();
    assert!(!back.is_valid());
}

#[test]
fn valid_instant_serde_roundtrip() {
    let instant = Instant::from_ymd_hms_milli(2024, 12, 25, 18, 30, 0, 250);
    let json = serde_json::to_string(&instant).unwrap();
    let back: Instant = serde_json::from_str(&json).unwrap();
    assert_eq!(back, instant);
}

#[test]
fn range_holds_endpoints_unvalidated() {
    let range = DateRange::new(Instant::from_ymd(2024, 2, 1), Instant::from_ymd(2024, 1, 1));
    assert_eq!(range.from, Instant::from_ymd(2024, 2, 1));
    assert_eq!(range.to, Instant::from_ymd(2024, 1, 1));
}

#[test]
fn from_naive_date_is_midnight() {
    let date = NaiveDate::from_ymd_opt(2024, 7, 2).unwrap();
    let instant = Instant::from(date);
    assert_eq!(instant.date(), Some(date));
    assert_eq!(instant.year(), Some(2024));
    assert_eq!(instant, Instant::from_ymd(2024, 7, 2));
}

proptest! {
    #[test]
    fn prop_from_ymd_valid_iff_chrono_accepts(y in -3000i32..3000, m in 0u32..14, d in 0u32..33) {
        let expected = NaiveDate::from_ymd_opt(y, m, d).is_some();
        prop_assert_eq!(Instant::from_ymd(y, m, d).is_valid(), expected);
    }
}
