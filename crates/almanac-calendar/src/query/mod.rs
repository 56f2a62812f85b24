//! Range and ordering classifiers.

pub mod ordering;
pub mod range;

pub use ordering::{is_date_after, is_date_before, is_same_day};
pub use range::{is_in_range, is_within_range};
