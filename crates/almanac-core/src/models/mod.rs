mod amount;
mod date_range;
mod instant;
mod offset_unit;

pub use amount::Amount;
pub use date_range::DateRange;
pub use instant::Instant;
pub use offset_unit::{OffsetUnit, UnknownUnit};
