//! Calendar fields an offset can apply to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The recognized offset units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    #[default]
    Days,
    Months,
    Years,
}

/// Returned by `OffsetUnit::from_str` for any tag outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized offset unit: {0}")]
pub struct UnknownUnit(pub String);

impl OffsetUnit {
    pub const DEFAULT_TAG: &'static str = "days";

    /// Exact, case-sensitive match against the recognized tags.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "days" => Some(OffsetUnit::Days),
            "months" => Some(OffsetUnit::Months),
            "years" => Some(OffsetUnit::Years),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OffsetUnit::Days => "days",
            OffsetUnit::Months => "months",
            OffsetUnit::Years => "years",
        }
    }
}

impl FromStr for OffsetUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownUnit(s.to_string()))
    }
}

impl fmt::Display for OffsetUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
