/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown default offset unit: {0}")]
    UnknownUnit(String),

    #[error("holiday {month:02}-{day:02} does not exist in any year")]
    ImpossibleHoliday { month: u32, day: u32 },

    #[error("holiday set must not be empty")]
    EmptyHolidaySet,
}
