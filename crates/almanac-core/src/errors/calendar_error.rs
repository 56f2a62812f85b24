use super::ConfigError;

/// Top-level error type for calendar operations.
///
/// Only the validated entry points (`add`, `is_within_range`) ever produce one of
/// these. Every other operation degrades to a defined value instead.
#[derive(Debug, thiserror::Error)]
pub enum CalendarError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid range: from ({from}) is after to ({to})")]
    InvalidRange { from: String, to: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience type alias.
pub type CalendarResult<T> = Result<T, CalendarError>;
