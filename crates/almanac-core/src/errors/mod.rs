mod calendar_error;
mod config_error;

pub use calendar_error::{CalendarError, CalendarResult};
pub use config_error::ConfigError;
