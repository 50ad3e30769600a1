//! Error types for Rocktober core domain logic

use thiserror::Error;

/// Core configuration and formatting errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid time of day (expected HH:MM, 24-hour): {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Local time {0} does not exist in the event timezone")]
    NonexistentLocalTime(String),

    #[error("Invalid event configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
