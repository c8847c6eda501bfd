//! Error types for interval-schedule operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Holiday data unavailable for {year}: {reason}")]
    HolidayDataUnavailable { year: i32, reason: String },

    #[error("Invalid year: {0}")]
    InvalidYear(i32),

    #[error("Invalid interval: {0} days (must be at least 1)")]
    InvalidInterval(u32),

    #[error("Invalid recurrence rule: {0}")]
    InvalidRule(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
