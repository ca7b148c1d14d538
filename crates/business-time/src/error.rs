//! Error types for business-time operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusinessTimeError {
    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Period limit exceeded: walk needed more than {limit} periods")]
    PeriodLimitExceeded { limit: usize },
}

pub type Result<T> = std::result::Result<T, BusinessTimeError>;
