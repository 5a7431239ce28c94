//! Error types for timewords operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimewordsError {
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Duration string is empty")]
    EmptyInput,

    #[error("Negative durations are not allowed")]
    NegativeNotAllowed,

    #[error("Cannot parse duration: {0}")]
    Unparseable(String),
}

pub type Result<T> = std::result::Result<T, TimewordsError>;
