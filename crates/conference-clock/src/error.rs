//! Error types for conference-clock operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid conference day: {0}")]
    InvalidDay(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown feature window: {0}")]
    UnknownFeature(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClockError>;
