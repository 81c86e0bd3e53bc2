//! Error type shared by the parser, the number table and the converters.

use crate::time::Time;

/// Errors raised while parsing or converting a time
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeError {
    #[error("Time input cannot be empty")]
    EmptyInput,
    #[error("Invalid time format. {0}")]
    InvalidFormat(String),
    #[error("{unit} must be between {min} and {max}, got: {value}")]
    InvalidTime {
        unit: &'static str,
        min: i32,
        max: i32,
        value: i32,
    },
    #[error("Number out of range: {0}")]
    OutOfRange(i32),
    #[error("Invalid number format: '{0}'")]
    InvalidNumber(String),
    #[error("No rule matched for time: {0}")]
    NoRuleMatched(Time),
    #[error("Time cannot be empty when converting")]
    NullTime,
}

pub type TimeResult<T> = std::result::Result<T, TimeError>;
