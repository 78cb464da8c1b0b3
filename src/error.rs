use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised synchronously by picker operations.
///
/// None of these leave partial state behind: every operation validates before
/// it replaces anything.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PickerError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid bounds: min_date {min} must be on or before max_date {max}")]
    InvalidBounds { min: NaiveDate, max: NaiveDate },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl PickerError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    pub fn date(message: impl Into<String>) -> Self {
        Self::InvalidDate(message.into())
    }

    /// Inverted bounds are a configuration problem as far as hosts are concerned.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_) | Self::InvalidBounds { .. })
    }

    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate(_))
    }
}

pub type Result<T> = std::result::Result<T, PickerError>;
