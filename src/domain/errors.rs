use crate::domain::forecasting::{MIN_POINTS, Method};
use thiserror::Error;

/// Errors raised by the forecast engine. All of them are caller mistakes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ForecastError {
    #[error("series too short: need at least {} numbers, got {len}", MIN_POINTS)]
    SeriesTooShort { len: usize },

    #[error("unknown method '{method}': use 'sma' or 'ema'")]
    UnknownMethod { method: String },

    #[error("{method} forecast is not a finite number, check window and alpha")]
    NonFinite { method: Method },
}

/// Field constraint violations on stored records
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be greater than or equal to {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },

    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}
