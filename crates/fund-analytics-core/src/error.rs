use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundAnalyticsError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("NAV series contains no usable points")]
    EmptySeries,

    #[error("Insufficient history: {period} lookback needs a NAV on or before {required}")]
    InsufficientHistory { period: String, required: NaiveDate },

    #[error("No contributions matched a valid NAV; returns are undefined")]
    NoContributions,

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FundAnalyticsError {
    fn from(e: serde_json::Error) -> Self {
        FundAnalyticsError::SerializationError(e.to_string())
    }
}
