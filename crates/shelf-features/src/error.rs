//! Error types for feature computation.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type for feature computation.
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Errors that can occur while composing or filtering features.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// Invalid date range
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Requested start of the range
        start: NaiveDate,
        /// Requested end of the range
        end: NaiveDate,
    },
}
