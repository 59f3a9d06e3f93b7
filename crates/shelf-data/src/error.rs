//! Error types for loading operations.

use thiserror::Error;

/// Result type for loading operations.
pub type Result<T> = std::result::Result<T, DataError>;

/// Errors that can occur while loading and normalizing reference tables.
#[derive(Debug, Error)]
pub enum DataError {
    /// CSV read or deserialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Date not in the canonical zero-padded ISO-8601 form
    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
}
