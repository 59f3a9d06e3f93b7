//! Error types for metric computation.

use thiserror::Error;

/// Result type for metric computation.
pub type Result<T> = std::result::Result<T, MetricError>;

/// Errors that can occur while scoring features.
#[derive(Debug, Error)]
pub enum MetricError {
    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}
