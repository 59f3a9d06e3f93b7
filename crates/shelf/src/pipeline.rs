//! Caching orchestration of the feature pipeline.
//!
//! Control flow is pull-based: each derived table is computed on first
//! access and memoized until [`SalesFeaturePipeline::reset`] clears
//! every downstream cache at once. There is no staleness detection;
//! the source tables are read-only for the pipeline's lifetime.

use polars::prelude::*;
use shelf_data::ReferenceTables;
use shelf_features::DateRange;
use shelf_features::compose::{self, ComposedFeatures};
use shelf_metrics::wmape;
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors surfaced by the cached pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Feature composition or filtering failed
    #[error(transparent)]
    Feature(#[from] shelf_features::FeatureError),

    /// WMAPE scoring failed
    #[error(transparent)]
    Metric(#[from] shelf_metrics::MetricError),

    /// Polars error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),
}

/// Owns the source tables and the two derived caches.
///
/// A single consumer owns one instance; nothing here is shared or
/// synchronized. Separate instances over the same source data are
/// independent.
#[derive(Debug)]
pub struct SalesFeaturePipeline {
    tables: ReferenceTables,
    features: Option<ComposedFeatures>,
    wmape: Option<(DateRange, DataFrame)>,
}

impl SalesFeaturePipeline {
    /// Wrap loaded reference tables.
    pub const fn new(tables: ReferenceTables) -> Self {
        Self {
            tables,
            features: None,
            wmape: None,
        }
    }

    /// The source tables the pipeline was built from.
    pub const fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// The composed feature table, computed on first call and served
    /// from the cache afterwards.
    pub fn features(&mut self) -> Result<&ComposedFeatures> {
        if self.features.is_none() {
            self.features = Some(compose::compose(&self.tables)?);
        }
        Ok(self.features.as_ref().expect("populated above"))
    }

    /// Features restricted to `range`, both ends inclusive.
    ///
    /// Returns a fresh frame; the cached table is left untouched.
    pub fn filtered(&mut self, range: &DateRange) -> Result<DataFrame> {
        let features = self.features()?.features.clone();
        Ok(range.clip(features.lazy()).collect()?)
    }

    /// Per-(product, store, brand) WMAPE over `range`.
    ///
    /// Cached together with the range it was computed for; asking for
    /// a different range recomputes.
    pub fn wmape(&mut self, range: &DateRange) -> Result<&DataFrame> {
        let fresh = matches!(&self.wmape, Some((cached, _)) if cached == range);
        if !fresh {
            let filtered = self.filtered(range)?;
            let scored = wmape::scores(filtered.lazy())?;
            self.wmape = Some((*range, scored));
        }
        Ok(&self.wmape.as_ref().expect("populated above").1)
    }

    /// Drop every cached table at once; the next access recomputes
    /// lazily from the unchanged source tables.
    pub fn reset(&mut self) {
        self.features = None;
        self.wmape = None;
    }
}
