//! Inclusive calendar-date filtering of the feature table.

use crate::error::{FeatureError, Result};
use chrono::NaiveDate;
use derive_more::Display;
use polars::prelude::*;
use shelf_data::dates;

/// A closed calendar-date interval.
///
/// Construction rejects an inverted interval, so every `DateRange`
/// that exists is valid and filtering can never silently return an
/// empty table for a caller mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{min}..={max}")]
pub struct DateRange {
    min: NaiveDate,
    max: NaiveDate,
}

impl DateRange {
    /// Create a range; fails with [`FeatureError::InvalidDateRange`]
    /// when `min > max`, before any computation runs.
    pub fn new(min: NaiveDate, max: NaiveDate) -> Result<Self> {
        if min > max {
            return Err(FeatureError::InvalidDateRange {
                start: min,
                end: max,
            });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive).
    pub const fn min(&self) -> NaiveDate {
        self.min
    }

    /// Upper bound (inclusive).
    pub const fn max(&self) -> NaiveDate {
        self.max
    }

    /// Keep rows whose `date` falls inside the range, both ends
    /// inclusive. The input frame is not mutated.
    pub fn clip(&self, features: LazyFrame) -> LazyFrame {
        features.filter(
            col("date")
                .gt_eq(dates::date_expr(self.min))
                .and(col("date").lt_eq(dates::date_expr(self.max))),
        )
    }
}
