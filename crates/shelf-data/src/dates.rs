//! Calendar-date helpers shared across the pipeline.
//!
//! Frames carry dates as the polars `Date` dtype, physically days since
//! the Unix epoch. Parsing into `NaiveDate` happens once at the load
//! boundary so every later comparison is chronological, not
//! lexicographic.

use crate::error::{DataError, Result};
use chrono::{Duration, NaiveDate};
use polars::prelude::*;

/// Parse a canonical `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DataError::InvalidDate(s.to_string()))
}

/// Number of days between the Unix epoch and `date`.
pub fn to_days(date: NaiveDate) -> i32 {
    date.signed_duration_since(NaiveDate::default()).num_days() as i32
}

/// Inverse of [`to_days`].
pub fn from_days(days: i32) -> NaiveDate {
    NaiveDate::default() + Duration::days(i64::from(days))
}

/// A `Date`-typed literal expression for comparisons against a date column.
pub fn date_expr(date: NaiveDate) -> Expr {
    lit(to_days(date)).cast(DataType::Date)
}

/// Build a `Date`-typed column from parsed calendar dates.
pub fn date_column(name: &str, dates: &[NaiveDate]) -> Result<Column> {
    let days: Vec<i32> = dates.iter().copied().map(to_days).collect();
    let series = Series::new(name.into(), days).cast(&DataType::Date)?;
    Ok(series.into())
}
