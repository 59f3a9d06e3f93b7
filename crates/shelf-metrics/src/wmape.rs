//! Weighted mean absolute percentage error over feature groups.
//!
//! `WMAPE = sum(|sales_product - MA7_P|) / sum(sales_product)` per
//! (product, store, brand) group, both sums restricted to rows that
//! actually carry a moving average.

use crate::error::Result;
use polars::prelude::*;

/// Grouping key of one score row.
pub const GROUP_KEYS: [&str; 3] = ["product_id", "store_id", "brand_id"];

/// Score every (product, store, brand) group in the filtered features.
///
/// Rows without a moving average carry no forecast; they are excluded
/// from numerator and denominator alike. A group with no scored rows,
/// or whose scored sales sum to zero, gets a null score instead of a
/// division failure.
pub fn scores(features: LazyFrame) -> Result<DataFrame> {
    let keys: Vec<Expr> = GROUP_KEYS.iter().copied().map(col).collect();

    let scored = features
        .with_column(
            when(col("MA7_P").is_not_null())
                .then((col("sales_product") - col("MA7_P")).abs())
                .otherwise(lit(NULL))
                .alias("abs_err"),
        )
        .group_by(keys)
        .agg([
            col("abs_err").sum().alias("abs_err_sum"),
            col("sales_product")
                .filter(col("abs_err").is_not_null())
                .sum()
                .alias("sales_sum"),
            col("abs_err").count().alias("scored_rows"),
        ])
        .with_column(
            when(
                col("scored_rows")
                    .gt(lit(0))
                    .and(col("sales_sum").neq(lit(0.0))),
            )
            .then(col("abs_err_sum") / col("sales_sum"))
            .otherwise(lit(NULL))
            .alias("WMAPE"),
        )
        .select([
            col("product_id"),
            col("store_id"),
            col("brand_id"),
            col("WMAPE"),
        ])
        .sort(GROUP_KEYS, Default::default())
        .collect()?;

    Ok(scored)
}

/// The `n` worst groups by score, nulls last.
pub fn top(scores: &DataFrame, n: usize) -> Result<DataFrame> {
    let sorted = scores.sort(
        ["WMAPE"],
        SortMultipleOptions::default()
            .with_order_descending(true)
            .with_nulls_last(true),
    )?;
    Ok(sorted.head(Some(n)))
}
