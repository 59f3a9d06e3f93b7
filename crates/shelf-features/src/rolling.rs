//! Grouped rolling aggregation shared by the three hierarchy levels.
//!
//! Product, brand and store features are the same operation with
//! different grouping keys and output names: sum the quantity per
//! (key, date) bucket, then derive a trailing moving average and a
//! positional lag within each group's chronological order.

use polars::prelude::*;

/// Trailing window length, in observations.
pub const WINDOW: usize = 7;

/// Grouping keys and output column names for one aggregation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    /// Grouping key columns; `date` is appended for bucketing.
    pub keys: &'static [&'static str],
    /// Output name of the per-(key, date) sales sum.
    pub sales_col: &'static str,
    /// Output name of the trailing moving average.
    pub ma_col: &'static str,
    /// Output name of the positional lag.
    pub lag_col: &'static str,
}

/// Per-(product, store) aggregation. Sales are already unique per
/// (product, store, date), so the sum is the observed quantity.
pub const PRODUCT: Level = Level {
    keys: &["product_id", "store_id"],
    sales_col: "sales_product",
    ma_col: "MA7_P",
    lag_col: "LAG7_P",
};

/// Per-(brand, store) aggregation across the brand's products.
pub const BRAND: Level = Level {
    keys: &["brand_id", "store_id"],
    sales_col: "sales_brand",
    ma_col: "MA7_B",
    lag_col: "LAG7_B",
};

/// Per-store aggregation across everything sold at the store.
pub const STORE: Level = Level {
    keys: &["store_id"],
    sales_col: "sales_store",
    ma_col: "MA7_S",
    lag_col: "LAG7_S",
};

impl Level {
    /// Grouping keys as column expressions.
    pub fn key_exprs(&self) -> Vec<Expr> {
        self.keys.iter().copied().map(col).collect()
    }

    /// Join keys for attaching this level's output back onto the base
    /// rows: the grouping keys plus `date`.
    pub fn join_keys(&self) -> Vec<Expr> {
        let mut keys = self.key_exprs();
        keys.push(col("date"));
        keys
    }
}

/// Sum `quantity` per (key, date) bucket, then derive the trailing
/// moving average and lag within each group's chronological order.
///
/// The moving-average window is closed on the left of the current row:
/// the current date's own sum never contributes to its `ma_col` value.
/// Both derived columns stay null until the group has accumulated
/// [`WINDOW`] prior observations. The lag looks back [`WINDOW`]
/// observation positions, not calendar days, so groups with gaps in
/// their date coverage skip the missing days.
pub fn aggregate(sales: LazyFrame, level: &Level) -> LazyFrame {
    let keys = level.key_exprs();
    let mut bucket = keys.clone();
    bucket.push(col("date"));

    let mut order: Vec<&str> = level.keys.to_vec();
    order.push("date");

    sales
        .group_by(bucket)
        .agg([col("quantity").sum().alias(level.sales_col)])
        .sort(order, Default::default())
        .with_columns([
            // Shift by one so the window covers the observations
            // strictly before the current date.
            col(level.sales_col)
                .shift(lit(1))
                .rolling_mean(RollingOptionsFixedWindow {
                    window_size: WINDOW,
                    min_periods: WINDOW,
                    ..Default::default()
                })
                .over(keys.clone())
                .alias(level.ma_col),
            col(level.sales_col)
                .shift(lit(WINDOW as i64))
                .over(keys)
                .alias(level.lag_col),
        ])
}
