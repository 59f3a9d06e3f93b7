//! The materialized source tables.

use polars::prelude::*;

/// The four immutable source tables, loaded once per pipeline run.
///
/// Column names are already canonical here; nothing downstream renames
/// anything.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    /// `brand_id`, `brand`.
    pub brands: DataFrame,
    /// `product_id`, `brand_id`.
    pub products: DataFrame,
    /// `store_id`.
    pub stores: DataFrame,
    /// `product_id`, `store_id`, `date`, `quantity`.
    pub sales: DataFrame,
}
