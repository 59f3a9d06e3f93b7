//! Joins the three level aggregates into the per-(product, store, date)
//! feature table.

use crate::error::Result;
use crate::rolling;
use polars::prelude::*;
use shelf_data::ReferenceTables;

/// Fixed output column set, in order.
pub const FEATURE_COLUMNS: [&str; 13] = [
    "product_id",
    "store_id",
    "brand_id",
    "date",
    "sales_product",
    "MA7_P",
    "LAG7_P",
    "sales_brand",
    "MA7_B",
    "LAG7_B",
    "sales_store",
    "MA7_S",
    "LAG7_S",
];

/// The composed feature table plus its join-loss count.
#[derive(Debug, Clone)]
pub struct ComposedFeatures {
    /// One row per surviving (product, store, date) sales observation,
    /// sorted by (product_id, brand_id, store_id, date).
    pub features: DataFrame,
    /// Sales rows dropped because their product id is unknown or their
    /// product points at an unknown brand.
    pub dropped_sales: usize,
}

/// Build the feature table from the loaded reference tables.
///
/// Brand resolution is `product_id -> products.brand_id -> brands`,
/// inner joins both times. Rows that do not survive are not silently
/// discarded: their count is reported in
/// [`ComposedFeatures::dropped_sales`].
///
/// The store-level aggregate runs over the raw sales: store traffic
/// counts every sale at the store, whether or not the product has a
/// resolvable brand. Product- and brand-level aggregates see only the
/// brand-resolved rows.
pub fn compose(tables: &ReferenceTables) -> Result<ComposedFeatures> {
    let product_brand = tables
        .products
        .clone()
        .lazy()
        .join(
            tables.brands.clone().lazy(),
            [col("brand_id")],
            [col("brand_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .select([col("product_id"), col("brand_id")]);

    let base = tables
        .sales
        .clone()
        .lazy()
        .join(
            product_brand,
            [col("product_id")],
            [col("product_id")],
            JoinArgs::new(JoinType::Inner),
        )
        .collect()?;

    let dropped_sales = tables.sales.height() - base.height();

    let product_agg = rolling::aggregate(base.clone().lazy(), &rolling::PRODUCT);
    let brand_agg = rolling::aggregate(base.clone().lazy(), &rolling::BRAND);
    let store_agg = rolling::aggregate(tables.sales.clone().lazy(), &rolling::STORE);

    let features = base
        .lazy()
        .select([
            col("product_id"),
            col("store_id"),
            col("brand_id"),
            col("date"),
        ])
        .join(
            product_agg,
            rolling::PRODUCT.join_keys(),
            rolling::PRODUCT.join_keys(),
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            brand_agg,
            rolling::BRAND.join_keys(),
            rolling::BRAND.join_keys(),
            JoinArgs::new(JoinType::Inner),
        )
        .join(
            store_agg,
            rolling::STORE.join_keys(),
            rolling::STORE.join_keys(),
            JoinArgs::new(JoinType::Inner),
        )
        .select(feature_columns())
        .sort(
            ["product_id", "brand_id", "store_id", "date"],
            Default::default(),
        )
        .collect()?;

    Ok(ComposedFeatures {
        features,
        dropped_sales,
    })
}

fn feature_columns() -> Vec<Expr> {
    FEATURE_COLUMNS.iter().copied().map(col).collect()
}
