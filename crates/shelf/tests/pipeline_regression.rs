//! End-to-end regression over a small hand-checked dataset.
//!
//! One clean group (product 10, brand 1, store 5) sells quantities
//! 1..=10 over ten consecutive days. Two extra sales rows at store 6
//! cannot be brand-resolved (unknown product, unknown brand) and must
//! be dropped with an observable count.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use polars::prelude::*;
use shelf::data::ReferenceTables;
use shelf::data::dates;
use shelf::features::{FEATURE_COLUMNS, FeatureError};
use shelf::metrics::wmape;
use shelf::{DateRange, SalesFeaturePipeline};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, n).unwrap()
}

fn range(min: u32, max: u32) -> DateRange {
    DateRange::new(day(min), day(max)).unwrap()
}

fn tables() -> ReferenceTables {
    let brands = DataFrame::new(vec![
        Series::new("brand_id".into(), vec![1i64]).into(),
        Series::new("brand".into(), vec!["acme"]).into(),
    ])
    .unwrap();

    // Product 20 points at brand 7, which does not exist.
    let products = DataFrame::new(vec![
        Series::new("product_id".into(), vec![10i64, 20]).into(),
        Series::new("brand_id".into(), vec![1i64, 7]).into(),
    ])
    .unwrap();

    let stores =
        DataFrame::new(vec![Series::new("store_id".into(), vec![5i64, 6]).into()]).unwrap();

    let mut product_ids: Vec<i64> = (1..=10).map(|_| 10).collect();
    let mut store_ids: Vec<i64> = (1..=10).map(|_| 5).collect();
    let mut days: Vec<NaiveDate> = (1..=10).map(day).collect();
    let mut quantities: Vec<f64> = (1..=10).map(f64::from).collect();

    // Unresolvable rows: unknown brand, then unknown product.
    product_ids.extend([20, 999]);
    store_ids.extend([6, 6]);
    days.extend([day(1), day(2)]);
    quantities.extend([100.0, 50.0]);

    let sales = DataFrame::new(vec![
        Series::new("product_id".into(), product_ids).into(),
        Series::new("store_id".into(), store_ids).into(),
        dates::date_column("date", &days).unwrap(),
        Series::new("quantity".into(), quantities).into(),
    ])
    .unwrap();

    ReferenceTables {
        brands,
        products,
        stores,
        sales,
    }
}

fn f64_at(df: &DataFrame, column: &str, idx: usize) -> Option<f64> {
    df.column(column).unwrap().f64().unwrap().get(idx)
}

#[test]
fn composes_the_full_feature_table() {
    let mut pipeline = SalesFeaturePipeline::new(tables());
    let composed = pipeline.features().unwrap();

    assert_eq!(composed.features.get_column_names(), FEATURE_COLUMNS.to_vec());
    assert_eq!(composed.features.height(), 10);
    assert_eq!(composed.dropped_sales, 2);

    // Day 8 is the first row with a full window behind it.
    assert_relative_eq!(f64_at(&composed.features, "sales_product", 7).unwrap(), 8.0);
    assert_relative_eq!(f64_at(&composed.features, "MA7_P", 7).unwrap(), 4.0);
    assert_relative_eq!(f64_at(&composed.features, "LAG7_P", 7).unwrap(), 1.0);
    assert_eq!(f64_at(&composed.features, "MA7_P", 6), None);
    assert_eq!(f64_at(&composed.features, "LAG7_P", 6), None);

    // Store 5 only ever sold product 10, so the brand and store
    // rollups collapse onto the product series.
    assert_relative_eq!(f64_at(&composed.features, "MA7_B", 7).unwrap(), 4.0);
    assert_relative_eq!(f64_at(&composed.features, "MA7_S", 7).unwrap(), 4.0);
    assert_relative_eq!(f64_at(&composed.features, "LAG7_S", 9).unwrap(), 3.0);
}

#[test]
fn filtering_is_inclusive_and_leaves_the_cache_alone() {
    let mut pipeline = SalesFeaturePipeline::new(tables());

    let clipped = pipeline.filtered(&range(8, 10)).unwrap();
    assert_eq!(clipped.height(), 3);

    let clipped = pipeline.filtered(&range(2, 9)).unwrap();
    assert_eq!(clipped.height(), 8);

    // The cached table still holds every row.
    assert_eq!(pipeline.features().unwrap().features.height(), 10);
}

#[test]
fn recomputation_after_reset_is_byte_identical() {
    let mut pipeline = SalesFeaturePipeline::new(tables());

    let first = pipeline.features().unwrap().features.clone();
    pipeline.reset();
    let second = pipeline.features().unwrap().features.clone();

    assert!(first.equals_missing(&second));
}

#[test]
fn wmape_matches_the_hand_computed_ratio() {
    let mut pipeline = SalesFeaturePipeline::new(tables());

    // Scored rows are days 8..=10: |8-4| + |9-5| + |10-6| over 8+9+10.
    let scored = pipeline.wmape(&range(1, 10)).unwrap();
    assert_eq!(scored.height(), 1);
    assert_relative_eq!(f64_at(scored, "WMAPE", 0).unwrap(), 12.0 / 27.0);
}

#[test]
fn wmape_cache_tracks_the_requested_range() {
    let mut pipeline = SalesFeaturePipeline::new(tables());

    let full = f64_at(pipeline.wmape(&range(1, 10)).unwrap(), "WMAPE", 0);
    // Days 1..=7 carry no moving average at all.
    let early = f64_at(pipeline.wmape(&range(1, 7)).unwrap(), "WMAPE", 0);
    assert_relative_eq!(full.unwrap(), 12.0 / 27.0);
    assert_eq!(early, None);

    pipeline.reset();
    let recomputed = f64_at(pipeline.wmape(&range(1, 10)).unwrap(), "WMAPE", 0);
    assert_relative_eq!(recomputed.unwrap(), 12.0 / 27.0);
}

#[test]
fn inverted_range_is_rejected_before_any_computation() {
    let invalid = DateRange::new(day(10), day(1));
    assert!(matches!(
        invalid,
        Err(FeatureError::InvalidDateRange { .. })
    ));
}

#[test]
fn top_n_presents_worst_groups_first() {
    let mut pipeline = SalesFeaturePipeline::new(tables());

    let scored = pipeline.wmape(&range(1, 10)).unwrap().clone();
    let worst = wmape::top(&scored, 5).unwrap();
    assert_eq!(worst.height(), 1);
    assert_relative_eq!(f64_at(&worst, "WMAPE", 0).unwrap(), 12.0 / 27.0);
}
