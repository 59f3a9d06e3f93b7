//! Typed rows for the four loader CSV files.
//!
//! Field names follow the loader's column headers (`id`, `name`,
//! `brand`, `product`, `store`); [`crate::frame`] renames them to the
//! canonical `*_id` names the rest of the pipeline joins on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of `brand.csv`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRecord {
    /// Brand identifier.
    pub id: i64,
    /// Human-readable brand name.
    pub name: String,
}

/// One row of `product.csv`. The `brand` column holds the brand id the
/// product belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Product identifier.
    pub id: i64,
    /// Identifier of the owning brand.
    pub brand: i64,
}

/// One row of `store.csv`. Only the id participates in the pipeline;
/// further attribute columns are ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    /// Store identifier.
    pub id: i64,
    /// Store name, when the file carries one.
    #[serde(default)]
    pub name: Option<String>,
}

/// One observed sale for a (product, store, date).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Identifier of the sold product.
    pub product: i64,
    /// Identifier of the selling store.
    pub store: i64,
    /// Calendar day of the observation, ISO-8601.
    pub date: NaiveDate,
    /// Quantity sold on that day.
    pub quantity: f64,
}
