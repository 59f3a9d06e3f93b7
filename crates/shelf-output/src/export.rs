//! Export functionality for the produced tables.
//!
//! Frames are converted into typed records first; missing window
//! statistics and undefined scores stay `None` and serialize as empty
//! CSV cells or JSON nulls rather than zeros.

use chrono::NaiveDate;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use shelf_data::dates;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during export operations.
#[derive(Debug, Error)]
pub enum ExportError {
    /// CSV serialization error.
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Column access or dtype error.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::prelude::PolarsError),

    /// A key column unexpectedly held a null.
    #[error("Missing value in column '{0}'")]
    MissingValue(&'static str),
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values format.
    Csv,

    /// Compact JSON format.
    Json,

    /// Pretty-printed JSON format.
    PrettyJson,
}

impl ExportFormat {
    /// Get the file extension for this format.
    pub const fn extension(&self) -> &str {
        match self {
            Self::Csv => "csv",
            Self::Json | Self::PrettyJson => "json",
        }
    }
}

/// One feature-table row: the observation keys, the per-level sales
/// sums, and the nullable window statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureExport {
    /// Product identifier.
    pub product_id: i64,
    /// Store identifier.
    pub store_id: i64,
    /// Brand identifier resolved through the product.
    pub brand_id: i64,
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Quantity sold for the (product, store) on that day.
    pub sales_product: f64,
    /// Trailing product-level moving average.
    #[serde(rename = "MA7_P")]
    pub ma7_p: Option<f64>,
    /// Product-level positional lag.
    #[serde(rename = "LAG7_P")]
    pub lag7_p: Option<f64>,
    /// Brand-level sales sum for the day.
    pub sales_brand: f64,
    /// Trailing brand-level moving average.
    #[serde(rename = "MA7_B")]
    pub ma7_b: Option<f64>,
    /// Brand-level positional lag.
    #[serde(rename = "LAG7_B")]
    pub lag7_b: Option<f64>,
    /// Store-level sales sum for the day.
    pub sales_store: f64,
    /// Trailing store-level moving average.
    #[serde(rename = "MA7_S")]
    pub ma7_s: Option<f64>,
    /// Store-level positional lag.
    #[serde(rename = "LAG7_S")]
    pub lag7_s: Option<f64>,
}

/// One WMAPE row; the score is null when undefined for the group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WmapeExport {
    /// Product identifier.
    pub product_id: i64,
    /// Store identifier.
    pub store_id: i64,
    /// Brand identifier.
    pub brand_id: i64,
    /// Weighted mean absolute percentage error for the group.
    #[serde(rename = "WMAPE")]
    pub wmape: Option<f64>,
}

fn required<T>(value: Option<T>, column: &'static str) -> Result<T, ExportError> {
    value.ok_or(ExportError::MissingValue(column))
}

/// Convert the (filtered, head-limited) feature table into export
/// records.
pub fn feature_exports(df: &DataFrame) -> Result<Vec<FeatureExport>, ExportError> {
    let product_id = df.column("product_id")?.i64()?;
    let store_id = df.column("store_id")?.i64()?;
    let brand_id = df.column("brand_id")?.i64()?;
    let date = df.column("date")?.cast(&DataType::Int32)?;
    let date = date.i32()?;
    let sales_product = df.column("sales_product")?.f64()?;
    let ma7_p = df.column("MA7_P")?.f64()?;
    let lag7_p = df.column("LAG7_P")?.f64()?;
    let sales_brand = df.column("sales_brand")?.f64()?;
    let ma7_b = df.column("MA7_B")?.f64()?;
    let lag7_b = df.column("LAG7_B")?.f64()?;
    let sales_store = df.column("sales_store")?.f64()?;
    let ma7_s = df.column("MA7_S")?.f64()?;
    let lag7_s = df.column("LAG7_S")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        rows.push(FeatureExport {
            product_id: required(product_id.get(i), "product_id")?,
            store_id: required(store_id.get(i), "store_id")?,
            brand_id: required(brand_id.get(i), "brand_id")?,
            date: dates::from_days(required(date.get(i), "date")?),
            sales_product: required(sales_product.get(i), "sales_product")?,
            ma7_p: ma7_p.get(i),
            lag7_p: lag7_p.get(i),
            sales_brand: required(sales_brand.get(i), "sales_brand")?,
            ma7_b: ma7_b.get(i),
            lag7_b: lag7_b.get(i),
            sales_store: required(sales_store.get(i), "sales_store")?,
            ma7_s: ma7_s.get(i),
            lag7_s: lag7_s.get(i),
        });
    }
    Ok(rows)
}

/// Convert the WMAPE score table into export records.
pub fn wmape_exports(df: &DataFrame) -> Result<Vec<WmapeExport>, ExportError> {
    let product_id = df.column("product_id")?.i64()?;
    let store_id = df.column("store_id")?.i64()?;
    let brand_id = df.column("brand_id")?.i64()?;
    let wmape = df.column("WMAPE")?.f64()?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        rows.push(WmapeExport {
            product_id: required(product_id.get(i), "product_id")?,
            store_id: required(store_id.get(i), "store_id")?,
            brand_id: required(brand_id.get(i), "brand_id")?,
            wmape: wmape.get(i),
        });
    }
    Ok(rows)
}

/// Trait for exporting data in various formats.
pub trait Exporter {
    /// Export data to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError>;

    /// Export data to a file in the specified format.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or file writing fails.
    fn export_to_file(&self, path: &Path, format: ExportFormat) -> Result<(), ExportError> {
        let content = self.export_to_string(format)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

fn csv_string<T: Serialize>(records: &[T]) -> Result<String, ExportError> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for record in records {
        wtr.serialize(record)?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes).expect("csv output is valid UTF-8"))
}

impl Exporter for Vec<FeatureExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl Exporter for Vec<WmapeExport> {
    fn export_to_string(&self, format: ExportFormat) -> Result<String, ExportError> {
        match format {
            ExportFormat::Csv => csv_string(self),
            ExportFormat::Json => Ok(serde_json::to_string(self)?),
            ExportFormat::PrettyJson => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
