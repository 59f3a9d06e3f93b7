//! CSV loading for the four reference tables.

use crate::error::Result;
use crate::frame;
use crate::records::{BrandRecord, ProductRecord, SalesRecord, StoreRecord};
use crate::tables::ReferenceTables;
use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Loads `brand.csv`, `product.csv`, `store.csv` and `sales.csv` from a
/// data directory.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    data_dir: PathBuf,
}

impl CsvLoader {
    /// Create a loader rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn read<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>> {
        let mut reader = csv::Reader::from_path(self.data_dir.join(file))?;
        let mut rows = Vec::new();
        for row in reader.deserialize() {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Brand reference rows.
    pub fn brands(&self) -> Result<Vec<BrandRecord>> {
        self.read("brand.csv")
    }

    /// Product reference rows.
    pub fn products(&self) -> Result<Vec<ProductRecord>> {
        self.read("product.csv")
    }

    /// Store reference rows.
    pub fn stores(&self) -> Result<Vec<StoreRecord>> {
        self.read("store.csv")
    }

    /// Observed sales rows.
    pub fn sales(&self) -> Result<Vec<SalesRecord>> {
        self.read("sales.csv")
    }

    /// Load all four tables and convert them to canonical DataFrames.
    pub fn load_tables(&self) -> Result<ReferenceTables> {
        Ok(ReferenceTables {
            brands: frame::brands_frame(&self.brands()?)?,
            products: frame::products_frame(&self.products()?)?,
            stores: frame::stores_frame(&self.stores()?)?,
            sales: frame::sales_frame(&self.sales()?)?,
        })
    }
}
