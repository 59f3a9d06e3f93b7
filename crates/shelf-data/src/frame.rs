//! Canonical DataFrame construction from typed records.

use crate::dates;
use crate::error::Result;
use crate::records::{BrandRecord, ProductRecord, SalesRecord, StoreRecord};
use chrono::NaiveDate;
use polars::prelude::*;

/// Build `brands[brand_id, brand]`.
pub fn brands_frame(records: &[BrandRecord]) -> Result<DataFrame> {
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let names: Vec<String> = records.iter().map(|r| r.name.clone()).collect();

    let df = DataFrame::new(vec![
        Series::new("brand_id".into(), ids).into(),
        Series::new("brand".into(), names).into(),
    ])?;
    Ok(df)
}

/// Build `products[product_id, brand_id]`.
pub fn products_frame(records: &[ProductRecord]) -> Result<DataFrame> {
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
    let brand_ids: Vec<i64> = records.iter().map(|r| r.brand).collect();

    let df = DataFrame::new(vec![
        Series::new("product_id".into(), ids).into(),
        Series::new("brand_id".into(), brand_ids).into(),
    ])?;
    Ok(df)
}

/// Build `stores[store_id]`. Attribute columns stay behind; the
/// pipeline only ever looks at the id.
pub fn stores_frame(records: &[StoreRecord]) -> Result<DataFrame> {
    let ids: Vec<i64> = records.iter().map(|r| r.id).collect();

    let df = DataFrame::new(vec![Series::new("store_id".into(), ids).into()])?;
    Ok(df)
}

/// Build `sales[product_id, store_id, date, quantity]` with a proper
/// `Date` dtype on the date column.
pub fn sales_frame(records: &[SalesRecord]) -> Result<DataFrame> {
    let product_ids: Vec<i64> = records.iter().map(|r| r.product).collect();
    let store_ids: Vec<i64> = records.iter().map(|r| r.store).collect();
    let days: Vec<NaiveDate> = records.iter().map(|r| r.date).collect();
    let quantities: Vec<f64> = records.iter().map(|r| r.quantity).collect();

    let df = DataFrame::new(vec![
        Series::new("product_id".into(), product_ids).into(),
        Series::new("store_id".into(), store_ids).into(),
        dates::date_column("date", &days)?,
        Series::new("quantity".into(), quantities).into(),
    ])?;
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dates::parse_date;

    #[test]
    fn brands_frame_uses_canonical_names() {
        let records = vec![
            BrandRecord { id: 1, name: "acme".to_string() },
            BrandRecord { id: 2, name: "globex".to_string() },
        ];

        let df = brands_frame(&records).unwrap();
        assert_eq!(df.get_column_names(), vec!["brand_id", "brand"]);
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn products_frame_renames_brand_column() {
        let records = vec![ProductRecord { id: 10, brand: 1 }];

        let df = products_frame(&records).unwrap();
        assert_eq!(df.get_column_names(), vec!["product_id", "brand_id"]);
    }

    #[test]
    fn stores_frame_keeps_only_the_id() {
        let records = vec![StoreRecord { id: 5, name: Some("downtown".to_string()) }];

        let df = stores_frame(&records).unwrap();
        assert_eq!(df.get_column_names(), vec!["store_id"]);
    }

    #[test]
    fn sales_frame_carries_date_dtype() {
        let records = vec![
            SalesRecord {
                product: 10,
                store: 5,
                date: parse_date("2021-01-01").unwrap(),
                quantity: 3.0,
            },
            SalesRecord {
                product: 10,
                store: 5,
                date: parse_date("2021-01-02").unwrap(),
                quantity: 4.0,
            },
        ];

        let df = sales_frame(&records).unwrap();
        assert_eq!(
            df.get_column_names(),
            vec!["product_id", "store_id", "date", "quantity"]
        );
        assert_eq!(df.column("date").unwrap().dtype(), &DataType::Date);
        assert_eq!(df.column("quantity").unwrap().dtype(), &DataType::Float64);
    }
}
