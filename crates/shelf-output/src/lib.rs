#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod export;

pub use export::{
    ExportError, ExportFormat, Exporter, FeatureExport, WmapeExport, feature_exports,
    wmape_exports,
};
