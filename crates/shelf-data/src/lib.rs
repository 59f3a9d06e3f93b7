#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod dates;
pub mod error;
pub mod frame;
pub mod loader;
pub mod records;
pub mod tables;

pub use error::{DataError, Result};
pub use loader::CsvLoader;
pub use tables::ReferenceTables;
