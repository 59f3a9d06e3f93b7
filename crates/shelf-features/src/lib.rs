#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod compose;
pub mod error;
pub mod range;
pub mod rolling;

pub use compose::{ComposedFeatures, FEATURE_COLUMNS, compose};
pub use error::{FeatureError, Result};
pub use range::DateRange;
pub use rolling::{Level, WINDOW};
