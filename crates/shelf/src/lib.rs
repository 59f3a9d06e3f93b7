#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipeline;

// Re-export main types from sub-crates
pub use shelf_data as data;
pub use shelf_features as features;
pub use shelf_metrics as metrics;
pub use shelf_output as output;

pub use pipeline::{PipelineError, SalesFeaturePipeline};
pub use shelf_features::DateRange;

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
