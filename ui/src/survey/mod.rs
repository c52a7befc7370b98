//! Survey metric datasets: periods, metric profiles, the builder and the cache.

pub mod catalog;
pub mod dataset;
pub mod kind;
pub mod period;

pub use catalog::DatasetCatalog;
pub use dataset::MetricDataset;
pub use kind::{MetricKind, ResponseClass};
pub use period::Period;
