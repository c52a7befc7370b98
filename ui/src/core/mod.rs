//! Engine primitives shared by the dataset builder and the chart views.

pub mod config;
pub mod error;
pub mod format;
pub mod rng;

pub use config::EngineConfig;
pub use error::EngineError;
pub use rng::SeededSequence;
