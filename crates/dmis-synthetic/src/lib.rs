//! # dmis-synthetic
//!
//! Synthetic disaster dataset generation for model training, plus summary
//! statistics over generated datasets.

pub mod generator;
pub mod stats;

pub use generator::SyntheticGenerator;
pub use stats::DatasetStats;
