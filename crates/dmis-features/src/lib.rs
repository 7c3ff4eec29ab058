//! # dmis-features
//!
//! The feature encoding pipeline: categorical encoders with closed
//! vocabularies, a standard scaler, and the one canonical transform used
//! identically at training and inference time.

pub mod encoder;
pub mod pipeline;
pub mod scaler;

pub use encoder::{CategoryEncoder, EncoderSet};
pub use pipeline::{FeaturePipeline, FittedFeatures};
pub use scaler::StandardScaler;
