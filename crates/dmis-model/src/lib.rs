//! # dmis-model
//!
//! The cost estimator: regression variants trained on encoded features, the
//! evaluation harness, and the prediction contract used by the serving
//! façade. Models are immutable once fitted; re-fitting creates new
//! instances.

pub mod metrics;
pub mod predictor;
pub mod regression;
pub mod split;
pub mod trainer;

pub use predictor::CostPredictor;
pub use regression::{Regressor, TrainedModel};
pub use trainer::{EvalReport, ModelTrainer, TrainerParams, TrainedSet};
