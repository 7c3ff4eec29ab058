mod cost_estimate;
mod prediction;
mod record;

pub use cost_estimate::CostEstimate;
pub use prediction::{BatchPrediction, BatchSummary, Prediction, PredictionRequest};
pub use record::DisasterRecord;
