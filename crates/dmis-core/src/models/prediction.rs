use serde::{Deserialize, Serialize};

/// Raw metrics submitted for cost prediction.
///
/// Categorical fields stay as strings so vocabulary validation happens at
/// encode time against the fitted encoders, not at deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub affected_population: u32,
    pub affected_households: u32,
    pub houses_damaged: u32,
    pub duration_days: u32,
    pub disaster_type: String,
    pub district: String,
    pub severity: String,
    pub immediate_needs: String,
    /// Optional model selector; the documented default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// One completed prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub model_used: String,
    /// Echo of the input the estimate was computed from.
    pub input: PredictionRequest,
    pub estimated_cost_maloti: f64,
    /// Fixed-fraction uncertainty margin; an approximation, not a
    /// statistically derived interval.
    pub uncertainty_margin: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

/// One successful row inside a batch response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchPrediction {
    pub disaster_type: String,
    pub estimated_cost: f64,
    pub uncertainty: f64,
}

/// Aggregate outcome of a batch prediction.
///
/// Malformed or unencodable rows are skipped, excluded from the aggregate
/// total, and reflected in `total_disasters` vs `successful_predictions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub model_used: String,
    pub total_disasters: usize,
    pub successful_predictions: usize,
    pub predictions: Vec<BatchPrediction>,
    pub total_estimated_cost: f64,
}
