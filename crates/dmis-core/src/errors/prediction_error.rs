use super::EncodingError;

/// Prediction-time errors surfaced to the immediate caller.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PredictionError {
    #[error("model {requested:?} not found; available models: {available:?}")]
    UnknownModel {
        requested: String,
        available: Vec<String>,
    },

    #[error("malformed metrics: field {field} {reason}")]
    MalformedMetrics { field: String, reason: String },

    #[error("batch request contains no items")]
    EmptyBatch,

    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
