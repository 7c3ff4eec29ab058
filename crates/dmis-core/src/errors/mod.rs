//! Error taxonomy for the forecasting core.
//!
//! Five distinguishable kinds: unknown model, unknown category, malformed
//! metrics, artifact load failure, empty batch. All are deterministic
//! validation failures and are never retried.

mod artifact_error;
mod encoding_error;
mod prediction_error;

pub use artifact_error::ArtifactError;
pub use encoding_error::EncodingError;
pub use prediction_error::PredictionError;

/// Umbrella error for cross-crate propagation.
#[derive(Debug, thiserror::Error)]
pub enum DmisError {
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Convenience alias used throughout the workspace.
pub type DmisResult<T> = Result<T, DmisError>;
