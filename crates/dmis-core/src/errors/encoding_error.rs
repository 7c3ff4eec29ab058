/// Feature-encoding errors. A value outside the training vocabulary is a
/// typed failure, never a silent default code.
#[derive(Debug, Clone, thiserror::Error)]
pub enum EncodingError {
    #[error("unknown {column} value {value:?}; known values: {known:?}")]
    UnknownCategory {
        column: String,
        value: String,
        known: Vec<String>,
    },

    #[error("feature matrix is empty; cannot fit encoders or scaler")]
    EmptyDataset,
}
