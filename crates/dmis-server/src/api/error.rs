//! API error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use dmis_core::errors::{EncodingError, PredictionError};

/// Errors a handler can surface to a client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, details) = match &self {
            ApiError::Prediction(PredictionError::UnknownModel { available, .. }) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_MODEL",
                Some(serde_json::json!({ "available_models": available })),
            ),
            ApiError::Prediction(PredictionError::Encoding(EncodingError::UnknownCategory {
                column,
                known,
                ..
            })) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_CATEGORY",
                Some(serde_json::json!({ "column": column, "known_values": known })),
            ),
            ApiError::Prediction(PredictionError::Encoding(_)) => {
                (StatusCode::BAD_REQUEST, "ENCODING_ERROR", None)
            }
            ApiError::Prediction(PredictionError::MalformedMetrics { .. }) => {
                (StatusCode::BAD_REQUEST, "MALFORMED_METRICS", None)
            }
            ApiError::Prediction(PredictionError::EmptyBatch) => {
                (StatusCode::BAD_REQUEST, "EMPTY_BATCH", None)
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None),
        };

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
