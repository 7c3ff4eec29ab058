//! Request handlers for the forecasting API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use dmis_core::errors::PredictionError;
use dmis_core::models::{BatchSummary, Prediction, PredictionRequest};
use dmis_synthetic::DatasetStats;

use super::error::{ApiError, ApiResult};
use super::state::AppState;
use crate::scenarios::{self, ScenarioPrediction};

/// Response body for health checks.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub models_loaded: usize,
}

/// Liveness plus a count of loaded models.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "dmis-cost-api".to_string(),
        models_loaded: state.predictor.model_names().len(),
    })
}

/// Response body for the model listing.
#[derive(Debug, Serialize)]
pub struct ModelsResponse {
    pub available_models: Vec<String>,
    pub default_model: String,
    pub count: usize,
}

/// List loaded models and the default selector.
pub async fn models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let available = state.predictor.model_names();
    Json(ModelsResponse {
        count: available.len(),
        default_model: state.predictor.default_model().to_string(),
        available_models: available,
    })
}

/// Predict the cost of one event.
pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> ApiResult<Json<Prediction>> {
    let prediction = state.predictor.predict(&request)?;
    Ok(Json(prediction))
}

/// Batch request body. Rows stay untyped so one malformed row degrades
/// the summary instead of rejecting the whole submission.
#[derive(Debug, Deserialize)]
pub struct BatchRequest {
    pub disasters: Vec<serde_json::Value>,
    #[serde(default)]
    pub model: Option<String>,
}

/// Predict a batch of events with one shared model selector.
pub async fn predict_batch(
    State(state): State<AppState>,
    Json(batch): Json<BatchRequest>,
) -> ApiResult<Json<BatchSummary>> {
    if batch.disasters.is_empty() {
        return Err(PredictionError::EmptyBatch.into());
    }
    let submitted = batch.disasters.len();

    let mut requests = Vec::with_capacity(submitted);
    for (index, row) in batch.disasters.into_iter().enumerate() {
        match serde_json::from_value::<PredictionRequest>(row) {
            Ok(request) => requests.push(request),
            Err(err) => {
                let malformed = PredictionError::MalformedMetrics {
                    field: format!("disasters[{index}]"),
                    reason: err.to_string(),
                };
                warn!(error = %malformed, "batch row rejected");
            }
        }
    }

    let summary = if requests.is_empty() {
        // Every row was malformed. Still validate the selector, then
        // report zero successes over the submitted count.
        let model_used = state
            .predictor
            .resolve_name(batch.model.as_deref())?
            .to_string();
        BatchSummary {
            model_used,
            total_disasters: submitted,
            successful_predictions: 0,
            predictions: Vec::new(),
            total_estimated_cost: 0.0,
        }
    } else {
        let mut summary = state
            .predictor
            .predict_batch(batch.model.as_deref(), &requests)?;
        summary.total_disasters = submitted;
        summary
    };

    Ok(Json(summary))
}

/// Response body for the canned scenarios.
#[derive(Debug, Serialize)]
pub struct ScenariosResponse {
    pub scenarios: Vec<ScenarioPrediction>,
}

/// Predict the canned planning scenarios.
pub async fn scenarios(State(state): State<AppState>) -> ApiResult<Json<ScenariosResponse>> {
    let mut predicted = Vec::new();
    for scenario in scenarios::canned() {
        let prediction = state
            .predictor
            .predict(&scenario.request)
            .map_err(|err| ApiError::Internal(format!("scenario {:?}: {err}", scenario.name)))?;
        predicted.push(ScenarioPrediction::new(scenario, &prediction));
    }
    Ok(Json(ScenariosResponse {
        scenarios: predicted,
    }))
}

/// Summary statistics over the training dataset.
pub async fn statistics(State(state): State<AppState>) -> Json<DatasetStats> {
    Json(state.stats.as_ref().clone())
}
