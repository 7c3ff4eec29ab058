//! API router configuration.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Build the REST router over an immutable application state.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/models", get(handlers::models))
        .route("/api/predict", post(handlers::predict))
        .route("/api/predict-batch", post(handlers::predict_batch))
        .route("/api/scenarios", get(handlers::scenarios))
        .route("/api/statistics", get(handlers::statistics))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
