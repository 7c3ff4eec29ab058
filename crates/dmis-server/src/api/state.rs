//! Shared request state.

use std::sync::Arc;

use dmis_model::CostPredictor;
use dmis_synthetic::DatasetStats;

/// Everything a handler needs, built once at startup. The predictor and
/// stats are read-only; cloning the state only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<CostPredictor>,
    pub stats: Arc<DatasetStats>,
}

impl AppState {
    pub fn new(predictor: CostPredictor, stats: DatasetStats) -> Self {
        Self {
            predictor: Arc::new(predictor),
            stats: Arc::new(stats),
        }
    }
}
