//! Record of one training run, persisted alongside the artifacts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dmis_model::EvalReport;

/// What produced the current artifact set. Informational only; serving
/// never reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingManifest {
    pub trained_at: DateTime<Utc>,
    pub samples: usize,
    pub seed: u64,
    pub reports: Vec<EvalReport>,
}

impl TrainingManifest {
    pub fn new(samples: usize, seed: u64, reports: Vec<EvalReport>) -> Self {
        Self {
            trained_at: Utc::now(),
            samples,
            seed,
            reports,
        }
    }
}
