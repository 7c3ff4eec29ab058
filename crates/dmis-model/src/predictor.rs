//! The inference entry point: an immutable context carrying the fitted
//! pipeline and model set, shared read-only across requests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use dmis_core::constants::UNCERTAINTY_MARGIN;
use dmis_core::errors::PredictionError;
use dmis_core::models::{BatchPrediction, BatchSummary, Prediction, PredictionRequest};
use dmis_features::FeaturePipeline;

use crate::regression::{Regressor, TrainedModel};

/// Fitted pipeline plus named models. Constructed once, never mutated;
/// concurrent prediction is safe because every field is read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostPredictor {
    pipeline: FeaturePipeline,
    models: BTreeMap<String, TrainedModel>,
    default_model: String,
}

impl CostPredictor {
    pub fn new(
        pipeline: FeaturePipeline,
        models: BTreeMap<String, TrainedModel>,
        default_model: impl Into<String>,
    ) -> Self {
        Self {
            pipeline,
            models,
            default_model: default_model.into(),
        }
    }

    /// Names of the loaded models, in stable order.
    pub fn model_names(&self) -> Vec<String> {
        self.models.keys().cloned().collect()
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn pipeline(&self) -> &FeaturePipeline {
        &self.pipeline
    }

    /// Validate a selector without predicting anything.
    pub fn resolve_name(&self, selector: Option<&str>) -> Result<&str, PredictionError> {
        self.resolve(selector).map(|(name, _)| name)
    }

    /// Resolve a selector to a loaded model. An unknown key is an error
    /// carrying the full valid key set, never a silent substitute.
    fn resolve(&self, selector: Option<&str>) -> Result<(&str, &TrainedModel), PredictionError> {
        let name = selector.unwrap_or(&self.default_model);
        match self.models.get_key_value(name) {
            Some((key, model)) => Ok((key.as_str(), model)),
            None => Err(PredictionError::UnknownModel {
                requested: name.to_string(),
                available: self.model_names(),
            }),
        }
    }

    /// Predict the cost of one event.
    pub fn predict(&self, request: &PredictionRequest) -> Result<Prediction, PredictionError> {
        let (name, model) = self.resolve(request.model.as_deref())?;

        let features = self.pipeline.transform(request)?;
        let estimated = model.predict_row(&features);

        // Fixed-fraction band; an approximation, not model variance.
        let uncertainty = estimated * UNCERTAINTY_MARGIN;

        debug!(model = name, cost = estimated, "prediction served");

        Ok(Prediction {
            model_used: name.to_string(),
            input: request.clone(),
            estimated_cost_maloti: estimated,
            uncertainty_margin: uncertainty,
            confidence_low: estimated - uncertainty,
            confidence_high: estimated + uncertainty,
        })
    }

    /// Predict a batch of events with one shared model selector.
    ///
    /// An empty batch is rejected outright. Rows that fail encoding are
    /// skipped and excluded from the aggregate total; the summary reports
    /// successful vs submitted counts. Output order matches input order.
    pub fn predict_batch(
        &self,
        selector: Option<&str>,
        requests: &[PredictionRequest],
    ) -> Result<BatchSummary, PredictionError> {
        if requests.is_empty() {
            return Err(PredictionError::EmptyBatch);
        }
        let (name, model) = self.resolve(selector)?;

        let mut predictions = Vec::with_capacity(requests.len());
        for request in requests {
            match self.pipeline.transform(request) {
                Ok(features) => {
                    let estimated = model.predict_row(&features);
                    predictions.push(BatchPrediction {
                        disaster_type: request.disaster_type.clone(),
                        estimated_cost: estimated,
                        uncertainty: estimated * UNCERTAINTY_MARGIN,
                    });
                }
                Err(err) => {
                    warn!(error = %err, "batch row skipped");
                }
            }
        }

        let total_estimated_cost = predictions.iter().map(|p| p.estimated_cost).sum();
        Ok(BatchSummary {
            model_used: name.to_string(),
            total_disasters: requests.len(),
            successful_predictions: predictions.len(),
            predictions,
            total_estimated_cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmis_core::constants::DEFAULT_MODEL;
    use dmis_synthetic::SyntheticGenerator;

    use crate::trainer::{ModelTrainer, TrainerParams};

    fn predictor() -> CostPredictor {
        let records = SyntheticGenerator::new(42).generate(250);
        let fitted = FeaturePipeline::fit(&records).unwrap();
        let params = TrainerParams {
            forest_trees: 10,
            boosting_rounds: 20,
            cv_folds: 3,
            ..TrainerParams::default()
        };
        let set = ModelTrainer::new(params)
            .fit_all(&fitted.matrix, &fitted.targets)
            .unwrap();
        CostPredictor::new(fitted.pipeline, set.models, DEFAULT_MODEL)
    }

    fn request() -> PredictionRequest {
        PredictionRequest {
            affected_population: 5_000,
            affected_households: 1_000,
            houses_damaged: 50,
            duration_days: 15,
            disaster_type: "Heavy Rainfall".to_string(),
            district: "Maseru".to_string(),
            severity: "Moderate".to_string(),
            immediate_needs: "Infrastructure & Relief".to_string(),
            model: None,
        }
    }

    #[test]
    fn default_model_is_used_when_unspecified() {
        let predictor = predictor();
        let prediction = predictor.predict(&request()).unwrap();
        assert_eq!(prediction.model_used, "Random Forest");
    }

    #[test]
    fn band_is_fifteen_percent_of_the_point_estimate() {
        let predictor = predictor();
        let prediction = predictor.predict(&request()).unwrap();
        let expected = prediction.estimated_cost_maloti * 0.15;
        assert!((prediction.uncertainty_margin - expected).abs() < 1e-9);
        assert!(
            (prediction.confidence_high - prediction.confidence_low
                - 2.0 * prediction.uncertainty_margin)
                .abs()
                < 1e-9
        );
    }

    #[test]
    fn unknown_model_reports_the_valid_key_set() {
        let predictor = predictor();
        let mut bad = request();
        bad.model = Some("NoSuchModel".to_string());
        let err = predictor.predict(&bad).unwrap_err();
        match err {
            PredictionError::UnknownModel { requested, available } => {
                assert_eq!(requested, "NoSuchModel");
                assert_eq!(
                    available,
                    vec![
                        "Gradient Boosting".to_string(),
                        "Linear Regression".to_string(),
                        "Random Forest".to_string(),
                    ]
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn batch_skips_invalid_rows_and_sums_the_rest() {
        let predictor = predictor();
        let mut invalid = request();
        invalid.disaster_type = "Earthquake".to_string();
        let batch = [request(), invalid, request()];

        let summary = predictor.predict_batch(None, &batch).unwrap();
        assert_eq!(summary.total_disasters, 3);
        assert_eq!(summary.successful_predictions, 2);
        assert_eq!(summary.predictions.len(), 2);
        let expected: f64 = summary.predictions.iter().map(|p| p.estimated_cost).sum();
        assert!((summary.total_estimated_cost - expected).abs() < 1e-9);
    }

    #[test]
    fn empty_batch_is_rejected() {
        let predictor = predictor();
        let err = predictor.predict_batch(None, &[]).unwrap_err();
        assert!(matches!(err, PredictionError::EmptyBatch));
    }

    #[test]
    fn explicit_selector_overrides_the_default() {
        let predictor = predictor();
        let mut linear = request();
        linear.model = Some("Linear Regression".to_string());
        let prediction = predictor.predict(&linear).unwrap();
        assert_eq!(prediction.model_used, "Linear Regression");
    }
}
