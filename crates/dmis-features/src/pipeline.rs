//! The canonical feature transform shared by training and inference.
//!
//! Feature order is fixed and must never change:
//! [Affected_Population, Affected_Households, Houses_Damaged, Duration_Days,
//!  Disaster_Type code, District code, Severity code, Immediate_Needs code].

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::info;

use dmis_core::constants::FEATURE_COUNT;
use dmis_core::errors::EncodingError;
use dmis_core::models::{DisasterRecord, PredictionRequest};

use crate::encoder::EncoderSet;
use crate::scaler::StandardScaler;

/// Fitted encoders plus scaler. Immutable after `fit`; shared read-only at
/// serving time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturePipeline {
    pub encoders: EncoderSet,
    pub scaler: StandardScaler,
}

/// Output of fitting: the pipeline plus the scaled design matrix and
/// training targets.
#[derive(Debug, Clone)]
pub struct FittedFeatures {
    pub pipeline: FeaturePipeline,
    pub matrix: Array2<f64>,
    pub targets: Array1<f64>,
}

impl FeaturePipeline {
    /// Fit encoders and scaler over a labeled dataset, returning the scaled
    /// design matrix alongside the fitted pipeline.
    pub fn fit(records: &[DisasterRecord]) -> Result<FittedFeatures, EncodingError> {
        if records.is_empty() {
            return Err(EncodingError::EmptyDataset);
        }

        let encoders = EncoderSet::fit(records);

        let mut raw = Array2::<f64>::zeros((records.len(), FEATURE_COUNT));
        for (i, record) in records.iter().enumerate() {
            let row = raw_record_row(&encoders, record)?;
            for (j, value) in row.iter().enumerate() {
                raw[[i, j]] = *value;
            }
        }

        let scaler = StandardScaler::fit(&raw)?;
        let matrix = scaler.transform_matrix(&raw);
        let targets = Array1::from_iter(records.iter().map(|r| r.estimated_cost_maloti));

        info!(
            rows = records.len(),
            features = FEATURE_COUNT,
            "feature pipeline fitted"
        );

        Ok(FittedFeatures {
            pipeline: FeaturePipeline { encoders, scaler },
            matrix,
            targets,
        })
    }

    /// Transform raw prediction metrics into one scaled feature vector using
    /// the fitted encoders and scaler. Deterministic; out-of-vocabulary
    /// categoricals fail, never default.
    pub fn transform(
        &self,
        request: &PredictionRequest,
    ) -> Result<[f64; FEATURE_COUNT], EncodingError> {
        let mut row = [
            f64::from(request.affected_population),
            f64::from(request.affected_households),
            f64::from(request.houses_damaged),
            f64::from(request.duration_days),
            self.encoders.disaster_type.code_of(&request.disaster_type)? as f64,
            self.encoders.district.code_of(&request.district)? as f64,
            self.encoders.severity.code_of(&request.severity)? as f64,
            self.encoders.immediate_needs.code_of(&request.immediate_needs)? as f64,
        ];
        self.scaler.transform_row(&mut row);
        Ok(row)
    }
}

/// Unscaled feature row for one training record, in the fixed order.
fn raw_record_row(
    encoders: &EncoderSet,
    record: &DisasterRecord,
) -> Result<[f64; FEATURE_COUNT], EncodingError> {
    Ok([
        f64::from(record.affected_population),
        f64::from(record.affected_households),
        f64::from(record.houses_damaged),
        f64::from(record.duration_days),
        encoders.disaster_type.code_of(record.disaster_type.as_str())? as f64,
        encoders.district.code_of(record.district.as_str())? as f64,
        encoders.severity.code_of(record.severity.as_str())? as f64,
        encoders.immediate_needs.code_of(&record.immediate_needs)? as f64,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmis_synthetic::SyntheticGenerator;

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

    fn fitted() -> FittedFeatures {
        let records = SyntheticGenerator::new(42).generate(400);
        FeaturePipeline::fit(&records).unwrap()
    }

    #[test]
    fn transform_is_bit_identical_across_calls() {
        let fitted = fitted();
        let a = fitted.pipeline.transform(&request()).unwrap();
        let b = fitted.pipeline.transform(&request()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn fit_is_idempotent_on_identical_data() {
        let records = SyntheticGenerator::new(42).generate(400);
        let a = FeaturePipeline::fit(&records).unwrap();
        let b = FeaturePipeline::fit(&records).unwrap();
        assert_eq!(a.pipeline, b.pipeline);
        assert_eq!(a.matrix, b.matrix);
    }

    #[test]
    fn unknown_disaster_type_fails_encoding() {
        let fitted = fitted();
        let mut bad = request();
        bad.disaster_type = "Earthquake".to_string();
        let err = fitted.pipeline.transform(&bad).unwrap_err();
        assert!(matches!(err, EncodingError::UnknownCategory { .. }));
    }

    #[test]
    fn matrix_shape_matches_dataset_and_feature_order() {
        let records = SyntheticGenerator::new(7).generate(250);
        let fitted = FeaturePipeline::fit(&records).unwrap();
        assert_eq!(fitted.matrix.nrows(), 250);
        assert_eq!(fitted.matrix.ncols(), FEATURE_COUNT);
        assert_eq!(fitted.targets.len(), 250);
    }

    #[test]
    fn targets_carry_the_labeled_costs() {
        let records = SyntheticGenerator::new(9).generate(50);
        let fitted = FeaturePipeline::fit(&records).unwrap();
        for (target, record) in fitted.targets.iter().zip(&records) {
            assert_eq!(*target, record.estimated_cost_maloti);
        }
    }
}
