//! Training and evaluation of the regression variants.
//!
//! Every variant trains on the identical scaled matrix and the identical
//! seeded 80/20 split, so reported metrics are comparable across variants.

use std::collections::BTreeMap;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use tracing::info;

use dmis_core::errors::EncodingError;

use crate::metrics::{mae, r2, rmse};
use crate::regression::{GradientBoosting, LinearRegression, RandomForest, Regressor, TrainedModel};
use crate::split::{k_fold, take_rows, take_targets, train_test_split};

/// Training hyperparameters. Defaults mirror the production configuration;
/// tests shrink the ensembles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainerParams {
    pub seed: u64,
    pub forest_trees: usize,
    pub boosting_rounds: usize,
    pub learning_rate: f64,
    pub cv_folds: usize,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            seed: 42,
            forest_trees: 100,
            boosting_rounds: 100,
            learning_rate: 0.1,
            cv_folds: 5,
        }
    }
}

/// Held-out and cross-validated scores for one variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub model: String,
    pub train_mae: f64,
    pub test_mae: f64,
    pub train_rmse: f64,
    pub test_rmse: f64,
    pub train_r2: f64,
    pub test_r2: f64,
    pub cv_r2_mean: f64,
    pub cv_r2_std: f64,
}

/// All fitted variants plus their evaluation reports.
#[derive(Debug, Clone)]
pub struct TrainedSet {
    pub models: BTreeMap<String, TrainedModel>,
    pub reports: Vec<EvalReport>,
}

impl TrainedSet {
    /// The report with the best held-out R².
    pub fn best(&self) -> Option<&EvalReport> {
        self.reports
            .iter()
            .max_by(|a, b| a.test_r2.total_cmp(&b.test_r2))
    }
}

#[derive(Debug, Clone, Copy)]
enum Variant {
    Linear,
    Forest,
    Boosting,
}

impl Variant {
    const ALL: [Variant; 3] = [Variant::Linear, Variant::Forest, Variant::Boosting];

    fn fit(self, x: &Array2<f64>, y: &Array1<f64>, params: &TrainerParams) -> TrainedModel {
        match self {
            Variant::Linear => TrainedModel::Linear(LinearRegression::fit(x, y)),
            Variant::Forest => TrainedModel::Forest(RandomForest::fit(
                x,
                y,
                params.forest_trees,
                params.seed,
            )),
            Variant::Boosting => TrainedModel::Boosting(GradientBoosting::fit(
                x,
                y,
                params.boosting_rounds,
                params.learning_rate,
            )),
        }
    }
}

/// Fits and evaluates every regression variant.
pub struct ModelTrainer {
    params: TrainerParams,
}

impl ModelTrainer {
    pub fn new(params: TrainerParams) -> Self {
        Self { params }
    }

    /// Train all variants over the scaled design matrix.
    ///
    /// Each variant is fit on the 80% training split; the returned models
    /// are refit on that same split (one fit per variant name, idempotent
    /// per name). Reports carry held-out metrics and k-fold CV R² over the
    /// training split only.
    pub fn fit_all(
        &self,
        matrix: &Array2<f64>,
        targets: &Array1<f64>,
    ) -> Result<TrainedSet, EncodingError> {
        if matrix.nrows() == 0 {
            return Err(EncodingError::EmptyDataset);
        }

        let (train_idx, test_idx) = train_test_split(matrix.nrows(), 0.2, self.params.seed);
        let x_train = take_rows(matrix, &train_idx);
        let y_train = take_targets(targets, &train_idx);
        let x_test = take_rows(matrix, &test_idx);
        let y_test = take_targets(targets, &test_idx);

        let mut models = BTreeMap::new();
        let mut reports = Vec::new();

        for variant in Variant::ALL {
            let model = variant.fit(&x_train, &y_train, &self.params);
            let name = model.name().to_string();

            let train_pred = model.predict(&x_train);
            let test_pred = model.predict(&x_test);

            let cv_scores = self.cross_validate(variant, &x_train, &y_train);
            let cv_r2_mean = cv_scores.iter().sum::<f64>() / cv_scores.len().max(1) as f64;
            let cv_r2_std = (cv_scores
                .iter()
                .map(|s| (s - cv_r2_mean).powi(2))
                .sum::<f64>()
                / cv_scores.len().max(1) as f64)
                .sqrt();

            let report = EvalReport {
                model: name.clone(),
                train_mae: mae(&y_train, &train_pred),
                test_mae: mae(&y_test, &test_pred),
                train_rmse: rmse(&y_train, &train_pred),
                test_rmse: rmse(&y_test, &test_pred),
                train_r2: r2(&y_train, &train_pred),
                test_r2: r2(&y_test, &test_pred),
                cv_r2_mean,
                cv_r2_std,
            };

            info!(
                model = %report.model,
                test_mae = report.test_mae,
                test_r2 = report.test_r2,
                cv_r2_mean = report.cv_r2_mean,
                "variant trained"
            );

            models.insert(name, model);
            reports.push(report);
        }

        Ok(TrainedSet { models, reports })
    }

    /// K-fold CV R² over the training split, one fresh fit per fold.
    fn cross_validate(&self, variant: Variant, x: &Array2<f64>, y: &Array1<f64>) -> Vec<f64> {
        k_fold(x.nrows(), self.params.cv_folds, self.params.seed)
            .into_iter()
            .filter(|(_, validation)| !validation.is_empty())
            .map(|(train, validation)| {
                let model = variant.fit(
                    &take_rows(x, &train),
                    &take_targets(y, &train),
                    &self.params,
                );
                let predicted = model.predict(&take_rows(x, &validation));
                r2(&take_targets(y, &validation), &predicted)
            })
            .collect()
    }
}
