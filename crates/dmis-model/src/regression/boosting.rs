//! Gradient boosting over shallow regression trees (squared-error loss, so
//! each round fits a tree to the current residuals).

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::tree::{RegressionTree, TreeParams};
use super::Regressor;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoosting {
    /// Initial prediction: the target mean.
    init: f64,
    learning_rate: f64,
    trees: Vec<RegressionTree>,
}

impl GradientBoosting {
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>, n_rounds: usize, learning_rate: f64) -> Self {
        let n = x.nrows();
        let init = y.sum() / n as f64;
        let indices: Vec<usize> = (0..n).collect();
        let params = TreeParams {
            max_depth: 3,
            min_samples_split: 2,
            min_samples_leaf: 1,
        };

        let mut prediction = vec![init; n];
        let mut trees = Vec::with_capacity(n_rounds);

        for _ in 0..n_rounds {
            let residuals = Array1::from_iter((0..n).map(|i| y[i] - prediction[i]));
            let tree = RegressionTree::fit(x, &residuals, &indices, &params);
            for (i, pred) in prediction.iter_mut().enumerate() {
                *pred += learning_rate * tree.predict_row(x.row(i).to_vec().as_slice());
            }
            trees.push(tree);
        }

        Self {
            init,
            learning_rate,
            trees,
        }
    }

    pub fn n_rounds(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for GradientBoosting {
    fn predict_row(&self, features: &[f64]) -> f64 {
        self.init
            + self.learning_rate
                * self
                    .trees
                    .iter()
                    .map(|t| t.predict_row(features))
                    .sum::<f64>()
    }
}
