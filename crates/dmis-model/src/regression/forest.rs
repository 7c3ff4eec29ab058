//! Bootstrap-aggregated regression trees.

use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::tree::{RegressionTree, TreeParams};
use super::Regressor;

/// Random forest: full-depth trees fit on bootstrap resamples, predictions
/// averaged. Seeded explicitly so training is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>, n_estimators: usize, seed: u64) -> Self {
        let n = x.nrows();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let params = TreeParams::default();

        let trees = (0..n_estimators)
            .map(|_| {
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::fit(x, y, &bootstrap, &params)
            })
            .collect();

        Self { trees }
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for RandomForest {
    fn predict_row(&self, features: &[f64]) -> f64 {
        let sum: f64 = self.trees.iter().map(|t| t.predict_row(features)).sum();
        sum / self.trees.len() as f64
    }
}
