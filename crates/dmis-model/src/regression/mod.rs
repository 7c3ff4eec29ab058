//! Regression variants. Each consumes the identical scaled feature matrix
//! and is serde-serializable so persistence preserves its parameters
//! exactly.

mod boosting;
mod forest;
mod linear;
mod tree;

pub use boosting::GradientBoosting;
pub use forest::RandomForest;
pub use linear::LinearRegression;
pub use tree::{RegressionTree, TreeParams};

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

/// A fitted regression function over one scaled feature vector.
pub trait Regressor {
    fn predict_row(&self, features: &[f64]) -> f64;

    /// Predict every row of a matrix.
    fn predict(&self, matrix: &Array2<f64>) -> Array1<f64> {
        Array1::from_iter(
            matrix
                .axis_iter(Axis(0))
                .map(|row| self.predict_row(row.to_vec().as_slice())),
        )
    }
}

/// One trained model, keyed by its public name. Created once by fitting,
/// read-only afterward.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "algorithm")]
pub enum TrainedModel {
    #[serde(rename = "linear_regression")]
    Linear(LinearRegression),
    #[serde(rename = "random_forest")]
    Forest(RandomForest),
    #[serde(rename = "gradient_boosting")]
    Boosting(GradientBoosting),
}

impl TrainedModel {
    /// Public selector key for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            TrainedModel::Linear(_) => "Linear Regression",
            TrainedModel::Forest(_) => "Random Forest",
            TrainedModel::Boosting(_) => "Gradient Boosting",
        }
    }
}

impl Regressor for TrainedModel {
    fn predict_row(&self, features: &[f64]) -> f64 {
        match self {
            TrainedModel::Linear(m) => m.predict_row(features),
            TrainedModel::Forest(m) => m.predict_row(features),
            TrainedModel::Boosting(m) => m.predict_row(features),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn serde_round_trip_preserves_predictions() {
        let x = array![[1.0], [2.0], [3.0], [4.0]];
        let y = array![2.0, 4.0, 6.0, 8.0];
        let model = TrainedModel::Forest(RandomForest::fit(&x, &y, 5, 42));

        let json = serde_json::to_value(&model).unwrap();
        assert_eq!(json["algorithm"], "random_forest");

        let restored: TrainedModel = serde_json::from_value(json).unwrap();
        for v in [0.5, 2.5, 3.9] {
            assert_eq!(model.predict_row(&[v]), restored.predict_row(&[v]));
        }
    }

    #[test]
    fn names_are_the_public_selector_keys() {
        let x = array![[1.0], [2.0], [3.0]];
        let y = array![1.0, 2.0, 3.0];
        let linear = TrainedModel::Linear(LinearRegression::fit(&x, &y));
        let boosting = TrainedModel::Boosting(GradientBoosting::fit(&x, &y, 2, 0.1));
        assert_eq!(linear.name(), "Linear Regression");
        assert_eq!(boosting.name(), "Gradient Boosting");
    }
}
