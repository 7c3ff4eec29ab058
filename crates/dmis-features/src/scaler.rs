//! Per-column standardization fit once on training data.

use ndarray::{Array2, Axis};
use serde::{Deserialize, Serialize};

use dmis_core::errors::EncodingError;

/// Per-feature (mean, scale) standardizer.
///
/// Fit computes column means and population standard deviations from the
/// training matrix only; transform applies the same parameters everywhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl StandardScaler {
    /// Fit over a feature matrix (rows = samples).
    pub fn fit(matrix: &Array2<f64>) -> Result<Self, EncodingError> {
        if matrix.nrows() == 0 {
            return Err(EncodingError::EmptyDataset);
        }

        let n = matrix.nrows() as f64;
        let mut mean = Vec::with_capacity(matrix.ncols());
        let mut scale = Vec::with_capacity(matrix.ncols());

        for column in matrix.axis_iter(Axis(1)) {
            let m = column.sum() / n;
            let var = column.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
            let s = var.sqrt();
            mean.push(m);
            // A constant column scales by 1.0 so transform stays defined.
            scale.push(if s == 0.0 { 1.0 } else { s });
        }

        Ok(Self { mean, scale })
    }

    /// Standardize one row in place.
    pub fn transform_row(&self, row: &mut [f64]) {
        for (i, value) in row.iter_mut().enumerate() {
            *value = (*value - self.mean[i]) / self.scale[i];
        }
    }

    /// Standardize a whole matrix, returning a new one.
    pub fn transform_matrix(&self, matrix: &Array2<f64>) -> Array2<f64> {
        let mut out = matrix.clone();
        for mut row in out.axis_iter_mut(Axis(0)) {
            for (i, value) in row.iter_mut().enumerate() {
                *value = (*value - self.mean[i]) / self.scale[i];
            }
        }
        out
    }

    pub fn mean(&self) -> &[f64] {
        &self.mean
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn standardized_columns_have_zero_mean_unit_variance() {
        let matrix = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let scaler = StandardScaler::fit(&matrix).unwrap();
        let scaled = scaler.transform_matrix(&matrix);

        for column in scaled.axis_iter(Axis(1)) {
            let mean = column.sum() / column.len() as f64;
            let var = column.iter().map(|v| (v - mean).powi(2)).sum::<f64>()
                / column.len() as f64;
            assert!(mean.abs() < 1e-12);
            assert!((var - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn constant_column_scales_by_one() {
        let matrix = array![[5.0, 1.0], [5.0, 2.0], [5.0, 3.0]];
        let scaler = StandardScaler::fit(&matrix).unwrap();
        assert_eq!(scaler.scale()[0], 1.0);
        let scaled = scaler.transform_matrix(&matrix);
        for row in scaled.axis_iter(Axis(0)) {
            assert_eq!(row[0], 0.0);
        }
    }

    #[test]
    fn empty_matrix_is_rejected() {
        let matrix = Array2::<f64>::zeros((0, 8));
        assert!(matches!(
            StandardScaler::fit(&matrix),
            Err(EncodingError::EmptyDataset)
        ));
    }

    #[test]
    fn refit_on_identical_matrix_is_idempotent() {
        let matrix = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let a = StandardScaler::fit(&matrix).unwrap();
        let b = StandardScaler::fit(&matrix).unwrap();
        assert_eq!(a, b);
    }
}
