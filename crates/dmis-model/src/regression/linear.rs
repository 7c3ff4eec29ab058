//! Ordinary least squares via the normal equations.

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::Regressor;

/// Linear model: intercept + one coefficient per feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearRegression {
    intercept: f64,
    coefficients: Vec<f64>,
}

impl LinearRegression {
    /// Fit by solving (AᵀA)w = Aᵀy for the intercept-augmented design
    /// matrix A = [1 | X]. The system is tiny (features + 1 unknowns), so
    /// Gaussian elimination with partial pivoting is plenty.
    pub fn fit(x: &Array2<f64>, y: &Array1<f64>) -> Self {
        let n = x.nrows();
        let p = x.ncols() + 1;

        // Accumulate AᵀA and Aᵀy without materializing A.
        let mut ata = vec![vec![0.0f64; p]; p];
        let mut aty = vec![0.0f64; p];
        for i in 0..n {
            let mut row = Vec::with_capacity(p);
            row.push(1.0);
            row.extend(x.row(i).iter().copied());
            for j in 0..p {
                aty[j] += row[j] * y[i];
                for k in j..p {
                    ata[j][k] += row[j] * row[k];
                }
            }
        }
        for j in 0..p {
            for k in 0..j {
                ata[j][k] = ata[k][j];
            }
        }

        let weights = solve(ata, aty);
        Self {
            intercept: weights[0],
            coefficients: weights[1..].to_vec(),
        }
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }
}

impl Regressor for LinearRegression {
    fn predict_row(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, f)| c * f)
                .sum::<f64>()
    }
}

/// Gaussian elimination with partial pivoting. A numerically degenerate
/// pivot zeroes that unknown rather than propagating NaN; standardized
/// features keep the system well conditioned in practice.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Vec<f64> {
    let p = b.len();
    for col in 0..p {
        let pivot_row = (col..p)
            .max_by(|&i, &j| a[i][col].abs().total_cmp(&a[j][col].abs()))
            .unwrap_or(col);
        a.swap(col, pivot_row);
        b.swap(col, pivot_row);

        let pivot = a[col][col];
        if pivot.abs() < 1e-12 {
            continue;
        }
        for row in (col + 1)..p {
            let factor = a[row][col] / pivot;
            for k in col..p {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut w = vec![0.0f64; p];
    for col in (0..p).rev() {
        let mut acc = b[col];
        for k in (col + 1)..p {
            acc -= a[col][k] * w[k];
        }
        w[col] = if a[col][col].abs() < 1e-12 {
            0.0
        } else {
            acc / a[col][col]
        };
    }
    w
}
