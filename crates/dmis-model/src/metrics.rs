//! Regression evaluation metrics.

use ndarray::Array1;

/// Mean absolute error.
pub fn mae(truth: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).abs())
        .sum::<f64>()
        / truth.len() as f64
}

/// Root mean squared error.
pub fn rmse(truth: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    (truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).powi(2))
        .sum::<f64>()
        / truth.len() as f64)
        .sqrt()
}

/// Coefficient of determination. A constant truth vector yields 0.0 rather
/// than dividing by zero.
pub fn r2(truth: &Array1<f64>, predicted: &Array1<f64>) -> f64 {
    let mean = truth.sum() / truth.len() as f64;
    let ss_tot: f64 = truth.iter().map(|t| (t - mean).powi(2)).sum();
    if ss_tot == 0.0 {
        return 0.0;
    }
    let ss_res: f64 = truth
        .iter()
        .zip(predicted)
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    1.0 - ss_res / ss_tot
}
