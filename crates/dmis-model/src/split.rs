//! Seeded dataset splitting: shuffle split and k-fold indices.

use ndarray::{Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Shuffled train/test index split. The same seed always produces the same
/// partition, so model variants compare on identical data.
pub fn train_test_split(n: usize, test_fraction: f64, seed: u64) -> (Vec<usize>, Vec<usize>) {
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let test_len = ((n as f64) * test_fraction).round() as usize;
    let test = order[..test_len].to_vec();
    let train = order[test_len..].to_vec();
    (train, test)
}

/// K contiguous folds over a shuffled index range; each element is
/// (train_indices, validation_indices).
pub fn k_fold(n: usize, k: usize, seed: u64) -> Vec<(Vec<usize>, Vec<usize>)> {
    let mut order: Vec<usize> = (0..n).collect();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    order.shuffle(&mut rng);

    let mut folds = Vec::with_capacity(k);
    for fold in 0..k {
        let start = fold * n / k;
        let end = (fold + 1) * n / k;
        let validation = order[start..end].to_vec();
        let train: Vec<usize> = order[..start]
            .iter()
            .chain(&order[end..])
            .copied()
            .collect();
        folds.push((train, validation));
    }
    folds
}

/// Materialize the selected rows of a feature matrix.
pub fn take_rows(matrix: &Array2<f64>, indices: &[usize]) -> Array2<f64> {
    matrix.select(Axis(0), indices)
}

/// Materialize the selected targets.
pub fn take_targets(targets: &Array1<f64>, indices: &[usize]) -> Array1<f64> {
    Array1::from_iter(indices.iter().map(|&i| targets[i]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_is_disjoint_and_exhaustive() {
        let (train, test) = train_test_split(100, 0.2, 42);
        assert_eq!(test.len(), 20);
        assert_eq!(train.len(), 80);
        let mut all: Vec<usize> = train.iter().chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn split_is_seed_deterministic() {
        assert_eq!(train_test_split(50, 0.2, 1), train_test_split(50, 0.2, 1));
        assert_ne!(train_test_split(50, 0.2, 1), train_test_split(50, 0.2, 2));
    }

    #[test]
    fn folds_cover_every_index_once() {
        let folds = k_fold(53, 5, 9);
        assert_eq!(folds.len(), 5);
        let mut seen: Vec<usize> = folds
            .iter()
            .flat_map(|(_, validation)| validation.clone())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..53).collect::<Vec<_>>());
        for (train, validation) in &folds {
            assert_eq!(train.len() + validation.len(), 53);
        }
    }
}
