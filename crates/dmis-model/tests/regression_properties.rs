use dmis_model::regression::{RandomForest, RegressionTree, TreeParams};
use dmis_model::Regressor;
use ndarray::{Array1, Array2};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tree_predictions_stay_in_target_range(
        targets in prop::collection::vec(-1e6f64..1e6, 4..40),
    ) {
        let n = targets.len();
        let x = Array2::from_shape_fn((n, 2), |(i, j)| (i * 3 + j) as f64);
        let y = Array1::from_vec(targets.clone());
        let indices: Vec<usize> = (0..n).collect();
        let tree = RegressionTree::fit(&x, &y, &indices, &TreeParams::default());

        let lo = targets.iter().cloned().fold(f64::INFINITY, f64::min);
        let hi = targets.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        for i in 0..n {
            let p = tree.predict_row(&[(i * 3) as f64, (i * 3 + 1) as f64]);
            prop_assert!(p >= lo - 1e-9 && p <= hi + 1e-9);
        }
    }

    #[test]
    fn forest_is_deterministic_per_seed(
        targets in prop::collection::vec(0.0f64..1e6, 6..30),
        seed in any::<u64>(),
    ) {
        let n = targets.len();
        let x = Array2::from_shape_fn((n, 1), |(i, _)| i as f64);
        let y = Array1::from_vec(targets);
        let a = RandomForest::fit(&x, &y, 5, seed);
        let b = RandomForest::fit(&x, &y, 5, seed);
        for i in 0..n {
            prop_assert_eq!(a.predict_row(&[i as f64]), b.predict_row(&[i as f64]));
        }
    }
}
