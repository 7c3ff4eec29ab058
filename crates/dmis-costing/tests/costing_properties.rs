use dmis_costing::{classify_severity, drought_cost, heavy_rainfall_cost, strong_winds_cost};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn winds_cost_is_non_negative(
        seed in any::<u64>(),
        houses in 0u32..2_000,
        households in 0u32..20_000,
        population in 0u32..100_000,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let estimate = strong_winds_cost(&mut rng, houses, households, population);
        prop_assert!(estimate.total >= 0.0);
        prop_assert!(estimate.total.is_finite());
    }

    #[test]
    fn rainfall_cost_is_non_negative(
        seed in any::<u64>(),
        houses in 0u32..2_000,
        population in 0u32..100_000,
        intensity in 0.0f64..1.0,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let estimate = heavy_rainfall_cost(&mut rng, houses, population, intensity);
        prop_assert!(estimate.total >= 0.0);
        prop_assert!(estimate.total.is_finite());
    }

    #[test]
    fn drought_cost_is_non_negative(
        seed in any::<u64>(),
        households in 0u32..20_000,
        population in 0u32..100_000,
        months in 0u32..24,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let estimate = drought_cost(&mut rng, households, population, months);
        prop_assert!(estimate.total >= 0.0);
        prop_assert!(estimate.total.is_finite());
    }

    #[test]
    fn breakdown_always_sums_to_total(
        seed in any::<u64>(),
        houses in 0u32..2_000,
        population in 0u32..100_000,
        intensity in 0.0f64..1.0,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let estimate = heavy_rainfall_cost(&mut rng, houses, population, intensity);
        let sum: f64 = estimate.breakdown.values().sum();
        prop_assert!((sum - estimate.total).abs() < 1e-6);
    }

    #[test]
    fn classification_is_deterministic(
        houses in 0u32..10_000,
        population in 0u32..200_000,
        intensity in 0.0f64..1.0,
    ) {
        prop_assert_eq!(
            classify_severity(houses, population, intensity),
            classify_severity(houses, population, intensity),
        );
    }

    #[test]
    fn severity_never_decreases_with_more_damage(
        houses in 0u32..10_000,
        extra in 0u32..10_000,
        population in 0u32..200_000,
        intensity in 0.0f64..1.0,
    ) {
        let base = classify_severity(houses, population, intensity);
        let worse = classify_severity(houses + extra, population, intensity);
        prop_assert!(worse >= base);
    }
}
