use rand::Rng;

use dmis_core::constants::DROUGHT_BASELINE_MONTHS;
use dmis_core::models::CostEstimate;
use dmis_core::Severity;

use crate::bands::drought;
use crate::severity::classify_severity;

/// Cost of a drought event.
///
/// Severity is computed from affected population alone. Food support scales
/// linearly with duration against the six-month baseline; water support is
/// per household; agriculture recovery is a band draw for Severe and a fixed
/// allocation otherwise.
pub fn drought_cost(
    rng: &mut impl Rng,
    affected_households: u32,
    affected_population: u32,
    duration_months: u32,
) -> CostEstimate {
    let severity = classify_severity(0, affected_population, 0.0);

    let food_per_person = drought::FOOD_SUPPORT_PER_PERSON.draw(rng);
    let food = f64::from(affected_population)
        * food_per_person
        * (f64::from(duration_months) / DROUGHT_BASELINE_MONTHS);

    let water = f64::from(affected_households) * drought::WATER_SUPPORT_PER_HOUSEHOLD.draw(rng);

    let agriculture = match severity {
        Severity::Severe => drought::AGRICULTURE_RECOVERY_SEVERE.draw(rng),
        Severity::Moderate => drought::AGRICULTURE_RECOVERY_MODERATE,
        Severity::Low => drought::AGRICULTURE_RECOVERY_LOW,
    };

    CostEstimate::from_components(
        severity,
        [("food", food), ("water", water), ("agriculture", agriculture)],
    )
}
