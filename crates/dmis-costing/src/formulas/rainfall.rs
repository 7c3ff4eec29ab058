use rand::Rng;

use dmis_core::models::CostEstimate;

use crate::bands::heavy_rainfall;
use crate::severity::classify_severity;

/// Cost of a heavy rainfall event.
///
/// Severity additionally incorporates rainfall intensity. Total =
/// houses_damaged × house_repair + one infrastructure draw + population ×
/// relief_per_person. The infrastructure draw is independent of house
/// damage.
pub fn heavy_rainfall_cost(
    rng: &mut impl Rng,
    houses_damaged: u32,
    affected_population: u32,
    rainfall_intensity: f64,
) -> CostEstimate {
    let severity = classify_severity(houses_damaged, affected_population, rainfall_intensity);

    let repair_per_house = heavy_rainfall::repair_band(severity).draw(rng);
    let infrastructure = heavy_rainfall::infrastructure_band(severity).draw(rng);
    let relief_per_person = heavy_rainfall::RELIEF_PER_PERSON.draw(rng);

    let repair = f64::from(houses_damaged) * repair_per_house;
    let relief = f64::from(affected_population) * relief_per_person;

    CostEstimate::from_components(
        severity,
        [
            ("repair", repair),
            ("infrastructure", infrastructure),
            ("relief", relief),
        ],
    )
}
