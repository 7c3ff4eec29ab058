use rand::Rng;

use dmis_core::models::CostEstimate;

use crate::bands::strong_winds;
use crate::severity::classify_severity;

/// Cost of a strong winds event.
///
/// Severity is derived from house damage and affected population only; the
/// missing rainfall term caps the averaged score below the Severe cutoff,
/// so the severe repair band is unreachable here.
/// Total = houses_damaged × repair_per_house +
/// affected_households × relief_per_household, with the repair band selected
/// by severity and the relief band fixed.
pub fn strong_winds_cost(
    rng: &mut impl Rng,
    houses_damaged: u32,
    affected_households: u32,
    affected_population: u32,
) -> CostEstimate {
    let severity = classify_severity(houses_damaged, affected_population, 0.0);

    let repair_per_house = strong_winds::repair_band(severity).draw(rng);
    let relief_per_household = strong_winds::RELIEF_PER_HOUSEHOLD.draw(rng);

    let repair = f64::from(houses_damaged) * repair_per_house;
    let relief = f64::from(affected_households) * relief_per_household;

    CostEstimate::from_components(severity, [("repair", repair), ("relief", relief)])
}
