//! Severity classification from raw event metrics.

use dmis_core::constants::{
    HOUSES_DAMAGED_MODERATE, HOUSES_DAMAGED_SEVERE, POPULATION_MODERATE, POPULATION_SEVERE,
    RAINFALL_MODERATE, RAINFALL_SEVERE, SEVERITY_AVG_MODERATE, SEVERITY_AVG_SEVERE,
};
use dmis_core::Severity;

/// Classify an event's severity from house damage, affected population, and
/// rainfall intensity.
///
/// Each input contributes an ordinal score of 1, 2, or 3 (strict `>`
/// thresholds); the average of the three scores maps to a tier with `>=`
/// cutoffs. Disaster types without a rainfall term pass 0.0, which
/// contributes the minimum score. Pure function: identical inputs always
/// yield identical output.
pub fn classify_severity(
    houses_damaged: u32,
    affected_population: u32,
    rainfall_intensity: f64,
) -> Severity {
    let houses_score = if houses_damaged > HOUSES_DAMAGED_SEVERE {
        3
    } else if houses_damaged > HOUSES_DAMAGED_MODERATE {
        2
    } else {
        1
    };

    let population_score = if affected_population > POPULATION_SEVERE {
        3
    } else if affected_population > POPULATION_MODERATE {
        2
    } else {
        1
    };

    let rainfall_score = if rainfall_intensity > RAINFALL_SEVERE {
        3
    } else if rainfall_intensity > RAINFALL_MODERATE {
        2
    } else {
        1
    };

    let avg = f64::from(houses_score + population_score + rainfall_score) / 3.0;

    if avg >= SEVERITY_AVG_SEVERE {
        Severity::Severe
    } else if avg >= SEVERITY_AVG_MODERATE {
        Severity::Moderate
    } else {
        Severity::Low
    }
}
