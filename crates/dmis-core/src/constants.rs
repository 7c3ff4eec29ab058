/// DMIS system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Severity score thresholds (strict `>` comparisons).
pub const HOUSES_DAMAGED_SEVERE: u32 = 200;
pub const HOUSES_DAMAGED_MODERATE: u32 = 50;
pub const POPULATION_SEVERE: u32 = 10_000;
pub const POPULATION_MODERATE: u32 = 5_000;
pub const RAINFALL_SEVERE: f64 = 0.7;
pub const RAINFALL_MODERATE: f64 = 0.4;

/// Averaged-score cutoffs (`>=` comparisons).
pub const SEVERITY_AVG_SEVERE: f64 = 2.5;
pub const SEVERITY_AVG_MODERATE: f64 = 1.8;

/// Drought food support is normalized to a six-month baseline.
pub const DROUGHT_BASELINE_MONTHS: f64 = 6.0;

/// Fixed uncertainty margin applied to point estimates.
/// An approximation contract, not a statistical confidence interval.
pub const UNCERTAINTY_MARGIN: f64 = 0.15;

/// Model selector used when a request does not name one.
pub const DEFAULT_MODEL: &str = "Random Forest";

/// Feature order consumed by every trained model. Must never change.
pub const FEATURE_COLUMNS: [&str; 8] = [
    "Affected_Population",
    "Affected_Households",
    "Houses_Damaged",
    "Duration_Days",
    "Disaster_Type",
    "District",
    "Severity",
    "Immediate_Needs",
];

/// Number of features per encoded row.
pub const FEATURE_COUNT: usize = 8;
