//! The three cost formulas. Each is pure apart from draws taken from the
//! injected random source, and each returns a `CostEstimate` carrying the
//! realized severity and a named component breakdown.

mod drought;
mod rainfall;
mod winds;

pub use drought::drought_cost;
pub use rainfall::heavy_rainfall_cost;
pub use winds::strong_winds_cost;
