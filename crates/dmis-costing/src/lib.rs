//! # dmis-costing
//!
//! Severity classification and the three disaster-specific cost formulas.
//! Formulas draw sub-costs from severity-selected bands; the random source
//! is injected by the caller, so deterministic replay means passing a
//! seeded generator.

pub mod bands;
pub mod formulas;
pub mod severity;

pub use bands::Band;
pub use formulas::{drought_cost, heavy_rainfall_cost, strong_winds_cost};
pub use severity::classify_severity;
