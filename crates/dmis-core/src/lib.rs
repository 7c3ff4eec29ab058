//! # dmis-core
//!
//! Foundation crate for the DMIS disaster cost forecasting system.
//! Defines all types, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod disaster;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::ServiceConfig;
pub use disaster::{DisasterType, District, Severity};
pub use errors::{DmisError, DmisResult};
pub use models::{CostEstimate, DisasterRecord, Prediction, PredictionRequest};
