//! # dmis-store
//!
//! Durable persistence for trained artifacts. Each artifact (fitted feature
//! pipeline, each trained model, the training dataset) is stored as one JSON
//! blob keyed by name; loading restores it parameter-for-parameter.
//! Corruption or absence surfaces as a typed load failure, never as silent
//! defaults.

mod manifest;
mod store;

pub use manifest::TrainingManifest;
pub use store::ArtifactStore;
