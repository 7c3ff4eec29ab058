use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use dmis_core::errors::ArtifactError;
use dmis_core::models::DisasterRecord;
use dmis_features::FeaturePipeline;
use dmis_model::TrainedModel;

use crate::manifest::TrainingManifest;

const PIPELINE_FILE: &str = "feature_pipeline.json";
const MODEL_INDEX_FILE: &str = "models.json";
const DATASET_FILE: &str = "disaster_costs_synthetic.json";
const MANIFEST_FILE: &str = "training_manifest.json";

/// Directory-rooted artifact store.
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist the fitted feature pipeline (encoders + scaler).
    pub fn save_pipeline(&self, pipeline: &FeaturePipeline) -> Result<(), ArtifactError> {
        self.write_json(PIPELINE_FILE, pipeline)
    }

    /// Restore the fitted feature pipeline.
    pub fn load_pipeline(&self) -> Result<FeaturePipeline, ArtifactError> {
        self.read_json(PIPELINE_FILE)
    }

    /// Persist every trained model, one blob per name, plus a name index.
    pub fn save_models(&self, models: &BTreeMap<String, TrainedModel>) -> Result<(), ArtifactError> {
        let names: Vec<&String> = models.keys().collect();
        self.write_json(MODEL_INDEX_FILE, &names)?;
        for (name, model) in models {
            self.write_json(&model_file(name), model)?;
        }
        info!(count = models.len(), root = %self.root.display(), "models persisted");
        Ok(())
    }

    /// Restore every model named by the index. A missing or unreadable blob
    /// for an indexed name fails the whole load.
    pub fn load_models(&self) -> Result<BTreeMap<String, TrainedModel>, ArtifactError> {
        let names: Vec<String> = self.read_json(MODEL_INDEX_FILE)?;
        let mut models = BTreeMap::new();
        for name in names {
            let model: TrainedModel = self.read_json(&model_file(&name))?;
            models.insert(name, model);
        }
        Ok(models)
    }

    /// Persist the training dataset in the exchange row format.
    pub fn save_dataset(&self, records: &[DisasterRecord]) -> Result<(), ArtifactError> {
        self.write_json(DATASET_FILE, &records)
    }

    /// Restore the training dataset.
    pub fn load_dataset(&self) -> Result<Vec<DisasterRecord>, ArtifactError> {
        self.read_json(DATASET_FILE)
    }

    /// Persist the record of the training run that produced the artifacts.
    pub fn save_manifest(&self, manifest: &TrainingManifest) -> Result<(), ArtifactError> {
        self.write_json(MANIFEST_FILE, manifest)
    }

    /// Restore the training run record.
    pub fn load_manifest(&self) -> Result<TrainingManifest, ArtifactError> {
        self.read_json(MANIFEST_FILE)
    }

    fn write_json<T: Serialize>(&self, file: &str, value: &T) -> Result<(), ArtifactError> {
        let path = self.root.join(file);
        std::fs::create_dir_all(&self.root).map_err(|source| ArtifactError::Io {
            path: self.root.clone(),
            source,
        })?;
        let raw = serde_json::to_vec_pretty(value).map_err(|err| ArtifactError::Corrupt {
            path: path.clone(),
            reason: err.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|source| ArtifactError::Io { path, source })
    }

    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<T, ArtifactError> {
        let path = self.root.join(file);
        let raw = std::fs::read(&path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ArtifactError::Missing { path: path.clone() }
            } else {
                ArtifactError::Io {
                    path: path.clone(),
                    source,
                }
            }
        })?;
        serde_json::from_slice(&raw).map_err(|err| ArtifactError::Corrupt {
            path,
            reason: err.to_string(),
        })
    }
}

/// Blob name for one model: lowercased, spaces to underscores.
fn model_file(name: &str) -> String {
    format!("{}.json", name.to_lowercase().replace(' ', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmis_model::{ModelTrainer, Regressor, TrainerParams};
    use dmis_synthetic::SyntheticGenerator;

    fn fitted_artifacts() -> (FeaturePipeline, BTreeMap<String, TrainedModel>, Vec<DisasterRecord>) {
        let records = SyntheticGenerator::new(42).generate(150);
        let fitted = FeaturePipeline::fit(&records).unwrap();
        let params = TrainerParams {
            forest_trees: 5,
            boosting_rounds: 10,
            cv_folds: 3,
            ..TrainerParams::default()
        };
        let set = ModelTrainer::new(params)
            .fit_all(&fitted.matrix, &fitted.targets)
            .unwrap();
        (fitted.pipeline, set.models, records)
    }

    #[test]
    fn pipeline_round_trips_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let (pipeline, _, _) = fitted_artifacts();

        store.save_pipeline(&pipeline).unwrap();
        let loaded = store.load_pipeline().unwrap();
        assert_eq!(loaded, pipeline);
    }

    #[test]
    fn models_round_trip_with_identical_predictions() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let (_, models, _) = fitted_artifacts();

        store.save_models(&models).unwrap();
        let loaded = store.load_models().unwrap();
        assert_eq!(loaded.len(), models.len());

        let row = [0.1, -0.4, 1.2, 0.0, -1.0, 0.3, 0.9, -0.2];
        for (name, model) in &models {
            let restored = &loaded[name];
            assert_eq!(model.predict_row(&row), restored.predict_row(&row));
        }
    }

    #[test]
    fn dataset_round_trips_with_costs_intact() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let (_, _, records) = fitted_artifacts();

        store.save_dataset(&records).unwrap();
        let loaded = store.load_dataset().unwrap();
        assert_eq!(loaded.len(), records.len());
        for (a, b) in loaded.iter().zip(&records) {
            assert_eq!(a.estimated_cost_maloti, b.estimated_cost_maloti);
            assert_eq!(a.district, b.district);
        }
    }

    #[test]
    fn absent_artifacts_surface_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        assert!(matches!(
            store.load_pipeline(),
            Err(ArtifactError::Missing { .. })
        ));
        assert!(matches!(
            store.load_models(),
            Err(ArtifactError::Missing { .. })
        ));
    }

    #[test]
    fn corrupt_blob_surfaces_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        std::fs::write(dir.path().join("feature_pipeline.json"), b"not json").unwrap();
        assert!(matches!(
            store.load_pipeline(),
            Err(ArtifactError::Corrupt { .. })
        ));
    }

    #[test]
    fn manifest_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());
        let manifest = TrainingManifest::new(500, 42, Vec::new());

        store.save_manifest(&manifest).unwrap();
        let loaded = store.load_manifest().unwrap();
        assert_eq!(loaded.trained_at, manifest.trained_at);
        assert_eq!(loaded.samples, 500);
        assert_eq!(loaded.seed, 42);
    }

    #[test]
    fn model_blob_names_follow_the_selector() {
        assert_eq!(model_file("Random Forest"), "random_forest.json");
        assert_eq!(model_file("Linear Regression"), "linear_regression.json");
    }
}
