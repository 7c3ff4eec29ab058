//! The training pipeline: generate, fit, evaluate, persist.

use anyhow::Context;
use tracing::info;

use dmis_core::ServiceConfig;
use dmis_features::FeaturePipeline;
use dmis_model::{ModelTrainer, TrainerParams};
use dmis_store::{ArtifactStore, TrainingManifest};
use dmis_synthetic::{DatasetStats, SyntheticGenerator};

/// Run one full training pass and persist every artifact.
pub fn run(config: &ServiceConfig) -> anyhow::Result<()> {
    info!(
        samples = config.samples,
        seed = config.seed,
        "generating synthetic dataset"
    );
    let records = SyntheticGenerator::new(config.seed).generate(config.samples);
    let stats = DatasetStats::compute(&records);
    info!(
        records = stats.total_records,
        mean_cost = stats.cost_statistics.mean,
        max_cost = stats.cost_statistics.max,
        "dataset generated"
    );

    let fitted = FeaturePipeline::fit(&records).context("feature pipeline fit failed")?;

    let params = TrainerParams {
        seed: config.seed,
        ..TrainerParams::default()
    };
    let set = ModelTrainer::new(params)
        .fit_all(&fitted.matrix, &fitted.targets)
        .context("model training failed")?;

    for report in &set.reports {
        info!(
            model = %report.model,
            test_mae = report.test_mae,
            test_rmse = report.test_rmse,
            test_r2 = report.test_r2,
            cv_r2_mean = report.cv_r2_mean,
            cv_r2_std = report.cv_r2_std,
            "model evaluated"
        );
    }
    if let Some(best) = set.best() {
        info!(model = %best.model, test_r2 = best.test_r2, "best held-out fit");
    }

    let store = ArtifactStore::new(&config.artifacts_dir);
    store
        .save_pipeline(&fitted.pipeline)
        .context("cannot persist feature pipeline")?;
    store.save_models(&set.models).context("cannot persist models")?;
    store
        .save_dataset(&records)
        .context("cannot persist dataset")?;
    let manifest = TrainingManifest::new(config.samples, config.seed, set.reports.clone());
    store
        .save_manifest(&manifest)
        .context("cannot persist training manifest")?;
    info!(dir = %config.artifacts_dir.display(), "artifacts persisted");

    Ok(())
}
