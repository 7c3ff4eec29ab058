//! `dmis`: train disaster cost models and serve predictions over REST.

mod api;
mod scenarios;
mod train;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use dmis_core::ServiceConfig;
use dmis_model::CostPredictor;
use dmis_store::ArtifactStore;
use dmis_synthetic::DatasetStats;

use crate::api::AppState;

#[derive(Parser)]
#[command(name = "dmis", version, about = "Disaster cost estimation service")]
struct Cli {
    /// Optional TOML config file; command-line flags override its values.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a synthetic dataset, fit the pipeline and models, persist artifacts.
    Train {
        /// Number of synthetic events to generate.
        #[arg(long)]
        samples: Option<usize>,
        /// Seed for the synthetic generator's random stream.
        #[arg(long)]
        seed: Option<u64>,
        /// Directory for persisted artifacts.
        #[arg(long)]
        artifacts: Option<PathBuf>,
    },
    /// Load persisted artifacts and serve the REST API.
    Serve {
        /// Directory holding persisted artifacts.
        #[arg(long)]
        artifacts: Option<PathBuf>,
        /// Socket address to bind.
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => ServiceConfig::load(path)?,
        None => ServiceConfig::default(),
    };

    match cli.command {
        Command::Train {
            samples,
            seed,
            artifacts,
        } => {
            if let Some(samples) = samples {
                config.samples = samples;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(dir) = artifacts {
                config.artifacts_dir = dir;
            }
            train::run(&config)
        }
        Command::Serve { artifacts, bind } => {
            if let Some(dir) = artifacts {
                config.artifacts_dir = dir;
            }
            if let Some(bind) = bind {
                config.bind_addr = bind;
            }
            serve(&config).await
        }
    }
}

/// Load artifacts and run the REST façade. Any missing or corrupt
/// artifact is fatal at startup; nothing is lazily trained.
async fn serve(config: &ServiceConfig) -> anyhow::Result<()> {
    let store = ArtifactStore::new(&config.artifacts_dir);
    let pipeline = store
        .load_pipeline()
        .context("cannot load feature pipeline; run `dmis train` first")?;
    let models = store
        .load_models()
        .context("cannot load models; run `dmis train` first")?;
    let records = store
        .load_dataset()
        .context("cannot load dataset; run `dmis train` first")?;

    anyhow::ensure!(
        models.contains_key(&config.default_model),
        "default model {:?} is not among the persisted models",
        config.default_model
    );

    let predictor = CostPredictor::new(pipeline, models, config.default_model.clone());
    let stats = DatasetStats::compute(&records);
    info!(
        models = predictor.model_names().len(),
        records = stats.total_records,
        "artifacts loaded"
    );

    let router = api::create_router(AppState::new(predictor, stats));
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "serving");
    axum::serve(listener, router).await?;
    Ok(())
}
