//! Service configuration, loadable from TOML with full defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the training pipeline and serving façade.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Directory holding persisted models, encoders, scaler, and dataset.
    pub artifacts_dir: PathBuf,
    /// Socket address the REST façade binds to.
    pub bind_addr: String,
    /// Model used when a request does not name one.
    pub default_model: String,
    /// Synthetic dataset size for training runs.
    pub samples: usize,
    /// Seed for the synthetic generator's random stream.
    pub seed: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from("artifacts"),
            bind_addr: "0.0.0.0:5000".to_string(),
            default_model: constants::DEFAULT_MODEL.to_string(),
            samples: 500,
            seed: 42,
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a TOML file. Missing keys fall back to
    /// defaults; an unreadable or unparseable file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            reason: source.to_string(),
        })
    }
}

/// Configuration load errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse config {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
}
