use std::path::PathBuf;

/// Persistence errors for trained artifacts (models, encoders, scaler,
/// dataset). Absence or corruption surfaces as a load failure, never as
/// silent defaults; the serving façade treats these as fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {path}")]
    Missing { path: PathBuf },

    #[error("artifact {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("artifact I/O failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
