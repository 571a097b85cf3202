//! Errors surfaced by the host runner.

use std::path::PathBuf;

use tablet::config::ConfigError;
use tablet::scene::SceneError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error("map was never presented to {0}")]
    NothingPresented(PathBuf),
}
