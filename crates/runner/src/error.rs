//! Error types for the runner crate

use limitup_ports::PanelError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Panel error: {0}")]
    Panel(#[from] PanelError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported panel format: {0}")]
    UnsupportedFormat(String),
}

impl RunnerError {
    pub fn io(path: impl AsRef<std::path::Path>, source: std::io::Error) -> Self {
        RunnerError::Io {
            path: path.as_ref().display().to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
