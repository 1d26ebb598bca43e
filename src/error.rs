use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced at the edges of the import engine.
///
/// Extraction itself never fails on malformed content; these variants cover
/// boundary validation and the file/serialization helpers around it.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("no content provided")]
    NoContent,

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ImportError>;
