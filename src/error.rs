use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures at the edges of conversion: files, config, JSON and request
/// validation. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Failed to serialize blocks: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
