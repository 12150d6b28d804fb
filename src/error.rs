use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced while loading and building a level.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid level: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to read level: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
