//! Error types for branch-guard
//!
//! Only the configuration loader and the stdin adapter can fail. The engine
//! itself is total and never returns an error.

use thiserror::Error;

/// Errors raised while loading configuration or decoding hook input
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GuardError>;
