//! Error types for tweet-weight-core.
//!
//! Parsing a text never fails; a disallowed character or an over-budget text
//! is reported through [`ParsedResult::valid`](crate::ParsedResult). The only
//! fallible surface is configuration.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// A weighting configuration file could not be parsed.
    #[error("invalid weighting configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// A weighting configuration file could not be read.
    #[error("failed to read weighting configuration {path}: {source}")]
    WeightingFile {
        /// The resolved path that failed to read.
        path: camino::Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The weighting configuration is structurally valid but unusable.
    #[error("invalid weighting configuration: {0}")]
    InvalidWeighting(String),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;
