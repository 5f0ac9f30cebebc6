//! Error types for the CLI.

use thiserror::Error;

use coprime_estimator::EstimatorError;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Estimator rejected its parameters
    #[error("Estimator error: {0}")]
    Estimator(#[from] EstimatorError),

    /// Writing results failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
