//! Error types for the estimation engine.
//!
//! Configuration errors occur at build time when parameters are missing or
//! invalid; a built estimator cannot fail.

use coprime_core::types::CoreError;
use thiserror::Error;

/// Configuration error for the π estimator.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EstimatorError {
    /// Rejected by the foundation layer (e.g. a zero grid bound).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}
