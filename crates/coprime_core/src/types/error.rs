//! Error types for structured error handling.
//!
//! This module provides:
//! - `CoreError`: Errors from grid bound validation and kernel parsing

use thiserror::Error;

/// Foundation-layer errors.
///
/// # Variants
/// - `InvalidBound`: Grid bound outside `[1, MAX_BOUND]`
/// - `UnknownKernel`: Unrecognised GCD kernel name
///
/// # Examples
/// ```
/// use coprime_core::types::CoreError;
///
/// let err = CoreError::InvalidBound(0);
/// assert_eq!(
///     format!("{}", err),
///     "Invalid grid bound 0: must be in range [1, 4294967295]"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Grid bound is zero, or so large that `N²` overflows the pair counter.
    #[error("Invalid grid bound {0}: must be in range [1, {max}]", max = crate::types::MAX_BOUND)]
    InvalidBound(u64),

    /// GCD kernel name not recognised.
    #[error("Unknown GCD kernel: {0}. Supported: euclidean, binary")]
    UnknownKernel(String),
}
