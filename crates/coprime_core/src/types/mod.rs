//! Core types for the coprime π estimator.
//!
//! - [`bound`]: The validated upper bound `N` of the pair grid
//! - [`error`]: Structured error type shared by upper layers

pub mod bound;
pub mod error;

pub use bound::{GridBound, MAX_BOUND};
pub use error::CoreError;
