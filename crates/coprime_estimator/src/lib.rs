//! # coprime_estimator: π from the Density of Coprime Pairs
//!
//! Counts the coprime ordered pairs in `[1, N] x [1, N]` and inverts the
//! identity `P(coprime) → 6/π²` to estimate π.
//!
//! This crate provides:
//! - [`EstimatorConfig`] and its builder (`config`)
//! - Exhaustive pair counting with a choice of [`Enumeration`] (`counter`)
//! - Timed estimation via [`PiEstimator`] and the plain [`estimate_pi`] (`estimator`)
//!
//! Execution is single-threaded and synchronous.
//!
//! ## Example
//!
//! ```rust
//! use coprime_estimator::{EstimatorConfig, PiEstimator};
//!
//! let config = EstimatorConfig::builder().bound(2).build().unwrap();
//! let estimate = PiEstimator::new(config).estimate();
//!
//! assert_eq!(estimate.coprime_pairs, 3);
//! assert_eq!(estimate.total_pairs, 4);
//! assert!((estimate.pi - 8.0_f64.sqrt()).abs() < 1e-12);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod counter;
pub mod error;
pub mod estimator;

pub use config::{Enumeration, EstimatorConfig, EstimatorConfigBuilder};
pub use counter::{count_coprime_pairs, CoprimeCount};
pub use error::EstimatorError;
pub use estimator::{estimate_pi, PiEstimate, PiEstimator};

// Kernel selection is part of this crate's configuration surface.
pub use coprime_core::math::gcd::GcdKernel;
