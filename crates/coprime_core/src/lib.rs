//! # coprime_core: Number-Theory Foundation for the Coprime π Estimator
//!
//! ## Foundation Layer Role
//!
//! coprime_core is the bottom layer of the workspace, providing:
//! - Greatest common divisor kernels: Euclidean and binary (`math::gcd`)
//! - The coprimality density identity P(coprime) = 6/π² (`math::identity`)
//! - The validated grid bound `GridBound` (`types::bound`)
//! - Error type: `CoreError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other workspace crates, with minimal
//! external dependencies:
//! - num-traits: Generic floating-point arithmetic for the identity helpers
//! - thiserror: Error derivation
//! - serde: Deserialisation of kernel selection from configuration files
//!
//! ## Usage Examples
//!
//! ```rust
//! use coprime_core::math::gcd::{euclidean_gcd, GcdKernel};
//! use coprime_core::math::identity::pi_from_coprime_probability;
//! use coprime_core::types::GridBound;
//!
//! assert_eq!(euclidean_gcd(12, 18), 6);
//! assert!(GcdKernel::Binary.is_coprime(17, 5));
//!
//! let bound = GridBound::new(2).unwrap();
//! assert_eq!(bound.total_pairs(), 4);
//!
//! // Three of the four pairs in [1, 2] x [1, 2] are coprime.
//! let pi = pi_from_coprime_probability(0.75_f64);
//! assert!((pi - 8.0_f64.sqrt()).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
