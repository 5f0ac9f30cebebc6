//! Number-theory kernels and the coprimality identity.
//!
//! - [`gcd`]: Euclidean and binary GCD over `u64`, selectable via [`gcd::GcdKernel`]
//! - [`identity`]: Conversion between coprime-pair density and π

pub mod gcd;
pub mod identity;
