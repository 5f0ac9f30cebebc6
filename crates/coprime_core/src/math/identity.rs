//! The coprimality density identity.
//!
//! The density of coprime pairs among `[1, N] x [1, N]` converges to
//! `6 / π²` as `N → ∞`. Inverting the identity turns an empirical coprime
//! probability into an estimate of π.
//!
//! All functions are generic over [`num_traits::Float`] so they work with
//! `f32` and `f64` alike.

use num_traits::Float;

// 6 = 2 * 3, built from `one()` so it is exact in every `Float` type.
#[inline]
fn six<T: Float>() -> T {
    let two = T::one() + T::one();
    two * (two + T::one())
}

/// Inverts the identity: `π ≈ sqrt(6 / p)`.
///
/// A probability of zero yields `+∞`; a NaN probability yields NaN. Callers
/// holding a validated grid never observe either, since `(1, 1)` is always
/// coprime.
///
/// # Examples
///
/// ```
/// use coprime_core::math::identity::pi_from_coprime_probability;
///
/// assert!((pi_from_coprime_probability(1.0_f64) - 6.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[inline]
pub fn pi_from_coprime_probability<T: Float>(probability: T) -> T {
    (six::<T>() / probability).sqrt()
}

/// Asymptotic coprime density for a given value of π: `6 / π²`.
///
/// # Examples
///
/// ```
/// use coprime_core::math::identity::coprime_probability_from_pi;
///
/// let density = coprime_probability_from_pi(std::f64::consts::PI);
/// assert!((density - 0.607_927_101_854_026_6).abs() < 1e-12);
/// ```
#[inline]
pub fn coprime_probability_from_pi<T: Float>(pi: T) -> T {
    six::<T>() / (pi * pi)
}
