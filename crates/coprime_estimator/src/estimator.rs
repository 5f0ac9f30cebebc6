//! Timed π estimation.
//!
//! [`PiEstimator`] runs the exhaustive scan described by an
//! [`EstimatorConfig`], inverts the coprime density identity and records how
//! long the whole computation took.

use std::time::{Duration, Instant};

use tracing::debug;

use coprime_core::math::identity::pi_from_coprime_probability;
use coprime_core::types::GridBound;

use crate::config::EstimatorConfig;
use crate::counter::count_coprime_pairs;
use crate::error::EstimatorError;

/// Outcome of one estimation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    /// Grid bound `N`.
    pub bound: GridBound,
    /// Ordered coprime pairs found.
    pub coprime_pairs: u64,
    /// All ordered pairs, `N²`.
    pub total_pairs: u64,
    /// Empirical coprime probability.
    pub probability: f64,
    /// Estimated value of π, `sqrt(6 / probability)`.
    pub pi: f64,
    /// Wall-clock time spent counting and inverting, measured with [`Instant`].
    pub elapsed: Duration,
}

impl PiEstimate {
    /// Absolute distance from [`std::f64::consts::PI`].
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.pi - std::f64::consts::PI).abs()
    }
}

/// Exhaustive coprime-pair π estimator.
///
/// # Examples
///
/// ```rust
/// use coprime_estimator::{EstimatorConfig, PiEstimator};
///
/// let estimator = PiEstimator::new(EstimatorConfig::with_bound(1).unwrap());
/// let estimate = estimator.estimate();
///
/// assert_eq!(estimate.probability, 1.0);
/// assert!((estimate.pi - 6.0_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct PiEstimator {
    config: EstimatorConfig,
}

impl PiEstimator {
    /// Creates an estimator for a validated configuration.
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Scans the grid and returns the estimate along with its timing.
    pub fn estimate(&self) -> PiEstimate {
        let start = Instant::now();

        let count = count_coprime_pairs(
            self.config.bound(),
            self.config.gcd_kernel(),
            self.config.enumeration(),
        );
        let probability = count.probability();
        let pi = pi_from_coprime_probability(probability);

        let elapsed = start.elapsed();
        debug!(probability, pi, elapsed_secs = elapsed.as_secs_f64(), "Estimate complete");

        PiEstimate {
            bound: count.bound,
            coprime_pairs: count.coprime_pairs,
            total_pairs: count.total_pairs,
            probability,
            pi,
            elapsed,
        }
    }
}

/// Estimates π from the grid `[1, n] x [1, n]` with the reference scan.
///
/// # Errors
///
/// Returns `EstimatorError::Core` when `n` is zero or greater than
/// `MAX_BOUND`; an empty grid has no coprime probability.
///
/// # Examples
///
/// ```
/// use coprime_estimator::estimate_pi;
///
/// let pi = estimate_pi(2).unwrap();
/// assert!((pi - 8.0_f64.sqrt()).abs() < 1e-12);
/// assert!(estimate_pi(0).is_err());
/// ```
pub fn estimate_pi(n: u64) -> Result<f64, EstimatorError> {
    let config = EstimatorConfig::with_bound(n)?;
    Ok(PiEstimator::new(config).estimate().pi)
}
