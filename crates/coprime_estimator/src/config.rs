//! Estimator configuration.
//!
//! This module provides configuration types and builders for the exhaustive
//! coprime-pair scan.

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use coprime_core::math::gcd::GcdKernel;
use coprime_core::types::GridBound;

use super::error::EstimatorError;

/// Order in which the pair grid is enumerated.
///
/// Every variant visits the whole grid `[1, N] x [1, N]` and produces the
/// same coprime count.
///
/// - `Full`: Every ordered pair `(a, b)` is tested
/// - `Symmetric`: Only `a < b` is tested and each hit counts twice, since
///   `gcd(a, b) = gcd(b, a)`; the diagonal is tested separately
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Enumeration {
    /// All `N²` ordered pairs.
    #[default]
    Full,

    /// Upper triangle plus diagonal; roughly halves the GCD calls.
    Symmetric,
}

impl Enumeration {
    /// All available enumerations.
    pub const ALL: [Enumeration; 2] = [Enumeration::Full, Enumeration::Symmetric];

    /// Lowercase name used on the command line and in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Enumeration::Full => "full",
            Enumeration::Symmetric => "symmetric",
        }
    }
}

impl FromStr for Enumeration {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" => Ok(Enumeration::Full),
            "symmetric" | "sym" => Ok(Enumeration::Symmetric),
            _ => Err(EstimatorError::InvalidParameter {
                name: "enumeration",
                value: format!("unknown enumeration '{}'. Supported: full, symmetric", s),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for Enumeration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Enumeration::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Enumeration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Estimator configuration.
///
/// Immutable configuration specifying the grid and how it is scanned.
/// Use [`EstimatorConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use coprime_estimator::{Enumeration, EstimatorConfig, GcdKernel};
///
/// let config = EstimatorConfig::builder()
///     .bound(10_000)
///     .gcd_kernel(GcdKernel::Binary)
///     .enumeration(Enumeration::Symmetric)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.bound().get(), 10_000);
/// assert_eq!(config.gcd_kernel(), GcdKernel::Binary);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EstimatorConfig {
    bound: GridBound,
    gcd_kernel: GcdKernel,
    enumeration: Enumeration,
}

impl EstimatorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EstimatorConfigBuilder {
        EstimatorConfigBuilder::default()
    }

    /// Configuration for the given bound with the reference kernel and enumeration.
    pub fn with_bound(n: u64) -> Result<Self, EstimatorError> {
        Self::builder().bound(n).build()
    }

    /// Returns the grid bound `N`.
    #[inline]
    pub fn bound(&self) -> GridBound {
        self.bound
    }

    /// Returns the GCD kernel.
    #[inline]
    pub fn gcd_kernel(&self) -> GcdKernel {
        self.gcd_kernel
    }

    /// Returns the grid enumeration.
    #[inline]
    pub fn enumeration(&self) -> Enumeration {
        self.enumeration
    }
}

/// Builder for [`EstimatorConfig`].
///
/// The bound is required; kernel and enumeration fall back to their defaults.
#[derive(Clone, Debug, Default)]
pub struct EstimatorConfigBuilder {
    bound: Option<u64>,
    gcd_kernel: GcdKernel,
    enumeration: Enumeration,
}

impl EstimatorConfigBuilder {
    /// Sets the grid bound `N`, in `[1, MAX_BOUND]`.
    #[inline]
    pub fn bound(mut self, n: u64) -> Self {
        self.bound = Some(n);
        self
    }

    /// Sets the GCD kernel.
    #[inline]
    pub fn gcd_kernel(mut self, gcd_kernel: GcdKernel) -> Self {
        self.gcd_kernel = gcd_kernel;
        self
    }

    /// Sets the grid enumeration.
    #[inline]
    pub fn enumeration(mut self, enumeration: Enumeration) -> Self {
        self.enumeration = enumeration;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if:
    /// - `bound` not set
    /// - `bound` is zero or greater than `MAX_BOUND`
    pub fn build(self) -> Result<EstimatorConfig, EstimatorError> {
        let n = self.bound.ok_or(EstimatorError::InvalidParameter {
            name: "bound",
            value: "must be specified".to_string(),
        })?;

        Ok(EstimatorConfig {
            bound: GridBound::new(n)?,
            gcd_kernel: self.gcd_kernel,
            enumeration: self.enumeration,
        })
    }
}
