//! Upper bound of the pair grid.

use std::fmt;

use super::error::CoreError;

/// Largest accepted grid bound.
///
/// `MAX_BOUND²` still fits in the `u64` pair counter.
pub const MAX_BOUND: u64 = u32::MAX as u64;

/// Validated upper bound `N` of the grid `[1, N] x [1, N]`.
///
/// A bound of zero would leave the grid empty and the coprime probability
/// undefined, so it is rejected at construction.
///
/// # Examples
///
/// ```
/// use coprime_core::types::{CoreError, GridBound};
///
/// let bound = GridBound::new(10_000).unwrap();
/// assert_eq!(bound.get(), 10_000);
/// assert_eq!(bound.total_pairs(), 100_000_000);
///
/// assert_eq!(GridBound::new(0), Err(CoreError::InvalidBound(0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridBound(u64);

impl GridBound {
    /// Creates a bound, rejecting values outside `[1, MAX_BOUND]`.
    pub fn new(n: u64) -> Result<Self, CoreError> {
        if n == 0 || n > MAX_BOUND {
            return Err(CoreError::InvalidBound(n));
        }
        Ok(Self(n))
    }

    /// Returns `N`.
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    /// Number of ordered pairs in the grid, `N²`.
    #[inline]
    pub fn total_pairs(self) -> u64 {
        self.0 * self.0
    }
}

impl TryFrom<u64> for GridBound {
    type Error = CoreError;

    fn try_from(n: u64) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<GridBound> for u64 {
    fn from(bound: GridBound) -> Self {
        bound.0
    }
}

impl fmt::Display for GridBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
