//! Exhaustive coprime-pair counting.
//!
//! The scan is the hot path of the whole program: `O(N² log N)` GCD work
//! with `O(1)` auxiliary space. The counter is `u64` so that `N²` for any
//! accepted bound fits without overflow.

use tracing::debug;

use coprime_core::math::gcd::GcdKernel;
use coprime_core::types::GridBound;

use crate::config::Enumeration;

/// Result of scanning the grid `[1, N] x [1, N]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CoprimeCount {
    /// Grid bound `N`.
    pub bound: GridBound,
    /// Ordered pairs with `gcd(a, b) = 1`.
    pub coprime_pairs: u64,
    /// All ordered pairs, `N²`.
    pub total_pairs: u64,
}

impl CoprimeCount {
    /// Empirical coprime probability, `coprime_pairs / N²` in floating point.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.coprime_pairs as f64 / self.total_pairs as f64
    }
}

/// Counts coprime ordered pairs in `[1, N] x [1, N]`.
///
/// # Examples
///
/// ```
/// use coprime_estimator::{count_coprime_pairs, Enumeration, GcdKernel};
/// use coprime_core::types::GridBound;
///
/// let bound = GridBound::new(2).unwrap();
/// let count = count_coprime_pairs(bound, GcdKernel::Euclidean, Enumeration::Full);
///
/// // (1,1), (1,2), (2,1)
/// assert_eq!(count.coprime_pairs, 3);
/// assert_eq!(count.probability(), 0.75);
/// ```
pub fn count_coprime_pairs(
    bound: GridBound,
    kernel: GcdKernel,
    enumeration: Enumeration,
) -> CoprimeCount {
    debug!(%bound, %kernel, %enumeration, "Scanning pair grid");

    let coprime_pairs = match enumeration {
        Enumeration::Full => count_full(bound.get(), kernel),
        Enumeration::Symmetric => count_symmetric(bound.get(), kernel),
    };

    let count = CoprimeCount {
        bound,
        coprime_pairs,
        total_pairs: bound.total_pairs(),
    };
    debug!(
        coprime_pairs = count.coprime_pairs,
        total_pairs = count.total_pairs,
        "Pair grid scanned"
    );
    count
}

fn count_full(n: u64, kernel: GcdKernel) -> u64 {
    let mut cnt = 0_u64;
    for a in 1..=n {
        for b in 1..=n {
            if kernel.is_coprime(a, b) {
                cnt += 1;
            }
        }
    }
    cnt
}

fn count_symmetric(n: u64, kernel: GcdKernel) -> u64 {
    let mut cnt = 0_u64;
    for a in 1..=n {
        if kernel.is_coprime(a, a) {
            cnt += 1;
        }
        for b in (a + 1)..=n {
            if kernel.is_coprime(a, b) {
                cnt += 2;
            }
        }
    }
    cnt
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn count(n: u64, kernel: GcdKernel, enumeration: Enumeration) -> CoprimeCount {
        count_coprime_pairs(GridBound::new(n).unwrap(), kernel, enumeration)
    }

    #[test]
    fn test_single_pair_grid() {
        let c = count(1, GcdKernel::Euclidean, Enumeration::Full);
        assert_eq!(c.coprime_pairs, 1);
        assert_eq!(c.total_pairs, 1);
        assert_eq!(c.probability(), 1.0);
    }

    #[test]
    fn test_two_by_two_grid() {
        for kernel in GcdKernel::ALL {
            for enumeration in Enumeration::ALL {
                let c = count(2, kernel, enumeration);
                assert_eq!(c.coprime_pairs, 3, "{kernel}/{enumeration}");
                assert_eq!(c.total_pairs, 4);
            }
        }
    }

    #[test]
    fn test_known_counts() {
        // Ordered coprime pairs in [1, N]^2 = 2 * sum(phi(k), k = 1..N) - 1.
        assert_eq!(count(10, GcdKernel::Euclidean, Enumeration::Full).coprime_pairs, 63);
        assert_eq!(count(100, GcdKernel::Euclidean, Enumeration::Full).coprime_pairs, 6087);
    }

    #[test]
    fn test_strategies_agree() {
        for n in [1, 2, 3, 7, 16, 50, 128, 301] {
            let reference = count(n, GcdKernel::Euclidean, Enumeration::Full);
            for kernel in GcdKernel::ALL {
                for enumeration in Enumeration::ALL {
                    assert_eq!(
                        count(n, kernel, enumeration),
                        reference,
                        "N = {n}, {kernel}/{enumeration}"
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn test_counter_bounds(n in 1u64..200) {
            let c = count(n, GcdKernel::Binary, Enumeration::Symmetric);
            prop_assert!(c.coprime_pairs >= 1);
            prop_assert!(c.coprime_pairs <= n * n);
            prop_assert_eq!(c.total_pairs, n * n);
            prop_assert!(c.probability() > 0.0 && c.probability() <= 1.0);
        }
    }
}
