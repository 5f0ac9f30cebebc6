//! Greatest common divisor kernels.
//!
//! Both kernels operate on `u64`, so negative inputs cannot be expressed.
//! They agree on every input, including the zero cases:
//! `gcd(a, 0) = a`, `gcd(0, b) = b` and `gcd(0, 0) = 0`.
//!
//! - [`euclidean_gcd`]: Repeated remainder-taking
//! - [`binary_gcd`]: Stein's algorithm (shift and subtract, no division)

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

use crate::types::error::CoreError;

/// Computes the greatest common divisor using the Euclidean algorithm.
///
/// Repeatedly replaces `(a, b)` with `(b, a mod b)` until `b` reaches zero.
/// When called with `b = 0` no iteration is performed and `a` is returned.
///
/// # Examples
///
/// ```
/// use coprime_core::math::gcd::euclidean_gcd;
///
/// assert_eq!(euclidean_gcd(12, 18), 6);
/// assert_eq!(euclidean_gcd(17, 5), 1);
/// assert_eq!(euclidean_gcd(42, 0), 42);
/// ```
#[inline]
pub fn euclidean_gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Computes the greatest common divisor using the binary (Stein's) algorithm.
///
/// Common factors of two are removed with `trailing_zeros` and restored at
/// the end; the odd parts are reduced by subtraction.
///
/// # Examples
///
/// ```
/// use coprime_core::math::gcd::binary_gcd;
///
/// assert_eq!(binary_gcd(100, 10), 10);
/// assert_eq!(binary_gcd(1071, 462), 21);
/// assert_eq!(binary_gcd(0, 9), 9);
/// ```
#[inline]
pub fn binary_gcd(mut a: u64, mut b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    if b == 0 {
        return a;
    }

    let shift = (a | b).trailing_zeros();
    a >>= a.trailing_zeros();

    loop {
        b >>= b.trailing_zeros();
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        b -= a;
        if b == 0 {
            break;
        }
    }

    a << shift
}

/// GCD kernel used when scanning the pair grid.
///
/// Every kernel returns the same value for the same inputs; the choice only
/// affects throughput.
///
/// # Examples
///
/// ```
/// use coprime_core::math::gcd::GcdKernel;
///
/// let kernel: GcdKernel = "binary".parse().unwrap();
/// assert_eq!(kernel, GcdKernel::Binary);
/// assert_eq!(kernel.gcd(12, 18), 6);
/// assert_eq!(GcdKernel::default(), GcdKernel::Euclidean);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GcdKernel {
    /// Remainder-based Euclidean algorithm.
    #[default]
    Euclidean,
    /// Shift-and-subtract binary algorithm.
    Binary,
}

impl GcdKernel {
    /// All available kernels.
    pub const ALL: [GcdKernel; 2] = [GcdKernel::Euclidean, GcdKernel::Binary];

    /// Computes `gcd(a, b)` with this kernel.
    #[inline]
    pub fn gcd(self, a: u64, b: u64) -> u64 {
        match self {
            GcdKernel::Euclidean => euclidean_gcd(a, b),
            GcdKernel::Binary => binary_gcd(a, b),
        }
    }

    /// Returns `true` when `a` and `b` share no divisor other than 1.
    #[inline]
    pub fn is_coprime(self, a: u64, b: u64) -> bool {
        self.gcd(a, b) == 1
    }

    /// Lowercase name used on the command line and in configuration files.
    pub fn as_str(&self) -> &'static str {
        match self {
            GcdKernel::Euclidean => "euclidean",
            GcdKernel::Binary => "binary",
        }
    }
}

impl FromStr for GcdKernel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "euclidean" | "euclid" => Ok(GcdKernel::Euclidean),
            "binary" | "stein" => Ok(GcdKernel::Binary),
            _ => Err(CoreError::UnknownKernel(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for GcdKernel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        GcdKernel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for GcdKernel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        for kernel in GcdKernel::ALL {
            assert_eq!(kernel.gcd(12, 18), 6, "{kernel}");
            assert_eq!(kernel.gcd(17, 5), 1, "{kernel}");
            assert_eq!(kernel.gcd(100, 10), 10, "{kernel}");
            assert_eq!(kernel.gcd(7, 7), 7, "{kernel}");
            assert_eq!(kernel.gcd(1071, 462), 21, "{kernel}");
        }
    }

    #[test]
    fn test_zero_operands() {
        for kernel in GcdKernel::ALL {
            assert_eq!(kernel.gcd(5, 0), 5);
            assert_eq!(kernel.gcd(0, 5), 5);
            assert_eq!(kernel.gcd(0, 0), 0);
        }
    }

    #[test]
    fn test_large_operands() {
        assert_eq!(euclidean_gcd(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(binary_gcd(u64::MAX, u64::MAX), u64::MAX);
        assert_eq!(binary_gcd(1 << 63, 1 << 40), 1 << 40);
        assert_eq!(euclidean_gcd(1 << 63, 1 << 40), 1 << 40);
    }

    #[test]
    fn test_exhaustive_small_grid() {
        // gcd divides both and the cofactors are coprime, so nothing larger divides both.
        for a in 1..=1000_u64 {
            for b in 1..=1000_u64 {
                let g = euclidean_gcd(a, b);
                assert_eq!(a % g, 0);
                assert_eq!(b % g, 0);
                assert_eq!(euclidean_gcd(a / g, b / g), 1);
                assert_eq!(binary_gcd(a, b), g);
            }
        }
    }

    #[test]
    fn test_no_larger_common_divisor() {
        for a in 1..=60_u64 {
            for b in 1..=60_u64 {
                let g = euclidean_gcd(a, b);
                let largest = (1..=a.min(b))
                    .rev()
                    .find(|d| a % d == 0 && b % d == 0)
                    .unwrap();
                assert_eq!(g, largest, "gcd({a}, {b})");
            }
        }
    }

    #[test]
    fn test_identities() {
        for a in 1..=500_u64 {
            assert_eq!(euclidean_gcd(a, a), a);
            assert_eq!(euclidean_gcd(a, 1), 1);
            assert_eq!(binary_gcd(a, a), a);
            assert_eq!(binary_gcd(1, a), 1);
        }
    }

    #[test]
    fn test_is_coprime() {
        assert!(GcdKernel::Euclidean.is_coprime(1, 1));
        assert!(GcdKernel::Euclidean.is_coprime(8, 15));
        assert!(!GcdKernel::Binary.is_coprime(2, 2));
        assert!(!GcdKernel::Binary.is_coprime(21, 14));
    }

    #[test]
    fn test_kernel_parse_and_display() {
        assert_eq!("euclidean".parse::<GcdKernel>().unwrap(), GcdKernel::Euclidean);
        assert_eq!("Euclid".parse::<GcdKernel>().unwrap(), GcdKernel::Euclidean);
        assert_eq!("BINARY".parse::<GcdKernel>().unwrap(), GcdKernel::Binary);
        assert_eq!("stein".parse::<GcdKernel>().unwrap(), GcdKernel::Binary);
        assert_eq!(GcdKernel::Binary.to_string(), "binary");

        let err = "lehmer".parse::<GcdKernel>().unwrap_err();
        assert_eq!(err, CoreError::UnknownKernel("lehmer".to_string()));
    }

    #[test]
    fn test_kernel_deserialize_matches_parse() {
        use serde::de::value::{Error as ValueError, StrDeserializer};
        use serde::de::IntoDeserializer;

        for (name, expected) in [
            ("euclidean", GcdKernel::Euclidean),
            ("Euclid", GcdKernel::Euclidean),
            ("Binary", GcdKernel::Binary),
            ("STEIN", GcdKernel::Binary),
        ] {
            let de: StrDeserializer<ValueError> = name.into_deserializer();
            assert_eq!(GcdKernel::deserialize(de).unwrap(), expected, "{name}");
        }

        let de: StrDeserializer<ValueError> = "lehmer".into_deserializer();
        let err = GcdKernel::deserialize(de).unwrap_err();
        assert!(err.to_string().contains("Unknown GCD kernel: lehmer"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        #[test]
        fn test_kernels_agree(a in 0u64..=u64::MAX, b in 0u64..=u64::MAX) {
            prop_assert_eq!(euclidean_gcd(a, b), binary_gcd(a, b));
        }

        #[test]
        fn test_symmetry(a in 1u64..1_000_000_000, b in 1u64..1_000_000_000) {
            prop_assert_eq!(euclidean_gcd(a, b), euclidean_gcd(b, a));
            prop_assert_eq!(binary_gcd(a, b), binary_gcd(b, a));
        }

        #[test]
        fn test_divides_both(a in 1u64..=u64::MAX, b in 1u64..=u64::MAX) {
            let g = binary_gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
            prop_assert_eq!(binary_gcd(a / g, b / g), 1);
        }
    }
}
