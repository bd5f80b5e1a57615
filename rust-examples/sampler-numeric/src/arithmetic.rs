//! Arithmetic with domain checks.
//!
//! Each operation rejects inputs outside its domain with
//! [`ToolkitError::InvalidArgument`] and is otherwise a plain loop over `i64`.
//!
//! # Overflow
//!
//! Results are not range-checked. `factorial` and `power` wrap on overflow
//! (two's complement), so e.g. `factorial(21)` is meaningless but never panics.
//! Only results within `i64` range carry arithmetic meaning.

use sampler_common::{Result, ToolkitError};
use tracing::debug;

/// Rejects `value` for `operation` and records the rejection.
fn reject(operation: &'static str, value: i64, reason: &'static str) -> ToolkitError {
    let err = ToolkitError::invalid_argument(operation, value, reason);
    debug!(%err, "rejected argument");
    err
}

/// Factorial of `n` as an iterative product.
///
/// `0! = 1! = 1`; negative input is an error.
///
/// # Examples
/// ```
/// use sampler_numeric::arithmetic::factorial;
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// ```
pub fn factorial(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(reject(
            "factorial",
            n,
            "factorial is not defined for negative numbers",
        ));
    }
    Ok((2..=n).fold(1_i64, i64::wrapping_mul))
}

/// Primality test using trial division up to `floor(sqrt(n))`.
/// O(sqrt(n)) time complexity.
///
/// # Examples
/// ```
/// use sampler_numeric::arithmetic::is_prime;
/// assert_eq!(is_prime(17), Ok(true));
/// assert_eq!(is_prime(15), Ok(false));
/// assert!(is_prime(1).is_err());
/// ```
pub fn is_prime(n: i64) -> Result<bool> {
    if n < 2 {
        return Err(reject("is_prime", n, "prime check requires number >= 2"));
    }

    // `d <= n / d` is `d * d <= n` without overflowing near i64::MAX.
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return Ok(false);
        }
        divisor += 1;
    }
    Ok(true)
}

/// `base` raised to `exponent` by repeated multiplication.
///
/// `power(b, 0) == 1` for every `b`, including 0.
///
/// # Examples
/// ```
/// use sampler_numeric::arithmetic::power;
/// assert_eq!(power(2, 10), Ok(1024));
/// assert_eq!(power(0, 0), Ok(1));
/// assert!(power(2, -1).is_err());
/// ```
pub fn power(base: i64, exponent: i64) -> Result<i64> {
    if exponent < 0 {
        return Err(reject("power", exponent, "negative exponents not supported"));
    }
    Ok((0..exponent).fold(1_i64, |acc, _| acc.wrapping_mul(base)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_factorial_table() {
        let cases = [(0, 1), (1, 1), (3, 6), (5, 120), (7, 5040), (10, 3_628_800)];
        for (n, want) in cases {
            assert_eq!(factorial(n), Ok(want), "factorial({n})");
        }
    }

    #[test]
    fn test_factorial_negative() {
        let err = factorial(-1).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.reason(), "factorial is not defined for negative numbers");
    }

    #[test]
    fn test_factorial_wraps_instead_of_panicking() {
        // 20! is the largest factorial that fits in i64.
        assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
        assert_eq!(factorial(21), Ok(2_432_902_008_176_640_000_i64.wrapping_mul(21)));
    }

    #[test]
    fn test_is_prime_table() {
        let cases = [(2, true), (3, true), (4, false), (17, true), (20, false), (25, false)];
        for (n, want) in cases {
            assert_eq!(is_prime(n), Ok(want), "is_prime({n})");
        }
    }

    #[test]
    fn test_is_prime_rejects_below_two() {
        for n in [1, 0, -5] {
            let err = is_prime(n).unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(err.reason(), "prime check requires number >= 2");
        }
    }

    #[test]
    fn test_primes_below_fifty() {
        let primes: Vec<i64> = (2..50).filter(|&n| is_prime(n) == Ok(true)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }

    #[test]
    fn test_is_prime_large_inputs() {
        // 2^63 - 1 = 7 * 73 * 127 * 337 * 92737 * 649657
        assert_eq!(is_prime(i64::MAX), Ok(false));
        assert_eq!(is_prime(1_000_000_007), Ok(true));
    }

    #[test]
    fn test_power_table() {
        assert_eq!(power(2, 3), Ok(8));
        assert_eq!(power(5, 0), Ok(1));
        assert_eq!(power(0, 5), Ok(0));
        assert_eq!(power(1, 10), Ok(1));
        assert_eq!(power(-2, 3), Ok(-8));
    }

    #[test]
    fn test_power_negative_exponent() {
        let err = power(2, -1).unwrap_err();
        assert_eq!(
            err,
            ToolkitError::invalid_argument("power", -1, "negative exponents not supported")
        );
    }

    proptest! {
        #[test]
        fn prop_power_zero_exponent_is_one(base in any::<i64>()) {
            prop_assert_eq!(power(base, 0), Ok(1));
        }

        #[test]
        fn prop_power_one_is_identity(base in any::<i64>()) {
            prop_assert_eq!(power(base, 1), Ok(base));
        }

        #[test]
        fn prop_factorial_recurrence(n in 1i64..20) {
            prop_assert_eq!(factorial(n), factorial(n - 1).map(|prev| n * prev));
        }
    }
}
