//! Greatest common divisors on machine integers.
//!
//! Reduction works on unsigned magnitudes so that `i64::MIN` has a
//! representable absolute value.

/// Computes the greatest common divisor with Euclid's algorithm.
///
/// `gcd(x, 0) = x` and `gcd(x, y) = gcd(y, x mod y)` otherwise, so the
/// result is zero only when both inputs are zero.
#[must_use]
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Computes the greatest common divisor of widened magnitudes.
///
/// Cross products of two `i64` values are reduced with this before they are
/// narrowed back.
#[must_use]
pub const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
