//! Integer helpers shared by the candidate search and the scoring engine.

use core::ops::Rem;
use num_traits::Zero;

/// Greatest common divisor of two non-negative integers by Euclidean
/// remainder reduction. `gcd(0, 0)` is 0.
pub fn gcd<T: Zero + Rem<Output = T> + Copy>(a: T, b: T) -> T {
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Test whether `numer / denom` is in lowest terms.
#[inline]
pub fn is_coprime(numer: i64, denom: i64) -> bool {
    gcd(numer.unsigned_abs(), denom.unsigned_abs()) == 1
}

/// Number of decimal digits of `n`, counting `0` as one digit
#[inline]
pub fn decimal_digits(n: u64) -> u32 {
    n.checked_ilog10().map_or(1, |d| d + 1)
}
