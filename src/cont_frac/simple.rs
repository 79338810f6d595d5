//! Implementation of finite simple continued fractions

use super::block::Block;
use crate::traits::{Approximation, RationalApproximation};
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{CheckedAdd, CheckedMul, Float, NumCast, Signed, Zero};
use std::fmt;
use tracing::trace;

/// This struct represents a finite simple continued fraction `a0 + 1/(a1 + 1/ (a2 + ...))`
/// Where a0 is a signed integer and a1, a2, .. are positive integers
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuedFraction<T> {
    /// Coefficients, the sign of the number is carried by the first one
    coeffs: Vec<T>,

    /// Whether the expansion stopped before the remainder vanished
    truncated: bool,
}

impl<T> ContinuedFraction<T> {
    #[inline]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs[..]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        self.coeffs.len() == 1 && !self.truncated
    }

    /// Returns true if the expansion was cut off by the term cap or by
    /// a coefficient that does not fit in `T`
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

impl<T: Integer + Signed + NumCast + Clone> ContinuedFraction<T> {
    /// Expand a floating point number into at most `max_terms` coefficients.
    ///
    /// The magnitude `|f|` is expanded and the sign is then applied to the first
    /// coefficient only, so a negative non-integer `f` is not reconstructed
    /// exactly. The expansion stops early once the fractional remainder is
    /// below `tolerance`. Zero expands to no coefficient at all.
    ///
    /// Return None if the integer part of `f` does not fit in `T`, or if `f`
    /// is not finite.
    pub fn from_float<F: Float>(f: F, max_terms: usize, tolerance: F) -> Option<Self> {
        if !f.is_finite() {
            return None;
        }

        let mut coeffs = Vec::with_capacity(max_terms.min(64));
        let mut truncated = true;
        let mut current = f.abs();
        while coeffs.len() < max_terms {
            if current.is_zero() {
                truncated = false;
                break;
            }

            let ipart = current.floor();
            match <T as NumCast>::from(ipart) {
                Some(a) => coeffs.push(a),
                None if coeffs.is_empty() => return None,
                None => {
                    trace!(terms = coeffs.len(), "coefficient overflow, expansion cut");
                    break;
                }
            }

            current = current - ipart;
            if current.abs() < tolerance {
                truncated = false;
                break;
            }
            current = current.recip();
        }

        if f < F::zero() {
            if let Some(a0) = coeffs.first_mut() {
                *a0 = -a0.clone();
            }
        }

        Some(ContinuedFraction { coeffs, truncated })
    }
}

/// Iterator of convergents of a [ContinuedFraction]
pub struct Convergents<'a, T> {
    coeffs: std::slice::Iter<'a, T>,
    block: Block<T>,
}

impl<'a, T: Integer + Clone + CheckedAdd + CheckedMul> Iterator for Convergents<'a, T> {
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.checked_rmove(a)?;
        debug_assert!(!q.is_zero(), "convergent with zero denominator");
        self.block.update(p.clone(), q.clone());

        // consecutive convergents satisfy p_k q_(k-1) - p_(k-1) q_k = ±1,
        // so they are already in lowest terms
        Some(Ratio::new_raw(p, q))
    }
}

impl<T: Integer + Clone + CheckedAdd + CheckedMul> ContinuedFraction<T> {
    /// Returns an iterator of the convergents `p_k / q_k`, one per prefix of the
    /// coefficients. The iterator will stop if all coefficients are consumed, or
    /// numeric overflow happened.
    pub fn convergents(&self) -> Convergents<T> {
        Convergents {
            coeffs: self.coeffs.iter(),
            block: Block::identity(),
        }
    }
}

impl<T: Integer + Clone + CheckedAdd + CheckedMul> RationalApproximation<T>
    for ContinuedFraction<T>
{
    fn approx_rational(&self, limit: &T) -> Approximation<Ratio<T>> {
        let mut convergents = self.convergents();
        let mut last_conv = match convergents.next() {
            Some(v) => v,
            None => return Approximation::Exact(Ratio::zero()),
        };
        if last_conv.denom() > limit {
            return Approximation::Approximated(last_conv);
        }

        let mut consumed = 1;
        for conv in convergents {
            if conv.denom() > limit {
                return Approximation::Approximated(last_conv);
            }
            last_conv = conv;
            consumed += 1;
        }

        if self.truncated || consumed < self.coeffs.len() {
            Approximation::Approximated(last_conv)
        } else {
            Approximation::Exact(last_conv)
        }
    }
}

impl<T: Integer + Clone> From<Ratio<T>> for ContinuedFraction<T> {
    /// Exact expansion of a rational number with floor division, so that
    /// every coefficient after the first is positive
    fn from(r: Ratio<T>) -> Self {
        let mut coeffs = Vec::new();
        let (mut n, mut d): (T, T) = r.into();

        loop {
            let (quo, rem) = n.div_mod_floor(&d);
            coeffs.push(quo);
            if rem.is_zero() {
                break;
            }
            n = d;
            d = rem;
        }

        ContinuedFraction {
            coeffs,
            truncated: false,
        }
    }
}

impl<T: fmt::Display> fmt::Display for ContinuedFraction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.coeffs.iter();
        match iter.next() {
            None => return write!(f, "[]"),
            Some(a0) => write!(f, "[{}", a0)?,
        }

        if let Some(a1) = iter.next() {
            write!(f, "; {}", a1)?;
            for v in iter {
                write!(f, ", {}", v)?;
            }
        }
        if self.truncated {
            write!(f, ", ...")?;
        }
        write!(f, "]")
    }
}
