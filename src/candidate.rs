//! Candidate fractions and the two ways of generating them: convergents of
//! the continued fraction expansion, and a bounded search over small
//! denominators.

use crate::config::ApproxConfig;
use crate::cont_frac::ContinuedFraction;
use crate::integer::is_coprime;
use crate::traits::Approximation;
use num_rational::Ratio;
use num_traits::NumCast;
use std::collections::HashSet;
use std::fmt;
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An irreducible fraction `numerator / denominator` close to some target
/// number, together with its absolute distance from the target
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Candidate {
    pub numerator: i64,
    /// Always positive
    pub denominator: i64,
    /// `|x - numerator / denominator|`
    pub error: f64,
}

impl Candidate {
    /// Create a candidate approximating `x`
    pub fn new(x: f64, numerator: i64, denominator: i64) -> Self {
        debug_assert!(denominator > 0, "candidate with non-positive denominator");
        Candidate {
            numerator,
            denominator,
            error: (x - numerator as f64 / denominator as f64).abs(),
        }
    }

    /// The decimal value of the fraction
    #[inline]
    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        self.error == 0.
    }

    pub fn to_ratio(&self) -> Approximation<Ratio<i64>> {
        let r = Ratio::new_raw(self.numerator, self.denominator);
        if self.is_exact() {
            Approximation::Exact(r)
        } else {
            Approximation::Approximated(r)
        }
    }

    /// LaTeX markup of the fraction, e.g. `\frac{22}{7}`
    pub fn to_latex(&self) -> String {
        format!("\\frac{{{}}}{{{}}}", self.numerator, self.denominator)
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Candidates from the convergents of `cf`, skipping the ones whose
/// denominator exceeds `max_denominator`
pub fn from_convergents(
    x: f64,
    cf: &ContinuedFraction<i64>,
    max_denominator: i64,
) -> Vec<Candidate> {
    cf.convergents()
        .filter(|c| *c.denom() <= max_denominator)
        .map(|c| Candidate::new(x, *c.numer(), *c.denom()))
        .collect()
}

/// Try every denominator `d` in `1..=bound` with the nearest numerator
/// `round(x * d)`, keeping the pairs that are already in lowest terms.
///
/// Halves are rounded towards positive infinity.
pub fn brute_force(x: f64, bound: i64) -> Vec<Candidate> {
    let mut results = Vec::new();
    for d in 1..=bound {
        let scaled = x * d as f64;
        let n: i64 = match <i64 as NumCast>::from((scaled + 0.5).floor()) {
            Some(n) => n,
            None => continue,
        };

        if is_coprime(n, d) {
            results.push(Candidate::new(x, n, d));
        } else {
            trace!(numerator = n, denominator = d, "reducible pair skipped");
        }
    }
    results
}

/// Merge the convergents and the search results in that order, dropping
/// every repeated `(numerator, denominator)` pair after its first occurrence
pub fn aggregate(convergents: Vec<Candidate>, searched: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::with_capacity(convergents.len() + searched.len());
    convergents
        .into_iter()
        .chain(searched)
        .filter(|c| seen.insert((c.numerator, c.denominator)))
        .collect()
}

/// Generate the deduplicated candidates approximating `x`: the convergents
/// first, then the search results.
pub fn generate(x: f64, config: &ApproxConfig) -> Vec<Candidate> {
    let expansion = ContinuedFraction::<i64>::from_float(x, config.max_terms, config.tolerance);
    let convergents = match expansion {
        Some(cf) => {
            trace!(x, expansion = %cf, "continued fraction");
            from_convergents(x, &cf, config.max_convergent_denominator)
        }
        None => {
            trace!(x, "integer part out of range, no convergents");
            Vec::new()
        }
    };
    let searched = brute_force(x, config.brute_force_bound);

    aggregate(convergents, searched)
}
