//! Scores attached to every candidate.
//!
//! All scores are pure functions of `(numerator, denominator, error)` and are
//! computed for every candidate whatever the sort policy is:
//!
//! - **precision rank**: number of leading decimal digits the fraction gets
//!   right, `floor(-log10(error))`, or [EXACT_RANK] for an exact match. It is
//!   negative when the error exceeds one.
//! - **comprehensive score**: precision score weighted by a logistic curve on
//!   the denominator centered at 50, in `[0, 10]`.
//! - **length precision score**: precision score divided by
//!   `1 + 2 * exp(len - 4)`, where `len` is the digit count of numerator and
//!   denominator together, so it drops quickly past four digits.

use crate::candidate::Candidate;
use crate::integer::decimal_digits;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision rank given to a candidate with zero error
pub const EXACT_RANK: i32 = 10;

/// A candidate with all of its scores
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredCandidate {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub candidate: Candidate,
    pub comprehensive_score: f64,
    pub length_precision_score: f64,
    pub precision_rank: i32,
    pub total_digit_length: u32,
}

impl ScoredCandidate {
    pub fn new(candidate: Candidate) -> Self {
        let Candidate {
            numerator,
            denominator,
            error,
        } = candidate;

        ScoredCandidate {
            candidate,
            comprehensive_score: comprehensive_score(error, denominator),
            length_precision_score: length_precision_score(numerator, denominator, error),
            precision_rank: precision_rank(error),
            total_digit_length: total_digit_length(numerator, denominator),
        }
    }

    #[inline]
    pub fn numerator(&self) -> i64 {
        self.candidate.numerator
    }

    #[inline]
    pub fn denominator(&self) -> i64 {
        self.candidate.denominator
    }

    #[inline]
    pub fn error(&self) -> f64 {
        self.candidate.error
    }
}

impl From<Candidate> for ScoredCandidate {
    fn from(c: Candidate) -> Self {
        ScoredCandidate::new(c)
    }
}

/// Score a whole candidate set
pub fn score_all(candidates: Vec<Candidate>) -> Vec<ScoredCandidate> {
    candidates.into_iter().map(ScoredCandidate::new).collect()
}

pub fn precision_rank(error: f64) -> i32 {
    if error == 0. {
        EXACT_RANK
    } else {
        // a positive error keeps the rank at or below 323
        (-error.log10()).floor() as i32
    }
}

/// Step function from precision rank to a score out of 10
pub fn precision_score(rank: i32) -> f64 {
    match rank {
        i32::MIN..=1 => 1.,
        2 => 3.,
        3 => 5.,
        4 => 8.,
        5 => 9.,
        _ => 10.,
    }
}

/// Logistic weight of the denominator: close to 10 for small denominators,
/// 5 at 50, and decaying towards 0 past that
pub fn denominator_score(denominator: i64) -> f64 {
    10. / (1. + ((denominator as f64 - 50.) / 10.).exp())
}

pub fn comprehensive_score(error: f64, denominator: i64) -> f64 {
    precision_score(precision_rank(error)) * denominator_score(denominator) / 10.
}

pub fn length_precision_score(numerator: i64, denominator: i64, error: f64) -> f64 {
    let len = total_digit_length(numerator, denominator) as f64;
    precision_score(precision_rank(error)) / (1. + 2. * (len - 4.).exp())
}

/// Digits of `|numerator|` plus digits of `|denominator|`
pub fn total_digit_length(numerator: i64, denominator: i64) -> u32 {
    decimal_digits(numerator.unsigned_abs()) + decimal_digits(denominator.unsigned_abs())
}
