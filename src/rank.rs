use crate::error::Error;
use crate::score::ScoredCandidate;
use core::str::FromStr;
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rule used to order the scored candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[repr(u8)]
pub enum SortPolicy {
    /// Ascending error
    Error = 0,
    /// Ascending denominator
    Denominator = 1,
    /// Descending comprehensive score
    Comprehensive = 2,
    /// Descending length precision score
    LengthPrecision = 3,
    /// Descending precision rank, then ascending digit length
    PrecisionThenShorter = 4,
}

impl Default for SortPolicy {
    fn default() -> Self {
        SortPolicy::Error
    }
}

impl SortPolicy {
    pub const ALL: [SortPolicy; 5] = [
        SortPolicy::Error,
        SortPolicy::Denominator,
        SortPolicy::Comprehensive,
        SortPolicy::LengthPrecision,
        SortPolicy::PrecisionThenShorter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortPolicy::Error => "error",
            SortPolicy::Denominator => "denominator",
            SortPolicy::Comprehensive => "comprehensive",
            SortPolicy::LengthPrecision => "lengthPrecision",
            SortPolicy::PrecisionThenShorter => "precisionThenShorter",
        }
    }

    pub(crate) fn from_u8(v: u8) -> Option<Self> {
        SortPolicy::ALL.get(v as usize).copied()
    }

    /// Compare two candidates under this policy
    pub fn compare(&self, a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
        match self {
            SortPolicy::Error => a.error().total_cmp(&b.error()),
            SortPolicy::Denominator => a.denominator().cmp(&b.denominator()),
            SortPolicy::Comprehensive => b.comprehensive_score.total_cmp(&a.comprehensive_score),
            SortPolicy::LengthPrecision => {
                b.length_precision_score.total_cmp(&a.length_precision_score)
            }
            SortPolicy::PrecisionThenShorter => b
                .precision_rank
                .cmp(&a.precision_rank)
                .then(a.total_digit_length.cmp(&b.total_digit_length)),
        }
    }
}

impl fmt::Display for SortPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortPolicy::ALL
            .iter()
            .find(|p| p.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnknownSortPolicy { name: s.to_string() })
    }
}

/// Sort the candidates by `policy` and keep the first `max_results` of them
pub fn rank(
    mut candidates: Vec<ScoredCandidate>,
    policy: SortPolicy,
    max_results: usize,
) -> Vec<ScoredCandidate> {
    candidates.sort_unstable_by(|a, b| policy.compare(a, b));
    candidates.truncate(max_results);
    candidates
}
