use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bounds of the candidate search.
///
/// The convergent bound and the brute-force bound are independent; the
/// convergents usually reach much larger denominators than the search does.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ApproxConfig {
    /// Convergents with a larger denominator are dropped
    pub max_convergent_denominator: i64,
    /// Every denominator in `1..=brute_force_bound` is tried
    pub brute_force_bound: i64,
    /// Cap on the continued fraction coefficients
    pub max_terms: usize,
    /// Length of the ranked output
    pub max_results: usize,
    /// The expansion stops once the fractional remainder falls below this
    pub tolerance: f64,
}

impl Default for ApproxConfig {
    fn default() -> Self {
        ApproxConfig {
            max_convergent_denominator: 1000,
            brute_force_bound: 100,
            max_terms: 10,
            max_results: 15,
            tolerance: 1e-10,
        }
    }
}

impl ApproxConfig {
    pub fn with_max_convergent_denominator(mut self, bound: i64) -> Self {
        self.max_convergent_denominator = bound;
        self
    }

    pub fn with_brute_force_bound(mut self, bound: i64) -> Self {
        self.brute_force_bound = bound;
        self
    }

    pub fn with_max_terms(mut self, max_terms: usize) -> Self {
        self.max_terms = max_terms;
        self
    }

    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_convergent_denominator < 1 {
            return Err(Error::InvalidConfig {
                field: "max_convergent_denominator",
                reason: format!("must be positive, got {}", self.max_convergent_denominator),
            });
        }
        if self.brute_force_bound < 1 {
            return Err(Error::InvalidConfig {
                field: "brute_force_bound",
                reason: format!("must be positive, got {}", self.brute_force_bound),
            });
        }
        if self.max_terms == 0 {
            return Err(Error::InvalidConfig {
                field: "max_terms",
                reason: "at least one term is required".to_string(),
            });
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.) {
            return Err(Error::InvalidConfig {
                field: "tolerance",
                reason: format!("must be a positive finite number, got {}", self.tolerance),
            });
        }
        Ok(())
    }
}
