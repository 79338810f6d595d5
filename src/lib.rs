//! `num-approx` approximates a floating point number by small irreducible
//! fractions.
//!
//! Candidates come from the convergents of the continued fraction expansion
//! of the number and from a bounded search over small denominators. Every
//! candidate gets a set of scores, and the list is ranked under a
//! [SortPolicy] and truncated.
//!
//! ```
//! use num_approx::{approximate, Approximator, SortPolicy};
//!
//! let best = approximate(3.14159265).unwrap();
//! assert_eq!((best[0].numerator(), best[0].denominator()), (355, 113));
//!
//! let approx = Approximator::default().with_sort_policy(SortPolicy::Comprehensive);
//! let best = approx.approximate(3.14159265).unwrap();
//! assert_eq!(best[0].candidate.to_string(), "22/7");
//! ```

mod approx;
pub mod candidate;
pub mod cont_frac;
mod config;
mod error;
pub mod integer;
mod rank;
pub mod score;
pub mod traits;

pub use approx::{
    approximate, approximate_with, parse_input, set_sort_policy, sort_policy, Approximator,
};
pub use candidate::Candidate;
pub use cont_frac::ContinuedFraction;
pub use config::ApproxConfig;
pub use error::{Error, Result};
pub use rank::{rank, SortPolicy};
pub use score::ScoredCandidate;
pub use traits::{Approximation, RationalApproximation};
