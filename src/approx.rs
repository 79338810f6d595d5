//! The full approximation pipeline: expansion, search, aggregation,
//! scoring and ranking.

use crate::candidate::generate;
use crate::config::ApproxConfig;
use crate::error::{Error, Result};
use crate::rank::{rank, SortPolicy};
use crate::score::{score_all, ScoredCandidate};
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::debug;

/// Sort policy used by [approximate] and [approximate_with]
static SORT_POLICY: AtomicU8 = AtomicU8::new(SortPolicy::Error as u8);

/// Select the sort policy for subsequent calls to [approximate]
pub fn set_sort_policy(policy: SortPolicy) {
    SORT_POLICY.store(policy as u8, Ordering::Relaxed);
}

/// The sort policy currently used by [approximate]
pub fn sort_policy() -> SortPolicy {
    SortPolicy::from_u8(SORT_POLICY.load(Ordering::Relaxed)).unwrap_or_default()
}

/// Approximate `x` with the default bounds, ranked under the
/// process-wide sort policy
pub fn approximate(x: f64) -> Result<Vec<ScoredCandidate>> {
    evaluate(x, &ApproxConfig::default(), sort_policy())
}

/// Approximate `x` with custom bounds, ranked under the process-wide
/// sort policy
pub fn approximate_with(x: f64, config: &ApproxConfig) -> Result<Vec<ScoredCandidate>> {
    config.validate()?;
    evaluate(x, config, sort_policy())
}

/// Parse user supplied text into a number for [approximate].
///
/// Surrounding whitespace is ignored; empty, non-numeric and non-finite
/// text is rejected.
pub fn parse_input(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(Error::InvalidInput {
            input: text.to_string(),
        }),
    }
}

fn evaluate(x: f64, config: &ApproxConfig, policy: SortPolicy) -> Result<Vec<ScoredCandidate>> {
    if !x.is_finite() {
        return Err(Error::InvalidInput {
            input: x.to_string(),
        });
    }

    let candidates = generate(x, config);
    let total = candidates.len();
    let ranked = rank(score_all(candidates), policy, config.max_results);
    debug!(x, %policy, candidates = total, returned = ranked.len(), "approximated");

    Ok(ranked)
}

/// An approximation pipeline with its own bounds and sort policy,
/// independent of the process-wide policy.
#[derive(Debug, Clone, Default)]
pub struct Approximator {
    config: ApproxConfig,
    policy: SortPolicy,
}

impl Approximator {
    pub fn new(config: ApproxConfig) -> Result<Self> {
        config.validate()?;
        Ok(Approximator {
            config,
            policy: SortPolicy::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &ApproxConfig {
        &self.config
    }

    #[inline]
    pub fn sort_policy(&self) -> SortPolicy {
        self.policy
    }

    pub fn set_sort_policy(&mut self, policy: SortPolicy) {
        self.policy = policy;
    }

    pub fn with_sort_policy(mut self, policy: SortPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn approximate(&self, x: f64) -> Result<Vec<ScoredCandidate>> {
        evaluate(x, &self.config, self.policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[ScoredCandidate]) -> Vec<(i64, i64)> {
        list.iter().map(|c| (c.numerator(), c.denominator())).collect()
    }

    #[test]
    fn parse_input_test() {
        assert_eq!(parse_input("0.5"), Ok(0.5));
        assert_eq!(parse_input("  -3.25 \n"), Ok(-3.25));
        assert_eq!(parse_input("1e-3"), Ok(0.001));
        for bad in &["", "   ", "abc", "1/2", "NaN", "inf", "-infinity"] {
            assert_eq!(
                parse_input(bad),
                Err(Error::InvalidInput {
                    input: bad.to_string()
                })
            );
        }
    }

    #[test]
    fn approximator_half_test() {
        let approx = Approximator::default();
        let results = approx.approximate(0.5).unwrap();
        assert_eq!(pairs(&results[..1]), vec![(1, 2)]);
        assert_eq!(results[0].error(), 0.);
        assert!(results.len() <= 15);
    }

    #[test]
    fn approximator_pi_test() {
        let approx = Approximator::default();
        let results = approx.approximate(3.14159265).unwrap();
        let limit = (3.14159265f64 - 22. / 7.).abs();
        assert!(results.iter().any(|c| c.error() <= limit));
        assert_eq!(pairs(&results[..1]), vec![(355, 113)]);

        let approx = approx.with_sort_policy(SortPolicy::Denominator);
        let results = approx.approximate(3.14159265).unwrap();
        assert_eq!(pairs(&results[..2]), vec![(3, 1), (13, 4)]);
    }

    #[test]
    fn approximator_config_test() {
        let config = ApproxConfig::default()
            .with_brute_force_bound(5)
            .with_max_convergent_denominator(10)
            .with_max_results(3);
        let approx = Approximator::new(config).unwrap();
        let results = approx.approximate(3.14159265).unwrap();
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|c| c.denominator() <= 10));

        assert!(Approximator::new(ApproxConfig::default().with_max_terms(0)).is_err());
    }

    #[test]
    fn approximator_invalid_input_test() {
        let approx = Approximator::default();
        assert!(matches!(approx.approximate(f64::NAN), Err(Error::InvalidInput { .. })));
        assert!(matches!(
            approx.approximate(f64::NEG_INFINITY),
            Err(Error::InvalidInput { .. })
        ));
    }

    #[test]
    fn approximator_degenerate_test() {
        let approx = Approximator::default();

        let results = approx.approximate(0.).unwrap();
        assert_eq!(pairs(&results[..1]), vec![(0, 1)]);

        let results = approx.approximate(7.).unwrap();
        assert_eq!(pairs(&results[..1]), vec![(7, 1)]);
        assert!(results.iter().all(|c| c.denominator() >= 1));

        // the integer part does not fit, nothing to offer
        assert!(approx.approximate(1e300).unwrap().is_empty());
    }

    #[test]
    fn global_policy_test() {
        // the only test touching the process-wide policy
        assert_eq!(sort_policy(), SortPolicy::Error);
        let by_error = approximate(0.3).unwrap();

        set_sort_policy(SortPolicy::Denominator);
        assert_eq!(sort_policy(), SortPolicy::Denominator);
        let by_denom = approximate(0.3).unwrap();
        assert!(by_denom
            .windows(2)
            .all(|w| w[0].denominator() <= w[1].denominator()));
        assert_eq!(pairs(&by_error[..1]), vec![(3, 10)]);

        let config = ApproxConfig::default().with_max_results(4);
        assert_eq!(approximate_with(0.3, &config).unwrap().len(), 4);
        assert!(approximate_with(0.3, &config.clone().with_brute_force_bound(0)).is_err());

        // a term cap far past what an f64 expansion can use is still fine
        let results = approximate_with(0.5, &config.with_max_terms(usize::MAX)).unwrap();
        assert!(pairs(&results).contains(&(1, 2)));

        set_sort_policy(SortPolicy::Error);
    }
}
