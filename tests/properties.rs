use num_approx::candidate::generate;
use num_approx::integer::gcd;
use num_approx::{ApproxConfig, Approximator, ContinuedFraction, ScoredCandidate, SortPolicy};
use proptest::prelude::*;
use std::collections::HashSet;

fn is_reduced(numer: i64, denom: i64) -> bool {
    gcd(numer.unsigned_abs(), denom.unsigned_abs()) == 1
}

fn pair_set(list: &[ScoredCandidate]) -> HashSet<(i64, i64)> {
    list.iter().map(|c| (c.numerator(), c.denominator())).collect()
}

#[test]
fn half_is_exact_test() {
    let results = Approximator::default().approximate(0.5).unwrap();
    let half = results
        .iter()
        .find(|c| (c.numerator(), c.denominator()) == (1, 2))
        .expect("1/2 is missing");
    assert_eq!(half.error(), 0.);
    assert!(is_reduced(half.numerator(), half.denominator()));
}

#[test]
fn pi_beats_22_over_7_test() {
    let x = 3.14159265f64;
    let results = Approximator::default().approximate(x).unwrap();
    let limit = (x - 22. / 7.).abs();
    assert!(results.iter().any(|c| c.error() <= limit));
}

proptest! {
    #[test]
    fn convergents_reduced_test(x in -1e6f64..1e6) {
        let cf = ContinuedFraction::<i64>::from_float(x, 10, 1e-10).unwrap();
        for c in cf.convergents() {
            prop_assert!(*c.denom() > 0);
            prop_assert!(is_reduced(*c.numer(), *c.denom()), "{} is reducible", c);
        }
    }

    #[test]
    fn output_reduced_unique_test(x in -1e4f64..1e4) {
        let results = Approximator::default().approximate(x).unwrap();
        for c in &results {
            prop_assert!(c.denominator() > 0);
            prop_assert!(is_reduced(c.numerator(), c.denominator()));
        }
        prop_assert_eq!(pair_set(&results).len(), results.len());
    }

    #[test]
    fn output_bounded_test(x in -1e4f64..1e4) {
        let config = ApproxConfig::default();
        let generated = generate(x, &config).len();
        let results = Approximator::default().approximate(x).unwrap();
        prop_assert!(results.len() <= 15);
        prop_assert!(results.len() <= generated);
    }

    #[test]
    fn denominator_policy_sorted_test(x in -100f64..100.) {
        let approx = Approximator::default().with_sort_policy(SortPolicy::Denominator);
        let results = approx.approximate(x).unwrap();
        prop_assert!(results.windows(2).all(|w| w[0].denominator() <= w[1].denominator()));
    }

    #[test]
    fn error_policy_sorted_test(x in -100f64..100.) {
        let approx = Approximator::default().with_sort_policy(SortPolicy::Error);
        let results = approx.approximate(x).unwrap();
        prop_assert!(results.windows(2).all(|w| w[0].error() <= w[1].error()));
    }

    #[test]
    fn scores_range_test(x in -1e4f64..1e4) {
        let config = ApproxConfig::default().with_max_results(usize::MAX);
        let results = Approximator::new(config).unwrap().approximate(x).unwrap();
        for c in &results {
            prop_assert!((0. ..=10.).contains(&c.comprehensive_score));
            prop_assert!((0. ..=10.).contains(&c.length_precision_score));
            prop_assert!(c.total_digit_length >= 2);
        }
    }

    #[test]
    fn policy_reorder_test(x in -100f64..100.) {
        // without truncation every policy sees the same candidate set
        let config = ApproxConfig::default().with_max_results(usize::MAX);
        let approx = Approximator::new(config).unwrap();
        let reference = pair_set(&approx.approximate(x).unwrap());
        for policy in SortPolicy::ALL.iter() {
            let results = approx.clone().with_sort_policy(*policy).approximate(x).unwrap();
            prop_assert_eq!(&pair_set(&results), &reference);

            // the top of each ranking is drawn from that set
            let top = Approximator::default().with_sort_policy(*policy).approximate(x).unwrap();
            prop_assert!(top.len() == reference.len().min(15));
            prop_assert!(pair_set(&top).is_subset(&reference));
        }
    }
}
