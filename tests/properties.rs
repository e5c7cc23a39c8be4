//! Property tests for the search and the generator.

use num_traits::{One, Zero};
use proptest::prelude::*;
use u_harmonic::feasible::{branch_bound, count_feasible, feasible_solutions, replay_accumulators};
use u_harmonic::rational::{ratio, Rational};
use u_harmonic::solve::{solve, IpRunner, Query, SolveConfig};

fn mu_strategy() -> impl Strategy<Value = Rational> {
    (0i64..60, 1i64..20).prop_map(|(n, d)| ratio(n, d))
}

fn query_strategy() -> impl Strategy<Value = Query> {
    prop_oneof![
        1 => Just(None),
        4 => mu_strategy().prop_map(Some),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn best_is_at_least_mu(k in 1usize..=6, mu in mu_strategy()) {
        let best = solve(k, &[Some(mu.clone())], false).unwrap();
        prop_assert!(best[0].as_ref().unwrap() >= &mu);
    }

    #[test]
    fn batching_matches_single(k in 1usize..=6, mu1 in mu_strategy(), mu2 in mu_strategy()) {
        let together = solve(k, &[Some(mu1.clone()), Some(mu2)], false).unwrap();
        let alone = solve(k, &[Some(mu1)], false).unwrap();
        prop_assert_eq!(&together[0], &alone[0]);
    }

    #[test]
    fn solve_is_deterministic(k in 1usize..=6, queries in prop::collection::vec(query_strategy(), 0..5)) {
        let config = SolveConfig::default();
        let a = IpRunner::run(k, &queries, &config).unwrap();
        let b = IpRunner::run(k, &queries, &config).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn visited_count_ignores_queries(k in 1usize..=6, queries in prop::collection::vec(query_strategy(), 0..5)) {
        let result = IpRunner::run(k, &queries, &SolveConfig::default()).unwrap();
        prop_assert_eq!(result.visited, count_feasible(k).unwrap());
        prop_assert_eq!(result.outcomes.len(), queries.len());
        for (q, o) in queries.iter().zip(&result.outcomes) {
            prop_assert_eq!(q.is_some(), o.is_some());
        }
    }

    #[test]
    fn suffixes_keep_accumulator_below_one(k in 2usize..=7, i_off in 0usize..6, n in 0i64..10, d in 1i64..10) {
        let i = 1 + i_off % (k - 1);
        let s = ratio(n % d, d);
        for suffix in feasible_solutions(k, i, &s).unwrap() {
            prop_assert_eq!(suffix.len(), k - i);
            let mut acc = s.clone();
            for (offset, &y) in suffix.iter().enumerate() {
                let level = i + offset;
                prop_assert!(y < branch_bound(level, &acc));
                acc += ratio(y as i64, (level + 1) as i64);
                prop_assert!(acc < Rational::one());
            }
        }
    }
}

#[test]
fn full_vectors_replay_within_bounds() {
    for k in 1..=7 {
        for v in feasible_solutions(k, 1, &Rational::zero()).unwrap() {
            for s in replay_accumulators(&v) {
                assert!(s >= Rational::zero() && s < Rational::one(), "k={k} {v:?}");
            }
        }
    }
}
