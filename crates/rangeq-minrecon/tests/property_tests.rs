//! Property tests for rangeq-minrecon
//!
//! A feasible reconstruction must satisfy every constraint it was given, and
//! the reported answer must be the sum of the pinned values.

use proptest::prelude::*;
use rangeq_minrecon::{MinCase, MinConstraint, Reconstruction, reconstruct};
use rangeq_testkit::proptest::strategy_min_constraints;

fn to_case(n: usize, raw: &[(usize, usize, i64)]) -> MinCase {
    MinCase {
        n,
        constraints: raw
            .iter()
            .map(|&(l, r, min)| MinConstraint { l, r, min })
            .collect(),
    }
}

proptest! {
    // Feasible results honour every constraint over the pinned positions.
    #[test]
    fn prop_feasible_results_satisfy_constraints(
        (n, raw) in strategy_min_constraints(12, 8)
    ) {
        let case = to_case(n, &raw);
        if let Reconstruction::Feasible { pinned, sum } = reconstruct(&case).unwrap() {
            prop_assert!(pinned.keys().all(|&p| (1..=n).contains(&p)));
            for c in &case.constraints {
                let min = pinned.range(c.l..=c.r).map(|(_, &v)| v).min();
                prop_assert_eq!(min, Some(c.min));
            }
            prop_assert_eq!(sum, pinned.values().sum::<i64>());
        }
    }

    // Input order of constraints never changes the outcome.
    #[test]
    fn prop_order_independent(
        (n, raw) in strategy_min_constraints(10, 6)
    ) {
        let mut reversed = raw.clone();
        reversed.reverse();
        let forward = reconstruct(&to_case(n, &raw)).unwrap().answer();
        let backward = reconstruct(&to_case(n, &reversed)).unwrap().answer();
        prop_assert_eq!(forward, backward);
    }

    // Disjoint single-position constraints are always feasible.
    #[test]
    fn prop_point_constraints_feasible(values in prop::collection::vec(-50i64..50, 1..15)) {
        let raw: Vec<_> = values.iter().enumerate().map(|(i, &v)| (i + 1, i + 1, v)).collect();
        let result = reconstruct(&to_case(values.len(), &raw)).unwrap();
        prop_assert_eq!(result.answer(), values.iter().sum::<i64>());
    }
}
