//! Property tests for rangeq-fenwick
//!
//! The Fenwick backend must be observationally identical to the plain delta
//! ledger, and the tree's prefix sums must match a running sum.

use proptest::prelude::*;
use rangeq_fenwick::{FenwickLedger, FenwickTree};
use rangeq_ledger::DeltaLedger;
use rangeq_parse::Operation;
use rangeq_ports::RangeUpdatePointQuery;
use rangeq_testkit::proptest::{strategy_base, strategy_operations};

proptest! {
    // Same answers as the delta ledger after every single record.
    #[test]
    fn prop_equivalent_to_delta_ledger(
        (base, ops) in strategy_base(40).prop_flat_map(|base| {
            let n = base.len();
            (Just(base), strategy_operations(n, 100))
        })
    ) {
        let mut fenwick = FenwickLedger::new(base.clone()).unwrap();
        let mut naive = DeltaLedger::new(base).unwrap();

        for op in ops {
            match op {
                Operation::RangeAdd { a, b, u } => {
                    fenwick.range_add(a, b, u).unwrap();
                    naive.range_add(a, b, u).unwrap();
                }
                Operation::PointQuery { k } => {
                    prop_assert_eq!(fenwick.point_query(k).unwrap(), naive.point_query(k).unwrap());
                }
            }
        }

        prop_assert_eq!(fenwick.snapshot(), naive.snapshot());
        prop_assert_eq!(fenwick.pulse_total(), 0);
    }

    // Prefix sums of a tree built from a slice equal the running sum.
    #[test]
    fn prop_prefix_sums(values in prop::collection::vec(-1000i64..1000, 1..80)) {
        let tree = FenwickTree::from_slice(&values);
        let mut running = 0i64;
        for (i, v) in values.iter().enumerate() {
            running += v;
            prop_assert_eq!(tree.prefix_sum(i), Some(running));
            prop_assert_eq!(tree.get(i), Some(*v));
        }
        prop_assert_eq!(tree.prefix_sum(values.len()), None);
    }
}
