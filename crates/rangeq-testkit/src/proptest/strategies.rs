use proptest::prelude::*;
use rangeq_parse::{Operation, Workload};

// ============================================================================
// Base Strategies
// ============================================================================

/// Values kept well inside `i64` so sums of a few hundred never overflow
pub fn strategy_value() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..=1_000_000_000
}

/// Non-empty base sequence of up to `max_len` values
pub fn strategy_base(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(strategy_value(), 1..=max_len.max(1))
}

/// Valid inclusive 1-based range within `[1, n]`
pub fn strategy_range(n: usize) -> impl Strategy<Value = (usize, usize)> {
    (1..=n, 1..=n).prop_map(|(x, y)| if x <= y { (x, y) } else { (y, x) })
}

/// Up to `max_updates` valid range-adds on an `n`-element sequence
pub fn strategy_updates(
    n: usize,
    max_updates: usize,
) -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec(
        (strategy_range(n), strategy_value()).prop_map(|((a, b), u)| (a, b, u)),
        0..=max_updates,
    )
}

// ============================================================================
// Workload Strategies
// ============================================================================

/// Interleaved stream of valid operations on an `n`-element sequence
pub fn strategy_operations(n: usize, max_ops: usize) -> impl Strategy<Value = Vec<Operation>> {
    let op = prop_oneof![
        (strategy_range(n), strategy_value())
            .prop_map(|((a, b), u)| Operation::RangeAdd { a, b, u }),
        (1..=n).prop_map(|k| Operation::PointQuery { k }),
    ];
    prop::collection::vec(op, 0..=max_ops)
}

/// Complete valid workload
pub fn strategy_workload(max_len: usize, max_ops: usize) -> impl Strategy<Value = Workload> {
    strategy_base(max_len).prop_flat_map(move |base| {
        let n = base.len();
        strategy_operations(n, max_ops).prop_map(move |operations| Workload {
            base: base.clone(),
            operations,
        })
    })
}

// ============================================================================
// Minimum Reconstruction Strategies
// ============================================================================

/// `(n, constraints)` where each constraint is a valid 1-based `(l, r, v)`
pub fn strategy_min_constraints(
    max_len: usize,
    max_constraints: usize,
) -> impl Strategy<Value = (usize, Vec<(usize, usize, i64)>)> {
    (1..=max_len.max(1)).prop_flat_map(move |n| {
        let constraint =
            (strategy_range(n), -50i64..=50).prop_map(|((l, r), v)| (l, r, v));
        (
            Just(n),
            prop::collection::vec(constraint, 1..=max_constraints.max(1)),
        )
    })
}
