use rangeq_error::Result;

/// A fixed-length integer sequence supporting range-add and point-query.
///
/// Positions are 1-based. Backends live in `rangeq-ledger` and
/// `rangeq-fenwick`; every backend must answer `point_query` with
/// `base[k] + sum of all u whose range_add(a, b, u) covers k`, for any
/// interleaving of calls.
pub trait RangeUpdatePointQuery {
    /// Number of positions in the sequence.
    fn len(&self) -> usize;

    /// Adds `u` to every position in `[a, b]`.
    ///
    /// Fails with `InvalidRange` and leaves the structure untouched when
    /// `a > b`, `a < 1` or `b > len`.
    fn range_add(&mut self, a: usize, b: usize, u: i64) -> Result<()>;

    /// Current value at position `k`.
    ///
    /// Fails with `IndexOutOfRange` when `k < 1` or `k > len`.
    fn point_query(&self, k: usize) -> Result<i64>;

    /// Current values at every position, in order.
    fn snapshot(&self) -> Vec<i64>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
