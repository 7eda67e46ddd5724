//! Difference-array delta ledger for rangeq.
//!
//! A range-add writes two pulses: `+u` at `a` and `-u` at `b + 1`. The value
//! at `k` is the base value plus the prefix sum of the pulses up to `k`. This
//! makes updates O(1) and queries O(k); it is the correctness baseline the
//! faster backends are checked against.
//!
//! All arithmetic wraps. Since wrapping addition is still a group operation,
//! any answer whose exact value fits in `i64` comes out exact even when a
//! partial prefix sum wrapped along the way.

use rangeq_error::{RangeqError, Result, check_index, check_range};
use rangeq_ports::RangeUpdatePointQuery;

/// Range-add / point-query structure backed by a plain delta ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeltaLedger {
    /// Slot 0 is unused so positions index directly.
    base: Vec<i64>,
    /// Slots `1..=n + 1` hold pulses; `n + 1` is the guard slot that absorbs
    /// the closing pulse of ranges ending at `n`.
    pulses: Vec<i64>,
}

impl DeltaLedger {
    /// Creates a ledger over `base`, whose first element is position 1.
    pub fn new(base: Vec<i64>) -> Result<Self> {
        if base.is_empty() {
            return Err(RangeqError::EmptySequence);
        }
        let n = base.len();
        let mut padded = Vec::with_capacity(n + 1);
        padded.push(0);
        padded.extend(base);

        Ok(Self {
            base: padded,
            pulses: vec![0; n + 2],
        })
    }

    /// Creates a ledger over `n` zeros.
    pub fn zeroed(n: usize) -> Result<Self> {
        Self::new(vec![0; n])
    }

    /// The initial value at position `k`, ignoring every update.
    pub fn base_value(&self, k: usize) -> Result<i64> {
        check_index(k, self.len())?;
        Ok(self.base[k])
    }

    /// Sum of every pulse including the guard slot. Always zero.
    pub fn pulse_total(&self) -> i64 {
        self.pulses[1..]
            .iter()
            .fold(0i64, |acc, &p| acc.wrapping_add(p))
    }
}

impl RangeUpdatePointQuery for DeltaLedger {
    fn len(&self) -> usize {
        self.base.len() - 1
    }

    fn range_add(&mut self, a: usize, b: usize, u: i64) -> Result<()> {
        check_range(a, b, self.len())?;
        self.pulses[a] = self.pulses[a].wrapping_add(u);
        self.pulses[b + 1] = self.pulses[b + 1].wrapping_sub(u);
        Ok(())
    }

    fn point_query(&self, k: usize) -> Result<i64> {
        check_index(k, self.len())?;
        let increment = self.pulses[1..=k]
            .iter()
            .fold(0i64, |acc, &p| acc.wrapping_add(p));
        Ok(self.base[k].wrapping_add(increment))
    }

    fn snapshot(&self) -> Vec<i64> {
        let mut running = 0i64;
        (1..=self.len())
            .map(|k| {
                running = running.wrapping_add(self.pulses[k]);
                self.base[k].wrapping_add(running)
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "naive"
    }
}
