//! Fenwick tree (Binary Indexed Tree) backend for rangeq.
//!
//! [`FenwickTree`] is a plain prefix-sum tree. [`FenwickLedger`] stores the
//! delta-ledger pulses in one, turning every point query into an O(log n)
//! prefix sum instead of a linear scan.

use rangeq_error::{RangeqError, Result, check_index, check_range};
use rangeq_ports::RangeUpdatePointQuery;
use std::num::Wrapping;
use std::ops::{Add, Sub};

/// A Fenwick Tree (Binary Indexed Tree) for prefix sum queries.
///
/// Public indices are 0-based. Supports:
/// - Point updates: O(log n)
/// - Prefix sum queries: O(log n)
/// - Range sum queries: O(log n)
#[derive(Debug, Clone)]
pub struct FenwickTree<T> {
    data: Vec<T>,
    size: usize,
}

impl<T: Copy + Default + Add<Output = T>> FenwickTree<T> {
    /// Creates a new FenwickTree with the given size.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![T::default(); size + 1],
            size,
        }
    }

    /// Creates a FenwickTree from a slice of values in O(n).
    pub fn from_slice(slice: &[T]) -> Self {
        let size = slice.len();
        let mut tree = Self::new(size);

        for (i, &val) in slice.iter().enumerate() {
            tree.data[i + 1] = val;
        }

        for i in 1..=size {
            let j = i + lowbit(i);
            if j <= size {
                tree.data[j] = tree.data[j] + tree.data[i];
            }
        }

        tree
    }

    /// Adds `delta` to the element at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn add(&mut self, i: usize, delta: T) {
        assert!(i < self.size, "fenwick index {i} out of bounds (len {})", self.size);
        let mut i = i + 1;
        while i <= self.size {
            self.data[i] = self.data[i] + delta;
            i += lowbit(i);
        }
    }

    /// Returns the prefix sum of elements `[0, i]`, or `None` if `i >= len()`.
    pub fn prefix_sum(&self, i: usize) -> Option<T> {
        if i >= self.size {
            return None;
        }

        let mut i = i + 1;
        let mut result = T::default();
        while i > 0 {
            result = result + self.data[i];
            i -= lowbit(i);
        }

        Some(result)
    }

    /// Returns the number of elements in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

impl<T: Copy + Default + Add<Output = T> + Sub<Output = T>> FenwickTree<T> {
    /// Returns the sum of elements in range `[l, r]` (inclusive), or `None`
    /// if the range is reversed or reaches past the end.
    pub fn range_sum(&self, l: usize, r: usize) -> Option<T> {
        if l > r {
            return None;
        }
        let upper = self.prefix_sum(r)?;
        let lower = if l > 0 {
            self.prefix_sum(l - 1)?
        } else {
            T::default()
        };
        Some(upper - lower)
    }

    /// Returns the value at index `i`.
    pub fn get(&self, i: usize) -> Option<T> {
        self.range_sum(i, i)
    }
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

/// Range-add / point-query structure over a Fenwick tree of pulses.
///
/// Pulse slot `p - 1` belongs to position `p`; slot `n` is the guard slot
/// receiving the closing pulse of ranges that end at `n`.
#[derive(Debug, Clone)]
pub struct FenwickLedger {
    base: Vec<i64>,
    pulses: FenwickTree<Wrapping<i64>>,
}

impl FenwickLedger {
    /// Creates a ledger over `base`, whose first element is position 1.
    pub fn new(base: Vec<i64>) -> Result<Self> {
        if base.is_empty() {
            return Err(RangeqError::EmptySequence);
        }
        let pulses = FenwickTree::new(base.len() + 1);
        Ok(Self { base, pulses })
    }

    /// Creates a ledger over `n` zeros.
    pub fn zeroed(n: usize) -> Result<Self> {
        Self::new(vec![0; n])
    }

    /// Sum of every pulse including the guard slot. Always zero.
    pub fn pulse_total(&self) -> i64 {
        self.pulses
            .prefix_sum(self.base.len())
            .map_or(0, |total| total.0)
    }
}

impl RangeUpdatePointQuery for FenwickLedger {
    fn len(&self) -> usize {
        self.base.len()
    }

    fn range_add(&mut self, a: usize, b: usize, u: i64) -> Result<()> {
        check_range(a, b, self.len())?;
        self.pulses.add(a - 1, Wrapping(u));
        self.pulses.add(b, -Wrapping(u));
        Ok(())
    }

    fn point_query(&self, k: usize) -> Result<i64> {
        check_index(k, self.len())?;
        let increment = self
            .pulses
            .prefix_sum(k - 1)
            .ok_or(RangeqError::IndexOutOfRange { k, len: self.len() })?;
        Ok((Wrapping(self.base[k - 1]) + increment).0)
    }

    fn snapshot(&self) -> Vec<i64> {
        let mut running = Wrapping(0i64);
        self.base
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                running += self.pulses.get(i).unwrap_or_default();
                (Wrapping(v) + running).0
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "fenwick"
    }
}
