use rangeq_parse::{Operation, Workload};

pub mod proptest;

/// Brute-force model: every range-add touches every covered element.
///
/// Slow and obviously correct; property tests compare the real backends
/// against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveArray {
    values: Vec<i64>,
}

impl NaiveArray {
    pub fn new(base: &[i64]) -> Self {
        Self {
            values: base.to_vec(),
        }
    }

    /// Adds `u` to positions `a..=b` (1-based). Panics on a bad range.
    pub fn range_add(&mut self, a: usize, b: usize, u: i64) {
        for v in &mut self.values[a - 1..b] {
            *v = v.wrapping_add(u);
        }
    }

    pub fn get(&self, k: usize) -> i64 {
        self.values[k - 1]
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Runs every operation and returns the point-query answers in order.
    pub fn answers(workload: &Workload) -> Vec<i64> {
        let mut model = Self::new(&workload.base);
        let mut out = Vec::new();
        for op in &workload.operations {
            match *op {
                Operation::RangeAdd { a, b, u } => model.range_add(a, b, u),
                Operation::PointQuery { k } => out.push(model.get(k)),
            }
        }
        out
    }
}

/// The five-element sample: add 10 to [2, 4], then query 3 and 5.
pub fn sample_workload() -> Workload {
    Workload {
        base: vec![1, 2, 3, 4, 5],
        operations: vec![
            Operation::RangeAdd { a: 2, b: 4, u: 10 },
            Operation::PointQuery { k: 3 },
            Operation::PointQuery { k: 5 },
        ],
    }
}

/// Queries every position of an `n`-element workload after its updates.
pub fn query_every_position(base: Vec<i64>, updates: &[(usize, usize, i64)]) -> Workload {
    let n = base.len();
    let operations = updates
        .iter()
        .map(|&(a, b, u)| Operation::RangeAdd { a, b, u })
        .chain((1..=n).map(|k| Operation::PointQuery { k }))
        .collect();
    Workload { base, operations }
}
