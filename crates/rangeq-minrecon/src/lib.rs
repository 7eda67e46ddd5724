//! Greedy reconstruction of an array from range-minimum constraints.
//!
//! Each constraint `(l, r, v)` demands that the minimum over positions
//! `[l, r]` be exactly `v`. Constraints are processed by right endpoint, with
//! larger minimums and then narrower ranges first on ties. A constraint whose
//! range holds no assigned position pins `v` at its right endpoint; otherwise the smallest assigned
//! value in the range must already equal `v`. A final pass re-checks every
//! constraint. Unassigned positions count as zero in the reported sum, which
//! must fit in `i64`.
//!
//! Only pinned positions are stored, so memory follows the constraint count
//! rather than the declared array length.

use rangeq_error::{RangeqError, Result, check_range};
use rangeq_parse::{MAX_PREALLOC, Tokens};
use std::collections::BTreeMap;

/// "The minimum over `[l, r]` is `min`", 1-based and inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinConstraint {
    pub l: usize,
    pub r: usize,
    pub min: i64,
}

/// One test case: an array length and its constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinCase {
    pub n: usize,
    pub constraints: Vec<MinConstraint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reconstruction {
    /// Pinned values by 1-based position; every other position is zero.
    Feasible { pinned: BTreeMap<usize, i64>, sum: i64 },
    Infeasible,
}

impl Reconstruction {
    /// The printed answer: the array sum, or -1 when infeasible.
    pub fn answer(&self) -> i64 {
        match self {
            Reconstruction::Feasible { sum, .. } => *sum,
            Reconstruction::Infeasible => -1,
        }
    }
}

/// Smallest pinned value within `[c.l, c.r]`, if any position there is pinned.
fn pinned_min(pinned: &BTreeMap<usize, i64>, c: &MinConstraint) -> Option<i64> {
    pinned.range(c.l..=c.r).map(|(_, &v)| v).min()
}

/// Runs the greedy procedure on one case.
///
/// Fails with `InvalidRange` if any constraint lies outside `[1, n]`, and
/// with `SumOverflow` if a feasible array's sum does not fit in `i64`.
pub fn reconstruct(case: &MinCase) -> Result<Reconstruction> {
    for c in &case.constraints {
        check_range(c.l, c.r, case.n)?;
    }

    let mut order = case.constraints.clone();
    order.sort_by(|x, y| {
        x.r.cmp(&y.r)
            .then(y.min.cmp(&x.min))
            .then(y.l.cmp(&x.l))
    });

    let mut pinned = BTreeMap::new();
    for c in &order {
        match pinned_min(&pinned, c) {
            None => {
                pinned.insert(c.r, c.min);
            }
            Some(current) if current != c.min => return Ok(Reconstruction::Infeasible),
            Some(_) => {}
        }
    }

    if !order.iter().all(|c| pinned_min(&pinned, c) == Some(c.min)) {
        return Ok(Reconstruction::Infeasible);
    }

    let sum = pinned
        .values()
        .try_fold(0i64, |acc, &v| acc.checked_add(v))
        .ok_or(RangeqError::SumOverflow)?;
    Ok(Reconstruction::Feasible { pinned, sum })
}

/// Parses `t`, then per case `n q` followed by `q` triples `l r v`.
pub fn parse_cases(input: &str) -> Result<Vec<MinCase>> {
    let mut tokens = Tokens::new(input);
    let t = tokens.next_usize("test case count t")?;

    let mut cases = Vec::with_capacity(t.min(MAX_PREALLOC));
    for _ in 0..t {
        let n = tokens.next_usize("array length n")?;
        let q = tokens.next_usize("constraint count q")?;
        let mut constraints = Vec::with_capacity(q.min(MAX_PREALLOC));
        for _ in 0..q {
            constraints.push(MinConstraint {
                l: tokens.next_usize("range start l")?,
                r: tokens.next_usize("range end r")?,
                min: tokens.next_i64("required minimum v")?,
            });
        }
        cases.push(MinCase { n, constraints });
    }

    tokens.finish()?;
    Ok(cases)
}

/// Parses and solves every case, returning one answer per case.
pub fn solve(input: &str) -> Result<Vec<i64>> {
    parse_cases(input)?
        .iter()
        .map(|case| reconstruct(case).map(|r| r.answer()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rangeq_error::RangeqError;

    fn case(n: usize, constraints: &[(usize, usize, i64)]) -> MinCase {
        MinCase {
            n,
            constraints: constraints
                .iter()
                .map(|&(l, r, min)| MinConstraint { l, r, min })
                .collect(),
        }
    }

    #[test]
    fn single_constraint_pins_right_endpoint() {
        let result = reconstruct(&case(3, &[(1, 3, 2)])).unwrap();
        assert_eq!(
            result,
            Reconstruction::Feasible {
                pinned: BTreeMap::from([(3, 2)]),
                sum: 2,
            }
        );
        assert_eq!(result.answer(), 2);
    }

    #[test]
    fn nested_constraints_share_minimum() {
        let result = reconstruct(&case(4, &[(1, 2, 3), (3, 4, 1), (1, 4, 1)])).unwrap();
        assert_eq!(result.answer(), 4);
    }

    #[test]
    fn conflicting_minimums_are_infeasible() {
        let result = reconstruct(&case(3, &[(2, 3, 5), (3, 3, 4)])).unwrap();
        assert_eq!(result, Reconstruction::Infeasible);
        assert_eq!(result.answer(), -1);
    }

    #[test]
    fn ties_on_right_endpoint_take_larger_minimum_first() {
        // (2,2,7) pins 7 at position 2; (1,2,7) then agrees.
        let result = reconstruct(&case(2, &[(2, 2, 7), (1, 2, 7)])).unwrap();
        assert_eq!(result.answer(), 7);

        let result = reconstruct(&case(2, &[(1, 2, 3), (2, 2, 9)])).unwrap();
        assert_eq!(result, Reconstruction::Infeasible);
    }

    #[test]
    fn narrower_range_goes_first_on_full_tie() {
        // (2,2,5) must pin position 2 before (1,2,5) sees the 9 at position 1.
        let result = reconstruct(&case(2, &[(1, 1, 9), (1, 2, 5), (2, 2, 5)])).unwrap();
        assert_eq!(result.answer(), 14);
    }

    #[test]
    fn no_constraints_sum_to_zero() {
        let result = reconstruct(&case(5, &[])).unwrap();
        assert_eq!(result.answer(), 0);
    }

    #[test]
    fn huge_declared_length_is_cheap() {
        let result = reconstruct(&case(usize::MAX, &[(1, usize::MAX, -3)])).unwrap();
        assert_eq!(result.answer(), -3);
    }

    #[test]
    fn overflowing_sum_is_an_error() {
        let err = reconstruct(&case(2, &[(1, 1, i64::MAX), (2, 2, i64::MAX)])).unwrap_err();
        assert_eq!(err, RangeqError::SumOverflow);

        let err = solve("1\n2 2\n1 1 9223372036854775807\n2 2 9223372036854775807\n")
            .unwrap_err();
        assert_eq!(err, RangeqError::SumOverflow);
    }

    #[test]
    fn extreme_values_that_fit_are_summed() {
        let result = reconstruct(&case(2, &[(1, 1, i64::MAX), (2, 2, i64::MIN)])).unwrap();
        assert_eq!(result.answer(), -1);
    }

    #[test]
    fn out_of_range_constraint_rejected() {
        let err = reconstruct(&case(3, &[(0, 2, 1)])).unwrap_err();
        assert!(err.is_invalid_range());
        let err = reconstruct(&case(3, &[(2, 4, 1)])).unwrap_err();
        assert_eq!(err, RangeqError::InvalidRange { a: 2, b: 4, len: 3 });
    }

    #[test]
    fn parse_and_solve_multiple_cases() {
        let input = "3\n3 1\n1 3 2\n3 2\n2 3 5\n3 3 4\n4 3\n1 2 3\n3 4 1\n1 4 1\n";
        assert_eq!(solve(input).unwrap(), vec![2, -1, 4]);
    }

    #[test]
    fn parse_rejects_truncated_case() {
        let err = parse_cases("2\n1 1\n1 1 5\n").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("array length n"));
    }

    #[test]
    fn parse_rejects_trailing_tokens() {
        assert!(parse_cases("0\n7\n").unwrap_err().is_malformed_input());
    }
}
