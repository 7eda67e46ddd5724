//! Parsing utilities for rangeq inputs.
//!
//! Inputs are streams of whitespace-separated integers. [`Tokens`] hands them
//! out one at a time and remembers how many it has consumed, so every
//! [`RangeqError::MalformedInput`] names the offending token.

use rangeq_error::{RangeqError, Result};
use serde::Serialize;
use std::str::SplitAsciiWhitespace;

/// Preallocation cap for declared counts; the real length is bounded by the
/// number of tokens actually present.
pub const MAX_PREALLOC: usize = 1 << 16;

/// Cursor over the whitespace-separated tokens of an input.
pub struct Tokens<'a> {
    inner: SplitAsciiWhitespace<'a>,
    consumed: usize,
}

impl<'a> Tokens<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            inner: input.split_ascii_whitespace(),
            consumed: 0,
        }
    }

    /// Number of tokens handed out so far.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    fn next_token(&mut self, what: &str) -> Result<&'a str> {
        self.consumed += 1;
        self.inner.next().ok_or_else(|| {
            RangeqError::malformed(self.consumed, format!("expected {what}, found end of input"))
        })
    }

    /// Reads a signed 64-bit integer.
    pub fn next_i64(&mut self, what: &str) -> Result<i64> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            RangeqError::malformed(self.consumed, format!("expected {what}, found `{token}`"))
        })
    }

    /// Reads a non-negative integer that fits in `usize`.
    pub fn next_usize(&mut self, what: &str) -> Result<usize> {
        let token = self.next_token(what)?;
        token.parse().map_err(|_| {
            RangeqError::malformed(
                self.consumed,
                format!("expected {what} (non-negative integer), found `{token}`"),
            )
        })
    }

    /// Fails if any token is left over.
    pub fn finish(mut self) -> Result<()> {
        match self.inner.next() {
            None => Ok(()),
            Some(token) => Err(RangeqError::malformed(
                self.consumed + 1,
                format!("unexpected trailing token `{token}`"),
            )),
        }
    }
}

/// One operation record of a range-update workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    /// Record `1 a b u`.
    RangeAdd { a: usize, b: usize, u: i64 },
    /// Record `2 k`.
    PointQuery { k: usize },
}

impl Operation {
    /// Writes the record in input format.
    pub fn to_record(&self) -> String {
        match self {
            Operation::RangeAdd { a, b, u } => format!("1 {a} {b} {u}"),
            Operation::PointQuery { k } => format!("2 {k}"),
        }
    }
}

/// A fully parsed range-update / point-query input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    /// Initial values; element 0 is position 1.
    pub base: Vec<i64>,
    pub operations: Vec<Operation>,
}

impl Workload {
    pub fn query_count(&self) -> usize {
        self.operations
            .iter()
            .filter(|op| matches!(op, Operation::PointQuery { .. }))
            .count()
    }

    /// Renders the workload back into the input format.
    pub fn to_input(&self) -> String {
        let mut out = format!("{} {}\n", self.base.len(), self.operations.len());
        let base: Vec<String> = self.base.iter().map(|v| v.to_string()).collect();
        out.push_str(&base.join(" "));
        out.push('\n');
        for op in &self.operations {
            out.push_str(&op.to_record());
            out.push('\n');
        }
        out
    }
}

/// Parses `n q`, then `n` values, then `q` operation records.
pub fn parse_workload(input: &str) -> Result<Workload> {
    let mut tokens = Tokens::new(input);
    let n = tokens.next_usize("sequence length n")?;
    let q = tokens.next_usize("operation count q")?;

    let mut base = Vec::with_capacity(n.min(MAX_PREALLOC));
    for _ in 0..n {
        base.push(tokens.next_i64("initial value")?);
    }

    let mut operations = Vec::with_capacity(q.min(MAX_PREALLOC));
    for _ in 0..q {
        operations.push(parse_operation(&mut tokens)?);
    }

    tokens.finish()?;
    Ok(Workload { base, operations })
}

fn parse_operation(tokens: &mut Tokens<'_>) -> Result<Operation> {
    let tag = tokens.next_usize("operation type")?;
    let tag_token = tokens.consumed();
    match tag {
        1 => Ok(Operation::RangeAdd {
            a: tokens.next_usize("range start a")?,
            b: tokens.next_usize("range end b")?,
            u: tokens.next_i64("increment u")?,
        }),
        2 => Ok(Operation::PointQuery {
            k: tokens.next_usize("query position k")?,
        }),
        other => Err(RangeqError::malformed(
            tag_token,
            format!("unknown operation type {other} (expected 1 or 2)"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reference_input() {
        let workload = parse_workload("5 3\n1 2 3 4 5\n1 2 4 10\n2 3\n2 5\n").unwrap();
        assert_eq!(workload.base, vec![1, 2, 3, 4, 5]);
        assert_eq!(
            workload.operations,
            vec![
                Operation::RangeAdd { a: 2, b: 4, u: 10 },
                Operation::PointQuery { k: 3 },
                Operation::PointQuery { k: 5 },
            ]
        );
        assert_eq!(workload.query_count(), 2);
    }

    #[test]
    fn parse_ignores_layout() {
        let workload = parse_workload("  2   1 -5\t7 1 1 2 -3").unwrap();
        assert_eq!(workload.base, vec![-5, 7]);
        assert_eq!(
            workload.operations,
            vec![Operation::RangeAdd { a: 1, b: 2, u: -3 }]
        );
    }

    #[test]
    fn parse_zero_operations() {
        let workload = parse_workload("1 0\n42\n").unwrap();
        assert_eq!(workload.base, vec![42]);
        assert!(workload.operations.is_empty());
    }

    #[test]
    fn truncated_input_names_missing_token() {
        let err = parse_workload("3 1\n1 2\n").unwrap_err();
        assert_eq!(
            err,
            RangeqError::malformed(5, "expected initial value, found end of input")
        );
    }

    #[test]
    fn truncated_record() {
        let err = parse_workload("1 1\n0\n1 1 1\n").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("increment u"));
    }

    #[test]
    fn non_integer_token() {
        let err = parse_workload("2 1\n1 x\n2 1\n").unwrap_err();
        assert_eq!(
            err,
            RangeqError::malformed(4, "expected initial value, found `x`")
        );
    }

    #[test]
    fn negative_position_is_malformed() {
        let err = parse_workload("2 1\n1 1\n2 -1\n").unwrap_err();
        assert!(err.is_malformed_input());
        assert!(err.to_string().contains("token #6"));
    }

    #[test]
    fn unknown_operation_type() {
        let err = parse_workload("1 1\n0\n3 1\n").unwrap_err();
        assert_eq!(
            err,
            RangeqError::malformed(4, "unknown operation type 3 (expected 1 or 2)")
        );
    }

    #[test]
    fn trailing_tokens_rejected() {
        let err = parse_workload("1 1\n0\n2 1\n2 1\n").unwrap_err();
        assert_eq!(err, RangeqError::malformed(6, "unexpected trailing token `2`"));
    }

    #[test]
    fn value_overflow_is_malformed() {
        let err = parse_workload("1 0\n9223372036854775808\n").unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn huge_declared_count_does_not_preallocate() {
        let err = parse_workload("18446744073709551615 0\n1\n").unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn to_input_reparses() {
        let workload = Workload {
            base: vec![3, -1],
            operations: vec![
                Operation::PointQuery { k: 2 },
                Operation::RangeAdd { a: 1, b: 2, u: 9 },
            ],
        };
        assert_eq!(workload.to_input(), "2 2\n3 -1\n2 2\n1 1 2 9\n");
        assert_eq!(parse_workload(&workload.to_input()).unwrap(), workload);
    }

    #[test]
    fn operation_serializes_tagged() {
        let json = serde_json::to_string(&Operation::PointQuery { k: 4 }).unwrap();
        assert_eq!(json, r#"{"op":"point_query","k":4}"#);
    }

    #[test]
    fn tokens_count_consumed() {
        let mut tokens = Tokens::new("1 2");
        assert_eq!(tokens.next_i64("a").unwrap(), 1);
        assert_eq!(tokens.consumed(), 1);
        assert_eq!(tokens.next_usize("b").unwrap(), 2);
        assert!(tokens.finish().is_ok());
    }
}
