//! Error taxonomy for rangeq.
//!
//! Every failure the structures, parsers and drivers can report is a caller or
//! input error. None of them is retried; each is surfaced as soon as it is
//! detected so a bad record never corrupts the answers that follow it.

use std::fmt;

/// Category of a rangeq error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRange,
    IndexOutOfRange,
    MalformedInput,
    EmptySequence,
    SumOverflow,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidRange => write!(f, "invalid_range"),
            ErrorKind::IndexOutOfRange => write!(f, "index_out_of_range"),
            ErrorKind::MalformedInput => write!(f, "malformed_input"),
            ErrorKind::EmptySequence => write!(f, "empty_sequence"),
            ErrorKind::SumOverflow => write!(f, "sum_overflow"),
        }
    }
}

/// Error returned by rangeq operations.
///
/// Positions are reported exactly as the caller supplied them (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeqError {
    /// `a > b`, `a < 1` or `b > len`.
    InvalidRange { a: usize, b: usize, len: usize },
    /// `k < 1` or `k > len`.
    IndexOutOfRange { k: usize, len: usize },
    /// Missing, non-integer or unexpected token. `token` is the 1-based
    /// position of the offending token in the input stream.
    MalformedInput { token: usize, message: String },
    /// A sequence must hold at least one element.
    EmptySequence,
    /// A reported total does not fit in `i64`.
    SumOverflow,
}

impl RangeqError {
    pub fn malformed(token: usize, message: impl Into<String>) -> Self {
        RangeqError::MalformedInput {
            token,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RangeqError::InvalidRange { .. } => ErrorKind::InvalidRange,
            RangeqError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            RangeqError::MalformedInput { .. } => ErrorKind::MalformedInput,
            RangeqError::EmptySequence => ErrorKind::EmptySequence,
            RangeqError::SumOverflow => ErrorKind::SumOverflow,
        }
    }

    pub fn is_invalid_range(&self) -> bool {
        self.kind() == ErrorKind::InvalidRange
    }

    pub fn is_index_out_of_range(&self) -> bool {
        self.kind() == ErrorKind::IndexOutOfRange
    }

    pub fn is_malformed_input(&self) -> bool {
        self.kind() == ErrorKind::MalformedInput
    }
}

impl fmt::Display for RangeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.kind())?;
        match self {
            RangeqError::InvalidRange { a, b, len } => {
                write!(f, "range [{a}, {b}] is not a valid range within [1, {len}]")
            }
            RangeqError::IndexOutOfRange { k, len } => {
                write!(f, "index {k} is outside [1, {len}]")
            }
            RangeqError::MalformedInput { token, message } => {
                write!(f, "token #{token}: {message}")
            }
            RangeqError::EmptySequence => write!(f, "sequence length must be at least 1"),
            RangeqError::SumOverflow => write!(f, "sum does not fit in a signed 64-bit integer"),
        }
    }
}

impl std::error::Error for RangeqError {}

/// Result type alias for rangeq errors
pub type Result<T> = std::result::Result<T, RangeqError>;

/// Validates an inclusive 1-based range against a sequence of `len` elements.
pub fn check_range(a: usize, b: usize, len: usize) -> Result<()> {
    if a < 1 || a > b || b > len {
        return Err(RangeqError::InvalidRange { a, b, len });
    }
    Ok(())
}

/// Validates a 1-based position against a sequence of `len` elements.
pub fn check_index(k: usize, len: usize) -> Result<()> {
    if k < 1 || k > len {
        return Err(RangeqError::IndexOutOfRange { k, len });
    }
    Ok(())
}
