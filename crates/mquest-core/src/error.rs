//! Worksheet error types.
//!
//! Raised when a worksheet request cannot produce a question set. File and
//! config failures are reported through `anyhow` by the callers instead.

use thiserror::Error;

use crate::model::Mode;

/// Errors that can occur when building a worksheet.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MquestError {
    /// No operands were supplied.
    #[error("at least one operand is required")]
    NoOperands,

    /// A single-operand mode was given several operands.
    #[error("mode '{mode}' takes exactly one operand, got {count}")]
    TooManyOperands { mode: Mode, count: usize },

    /// A divisor whose twelfth multiple does not fit in an `i64`.
    #[error("operand {0} is out of range, its multiples overflow")]
    OperandOutOfRange(i64),

    /// A start day index outside 0 (Monday) ..= 6 (Sunday).
    #[error("invalid start day {0}, expected 0 (Monday) to 6 (Sunday)")]
    InvalidStartDay(u8),

    /// A mode code other than `m`, `mm` or `d`.
    #[error("unknown mode '{0}', expected one of: m, mm, d")]
    UnknownMode(String),
}
