//! Input errors for the algorithm library
//!
//! Every runner validates its whole input before emitting a single step, so a
//! rejected run never produces a partial [`StepLog`](crate::steps::StepLog).

use crate::steps::Value;
use thiserror::Error;

/// Why an element was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidReason {
    #[error("value is not a finite number")]
    NonFinite,
    #[error("value is negative")]
    Negative,
    #[error("value is not an integer")]
    NotAnInteger,
    #[error("value range spans {span} buckets, limit is {limit}")]
    RangeTooLarge { span: u64, limit: u64 },
    #[error("value does not fit in an unsigned 64-bit integer")]
    TooLarge,
}

/// Errors raised by an algorithm run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SortError {
    #[error("invalid input at index {index} ({value}): {reason}")]
    InvalidInput {
        index: usize,
        value: Value,
        reason: InvalidReason,
    },
}

impl SortError {
    pub fn reason(&self) -> InvalidReason {
        match self {
            SortError::InvalidInput { reason, .. } => *reason,
        }
    }
}

/// Reject NaN and infinities
pub(crate) fn require_finite(input: &[Value]) -> Result<(), SortError> {
    match input.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SortError::InvalidInput {
            index,
            value: input[index],
            reason: InvalidReason::NonFinite,
        }),
        None => Ok(()),
    }
}

/// Reject anything but finite, non-negative integers (counting and radix sort)
pub(crate) fn require_non_negative_integers(input: &[Value]) -> Result<(), SortError> {
    require_finite(input)?;
    for (index, &value) in input.iter().enumerate() {
        let reason = if value < 0.0 {
            InvalidReason::Negative
        } else if value.fract() != 0.0 {
            InvalidReason::NotAnInteger
        } else if value >= u64::MAX as f64 {
            InvalidReason::TooLarge
        } else {
            continue;
        };
        return Err(SortError::InvalidInput {
            index,
            value,
            reason,
        });
    }
    Ok(())
}
