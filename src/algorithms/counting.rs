//! Counting sort over non-negative integers
//!
//! The count table spans the observed `min..=max` range. Placement walks the
//! input from the end against prefix sums, which keeps equal keys stable.

use super::errors::{require_non_negative_integers, InvalidReason};
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, StepRecorder, Value};

/// Widest value range a count table may cover
pub const MAX_COUNTING_RANGE: u64 = 1_000_000;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_non_negative_integers(input)?;

    let keys: Vec<u64> = input.iter().map(|&v| v as u64).collect();
    let (Some(&min), Some(&max)) = (keys.iter().min(), keys.iter().max()) else {
        return Ok(StepRecorder::new(input).finish());
    };

    let span = (max - min).saturating_add(1);
    if span > MAX_COUNTING_RANGE {
        let index = keys.iter().position(|&k| k == max).unwrap_or(0);
        return Err(SortError::InvalidInput {
            index,
            value: input[index],
            reason: InvalidReason::RangeTooLarge {
                span,
                limit: MAX_COUNTING_RANGE,
            },
        });
    }

    let mut rec = StepRecorder::new(input);
    if keys.len() < 2 {
        return Ok(rec.finish());
    }

    let mut counts = vec![0usize; span as usize];
    for &key in &keys {
        let bucket = (key - min) as usize;
        counts[bucket] += 1;
        rec.count(bucket, counts[bucket]);
    }

    for bucket in 1..counts.len() {
        counts[bucket] += counts[bucket - 1];
    }

    for &key in keys.iter().rev() {
        let bucket = (key - min) as usize;
        counts[bucket] -= 1;
        rec.place(counts[bucket], key as Value);
    }

    Ok(rec.finish())
}
