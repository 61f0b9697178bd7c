//! LSD radix sort (base 10) over non-negative integers

use super::errors::require_non_negative_integers;
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, StepRecorder, Value};

const RADIX: u64 = 10;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_non_negative_integers(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();
    if n < 2 {
        return Ok(rec.finish());
    }

    let max = input.iter().map(|&v| v as u64).max().unwrap_or(0);
    let mut exp: u64 = 1;

    while max / exp > 0 {
        digit_pass(&mut rec, exp);
        exp = match exp.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }

    Ok(rec.finish())
}

/// Stable counting sort of the working array by the digit at `exp`
fn digit_pass(rec: &mut StepRecorder, exp: u64) {
    let keys: Vec<u64> = rec.array().iter().map(|&v| v as u64).collect();
    let digit = |key: u64| ((key / exp) % RADIX) as usize;

    let mut counts = [0usize; RADIX as usize];
    for &key in &keys {
        let d = digit(key);
        counts[d] += 1;
        rec.count(d, counts[d]);
    }

    for d in 1..counts.len() {
        counts[d] += counts[d - 1];
    }

    let mut output = vec![0u64; keys.len()];
    for &key in keys.iter().rev() {
        let d = digit(key);
        counts[d] -= 1;
        output[counts[d]] = key;
        rec.place(counts[d], key as Value);
    }

    for (index, &key) in output.iter().enumerate() {
        rec.copy(index, key as Value);
    }
}
