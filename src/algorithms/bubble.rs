//! Bubble sort with early exit on a swap-free pass

use super::errors::require_finite;
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use std::cmp::Ordering;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for pass in 0..n.saturating_sub(1) {
        rec.mark(Step::PassStart(pass));
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            if rec.compare(j, j + 1) == Ordering::Greater {
                rec.swap(j, j + 1);
                swapped = true;
            }
        }

        rec.mark(Step::PassEnd(pass));
        if !swapped {
            break;
        }
    }

    Ok(rec.finish())
}
