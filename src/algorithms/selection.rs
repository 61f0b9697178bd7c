//! Selection sort

use super::errors::require_finite;
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use std::cmp::Ordering;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        rec.mark(Step::SelectionStart(i));
        let mut min = i;
        for j in (i + 1)..n {
            if rec.compare(j, min) == Ordering::Less {
                min = j;
            }
        }
        rec.mark(Step::SelectionEnd(i));

        // No-op swaps are neither emitted nor counted
        if min != i {
            rec.swap(i, min);
        }
    }

    Ok(rec.finish())
}
