//! Bottom-up merge sort
//!
//! Runs of [`RUN_WIDTH`] are insertion-sorted first, then merged pairwise with
//! doubling widths. All bounds are explicit; there is no recursion.

use super::errors::require_finite;
use super::{insertion, SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use std::cmp::Ordering;

pub const RUN_WIDTH: usize = 8;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    let mut lo = 0;
    while lo < n {
        let hi = (lo + RUN_WIDTH).min(n);
        if hi - lo >= 2 {
            rec.mark(Step::Info(format!(
                "Using insertion sort for small subarray [{}, {}]",
                lo,
                hi - 1
            )));
            insertion::sort_range(&mut rec, lo, hi, 1);
            rec.mark(Step::Info(format!(
                "Completed insertion sort for subarray [{}, {}]",
                lo,
                hi - 1
            )));
        }
        lo = hi;
    }

    let mut width = RUN_WIDTH;
    while width < n {
        let mut lo = 0;
        while lo + width < n {
            let mid = lo + width;
            let hi = (mid + width).min(n);
            merge_runs(&mut rec, lo, mid, hi);
            lo = hi;
        }
        width *= 2;
    }

    Ok(rec.finish())
}

/// Merge the sorted runs `lo..mid` and `mid..hi`
fn merge_runs(rec: &mut StepRecorder, lo: usize, mid: usize, hi: usize) {
    // Already in order across the boundary
    if rec.compare(mid - 1, mid) != Ordering::Greater {
        return;
    }

    let left = rec.array()[lo..mid].to_vec();
    let right = rec.array()[mid..hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    while i < left.len() && j < right.len() {
        rec.note_compare(lo + i, mid + j);
        if left[i] <= right[j] {
            rec.merge(k, left[i]);
            i += 1;
        } else {
            rec.merge(k, right[j]);
            j += 1;
        }
        k += 1;
    }

    // Tail drains are placements, not comparisons
    for &value in left[i..].iter().chain(&right[j..]) {
        rec.merge(k, value);
        k += 1;
    }
}
