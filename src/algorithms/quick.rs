//! Quick sort with median-of-three pivots and an explicit work list

use super::errors::require_finite;
use super::{insertion, SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use std::cmp::Ordering;

/// Subarrays shorter than this are finished with insertion sort
pub const INSERTION_CUTOFF: usize = 10;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);

    // Half-open ranges still to sort
    let mut work = vec![(0, rec.len())];

    while let Some((lo, hi)) = work.pop() {
        let len = hi - lo;
        if len < 2 {
            continue;
        }

        if len < INSERTION_CUTOFF {
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
            continue;
        }

        let pivot = partition(&mut rec, lo, hi - 1);
        let left = (lo, pivot);
        let right = (pivot + 1, hi);

        // Larger side goes on first so the list stays O(log n) deep
        if left.1 - left.0 > right.1 - right.0 {
            work.push(left);
            work.push(right);
        } else {
            work.push(right);
            work.push(left);
        }
    }

    Ok(rec.finish())
}

/// Partition the inclusive range `lo..=hi` and return the pivot's final index
fn partition(rec: &mut StepRecorder, lo: usize, hi: usize) -> usize {
    let mid = lo + (hi - lo) / 2;
    if rec.compare(mid, lo) == Ordering::Less {
        rec.swap(lo, mid);
    }
    if rec.compare(hi, lo) == Ordering::Less {
        rec.swap(lo, hi);
    }
    if rec.compare(hi, mid) == Ordering::Less {
        rec.swap(mid, hi);
    }

    // Median sits at mid; park it at hi as the pivot
    rec.swap(mid, hi);

    let mut store = lo;
    for j in lo..hi {
        if rec.compare(j, hi) != Ordering::Greater {
            if store != j {
                rec.swap(store, j);
            }
            store += 1;
        }
    }

    if store != hi {
        rec.swap(store, hi);
    }
    store
}
