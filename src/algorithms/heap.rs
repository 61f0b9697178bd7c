//! Heap sort over an implicit max-heap

use super::errors::require_finite;
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use std::cmp::Ordering;

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for root in (0..n / 2).rev() {
        sift_down(&mut rec, root, n);
    }

    for end in (1..n).rev() {
        rec.swap(0, end);
        sift_down(&mut rec, 0, end);
    }

    Ok(rec.finish())
}

/// Restore the heap property below `root` within the first `len` slots
fn sift_down(rec: &mut StepRecorder, root: usize, len: usize) {
    rec.mark(Step::HeapifyStart(root));

    let mut parent = root;
    loop {
        let left = 2 * parent + 1;
        let right = left + 1;
        let mut largest = parent;

        if left < len && rec.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        if right < len && rec.compare(right, largest) == Ordering::Greater {
            largest = right;
        }
        if largest == parent {
            break;
        }

        rec.swap(parent, largest);
        parent = largest;
    }

    rec.mark(Step::HeapifyEnd(root));
}
