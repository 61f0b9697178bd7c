//! Insertion sort
//!
//! [`sort_range`] is the gapped insertion pass shared with shell sort and with
//! the small-subarray finish of quick and merge sort.

use super::errors::require_finite;
use super::{SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};

pub fn run(input: &[Value], _policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();
    sort_range(&mut rec, 0, n, 1);
    Ok(rec.finish())
}

/// Gapped insertion sort over the half-open range `lo..hi`.
///
/// Emits `select` for each key, `compare` + `shift` for each element moved
/// `gap` slots right, and `insert` once the key lands. The comparison that
/// stops the shift loop is counted too.
pub(crate) fn sort_range(rec: &mut StepRecorder, lo: usize, hi: usize, gap: usize) {
    for i in (lo + gap)..hi {
        let key = rec.value(i);
        rec.mark(Step::Select(vec![i]));

        let mut j = i;
        while j >= lo + gap {
            rec.note_compare(j - gap, j);
            let larger = rec.value(j - gap);
            if larger <= key {
                break;
            }
            rec.shift(j, larger);
            j -= gap;
        }

        rec.insert(j, key);
    }
}
