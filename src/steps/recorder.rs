//! Step emission and statistics accumulation shared by every algorithm
//!
//! A [`StepRecorder`] owns the working array of a run. Every mutation goes
//! through it, so the recorded steps replay to exactly the array the algorithm
//! ends with, and comparisons/swaps are tallied the same way for all ten
//! algorithms.

use super::{SortRun, Stats, Step, StepLog, Value};
use std::cmp::Ordering;
use std::time::Instant;

#[derive(Debug)]
pub struct StepRecorder {
    array: Vec<Value>,
    log: StepLog,
    comparisons: u64,
    swaps: u64,
    started: Instant,
}

impl StepRecorder {
    /// Copy `input` into a fresh working array and record the `Init` snapshot
    pub fn new(input: &[Value]) -> Self {
        let mut log = StepLog::new();
        log.push(Step::Init(input.to_vec()));
        StepRecorder {
            array: input.to_vec(),
            log,
            comparisons: 0,
            swaps: 0,
            started: Instant::now(),
        }
    }

    pub fn array(&self) -> &[Value] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn value(&self, index: usize) -> Value {
        self.array[index]
    }

    /// Compare two slots of the working array
    pub fn compare(&mut self, a: usize, b: usize) -> Ordering {
        self.note_compare(a, b);
        self.array[a].total_cmp(&self.array[b])
    }

    /// Record a comparison whose operands the caller holds itself
    /// (an insertion key or a pivot value)
    pub fn note_compare(&mut self, a: usize, b: usize) {
        self.comparisons += 1;
        self.log.push(Step::Compare(a, b));
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swaps += 1;
        self.log.push(Step::Swap(a, b));
    }

    pub fn shuffle(&mut self, a: usize, b: usize) {
        self.array.swap(a, b);
        self.swaps += 1;
        self.log.push(Step::Shuffle(a, b));
    }

    pub fn shift(&mut self, index: usize, value: Value) {
        self.array[index] = value;
        self.swaps += 1;
        self.log.push(Step::Shift { index, value });
    }

    pub fn place(&mut self, index: usize, value: Value) {
        self.array[index] = value;
        self.swaps += 1;
        self.log.push(Step::Place { index, value });
    }

    pub fn insert(&mut self, index: usize, value: Value) {
        self.write_if_changed(index, value);
        self.log.push(Step::Insert { index, value });
    }

    pub fn merge(&mut self, index: usize, value: Value) {
        self.write_if_changed(index, value);
        self.log.push(Step::Merge { index, value });
    }

    pub fn copy(&mut self, index: usize, value: Value) {
        self.write_if_changed(index, value);
        self.log.push(Step::Copy { index, value });
    }

    /// One tally into a bucket; counts as an element-vs-bucket decision
    pub fn count(&mut self, bucket: usize, count: usize) {
        self.comparisons += 1;
        self.log.push(Step::Count { bucket, count });
    }

    /// Record an advisory step that leaves the array untouched
    pub fn mark(&mut self, step: Step) {
        debug_assert!(!step.is_mutating(), "mark() takes advisory steps only");
        self.log.push(step);
    }

    /// Close the run with a `Complete` snapshot
    pub fn finish(self) -> SortRun {
        self.close(Step::Complete)
    }

    /// Close the run with a `Timeout` snapshot
    pub fn time_out(self) -> SortRun {
        self.close(Step::Timeout)
    }

    fn write_if_changed(&mut self, index: usize, value: Value) {
        if self.array[index] != value {
            self.array[index] = value;
            self.swaps += 1;
        }
    }

    fn close(mut self, terminal: fn(Vec<Value>) -> Step) -> SortRun {
        let time_millis = self.started.elapsed().as_secs_f64() * 1000.0;
        self.log.push(terminal(self.array));
        SortRun {
            steps: self.log,
            stats: Stats {
                comparisons: self.comparisons,
                swaps: self.swaps,
                time_millis,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_writes_are_not_counted() {
        let mut rec = StepRecorder::new(&[4.0, 4.0]);
        rec.insert(1, 4.0);
        rec.merge(0, 1.0);
        let run = rec.finish();
        assert_eq!(run.stats.swaps, 1);
        assert_eq!(run.steps.len(), 4);
        assert_eq!(run.steps.replay().unwrap(), vec![1.0, 4.0]);
    }

    #[test]
    fn test_compare_counts_and_orders() {
        let mut rec = StepRecorder::new(&[2.0, 1.0]);
        assert_eq!(rec.compare(0, 1), Ordering::Greater);
        rec.count(3, 1);
        let run = rec.time_out();
        assert_eq!(run.stats.comparisons, 2);
        assert!(matches!(run.steps.terminal(), Some(Step::Timeout(_))));
    }
}
