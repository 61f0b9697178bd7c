//! Step log for replayable sort runs
//!
//! A sort run is recorded as an ordered sequence of [`Step`]s. Only
//! [`Step::Init`], [`Step::Complete`] and [`Step::Timeout`] carry a full array
//! snapshot; every other step is a minimal diff (indices and values) that is
//! applied incrementally to the display array.
//!
//! # Replay invariant
//!
//! Starting from the `Init` snapshot and applying every mutating step in order
//! reproduces exactly the array carried by the terminal step.

pub mod recorder;

pub use recorder::StepRecorder;

use std::fmt;
use thiserror::Error;

/// Element type for every sorted sequence
pub type Value = f64;

/// A single recorded operation
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Init(Vec<Value>),
    Compare(usize, usize),
    Swap(usize, usize),
    Select(Vec<usize>),
    Shift { index: usize, value: Value },
    Insert { index: usize, value: Value },
    Merge { index: usize, value: Value },
    Count { bucket: usize, count: usize },
    Place { index: usize, value: Value },
    Shuffle(usize, usize),
    Copy { index: usize, value: Value },
    Complete(Vec<Value>),
    Timeout(Vec<Value>),
    PassStart(usize),
    PassEnd(usize),
    GapChange(usize),
    SelectionStart(usize),
    SelectionEnd(usize),
    HeapifyStart(usize),
    HeapifyEnd(usize),
    Info(String),
}

/// Fieldless discriminator of [`Step`], used for colour mapping and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Init,
    Compare,
    Swap,
    Select,
    Shift,
    Insert,
    Merge,
    Count,
    Place,
    Shuffle,
    Copy,
    Complete,
    Timeout,
    PassStart,
    PassEnd,
    GapChange,
    SelectionStart,
    SelectionEnd,
    HeapifyStart,
    HeapifyEnd,
    Info,
}

impl StepKind {
    pub fn label(self) -> &'static str {
        match self {
            StepKind::Init => "init",
            StepKind::Compare => "compare",
            StepKind::Swap => "swap",
            StepKind::Select => "select",
            StepKind::Shift => "shift",
            StepKind::Insert => "insert",
            StepKind::Merge => "merge",
            StepKind::Count => "count",
            StepKind::Place => "place",
            StepKind::Shuffle => "shuffle",
            StepKind::Copy => "copy",
            StepKind::Complete => "complete",
            StepKind::Timeout => "timeout",
            StepKind::PassStart => "passStart",
            StepKind::PassEnd => "passEnd",
            StepKind::GapChange => "gapChange",
            StepKind::SelectionStart => "selectionStart",
            StepKind::SelectionEnd => "selectionEnd",
            StepKind::HeapifyStart => "heapifyStart",
            StepKind::HeapifyEnd => "heapifyEnd",
            StepKind::Info => "info",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure to apply a step to a display array
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("{kind} step index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds {
        kind: StepKind,
        index: usize,
        len: usize,
    },
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Init(_) => StepKind::Init,
            Step::Compare(..) => StepKind::Compare,
            Step::Swap(..) => StepKind::Swap,
            Step::Select(_) => StepKind::Select,
            Step::Shift { .. } => StepKind::Shift,
            Step::Insert { .. } => StepKind::Insert,
            Step::Merge { .. } => StepKind::Merge,
            Step::Count { .. } => StepKind::Count,
            Step::Place { .. } => StepKind::Place,
            Step::Shuffle(..) => StepKind::Shuffle,
            Step::Copy { .. } => StepKind::Copy,
            Step::Complete(_) => StepKind::Complete,
            Step::Timeout(_) => StepKind::Timeout,
            Step::PassStart(_) => StepKind::PassStart,
            Step::PassEnd(_) => StepKind::PassEnd,
            Step::GapChange(_) => StepKind::GapChange,
            Step::SelectionStart(_) => StepKind::SelectionStart,
            Step::SelectionEnd(_) => StepKind::SelectionEnd,
            Step::HeapifyStart(_) => StepKind::HeapifyStart,
            Step::HeapifyEnd(_) => StepKind::HeapifyEnd,
            Step::Info(_) => StepKind::Info,
        }
    }

    /// `Complete` or `Timeout`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Step::Complete(_) | Step::Timeout(_))
    }

    /// Whether applying this step can change the display array
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Step::Init(_)
                | Step::Swap(..)
                | Step::Shift { .. }
                | Step::Insert { .. }
                | Step::Merge { .. }
                | Step::Place { .. }
                | Step::Shuffle(..)
                | Step::Copy { .. }
                | Step::Complete(_)
                | Step::Timeout(_)
        )
    }

    /// Indices the renderer should highlight for this step
    pub fn indices(&self) -> Vec<usize> {
        match self {
            Step::Compare(a, b) | Step::Swap(a, b) | Step::Shuffle(a, b) => vec![*a, *b],
            Step::Select(indices) => indices.clone(),
            Step::Shift { index, .. }
            | Step::Insert { index, .. }
            | Step::Merge { index, .. }
            | Step::Place { index, .. }
            | Step::Copy { index, .. } => vec![*index],
            Step::PassStart(i)
            | Step::PassEnd(i)
            | Step::SelectionStart(i)
            | Step::SelectionEnd(i)
            | Step::HeapifyStart(i)
            | Step::HeapifyEnd(i) => vec![*i],
            Step::Init(_)
            | Step::Complete(_)
            | Step::Timeout(_)
            | Step::Count { .. }
            | Step::GapChange(_)
            | Step::Info(_) => Vec::new(),
        }
    }

    /// Apply this step's effect to `array`
    pub fn apply(&self, array: &mut Vec<Value>) -> Result<(), StepError> {
        match self {
            Step::Init(snapshot) | Step::Complete(snapshot) | Step::Timeout(snapshot) => {
                array.clear();
                array.extend_from_slice(snapshot);
            }
            Step::Swap(a, b) | Step::Shuffle(a, b) => {
                self.check_bounds(*a, array.len())?;
                self.check_bounds(*b, array.len())?;
                array.swap(*a, *b);
            }
            Step::Shift { index, value }
            | Step::Insert { index, value }
            | Step::Merge { index, value }
            | Step::Place { index, value }
            | Step::Copy { index, value } => match array.get_mut(*index) {
                Some(slot) => *slot = *value,
                None => {
                    return Err(StepError::IndexOutOfBounds {
                        kind: self.kind(),
                        index: *index,
                        len: array.len(),
                    })
                }
            },
            Step::Compare(..)
            | Step::Select(_)
            | Step::Count { .. }
            | Step::PassStart(_)
            | Step::PassEnd(_)
            | Step::GapChange(_)
            | Step::SelectionStart(_)
            | Step::SelectionEnd(_)
            | Step::HeapifyStart(_)
            | Step::HeapifyEnd(_)
            | Step::Info(_) => {}
        }
        Ok(())
    }

    fn check_bounds(&self, index: usize, len: usize) -> Result<(), StepError> {
        if index < len {
            Ok(())
        } else {
            Err(StepError::IndexOutOfBounds {
                kind: self.kind(),
                index,
                len,
            })
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Init(array) => write!(f, "init ({} elements)", array.len()),
            Step::Compare(a, b) => write!(f, "compare [{a}] with [{b}]"),
            Step::Swap(a, b) => write!(f, "swap [{a}] and [{b}]"),
            Step::Shuffle(a, b) => write!(f, "shuffle [{a}] and [{b}]"),
            Step::Select(indices) => write!(f, "select {indices:?}"),
            Step::Shift { index, value }
            | Step::Insert { index, value }
            | Step::Merge { index, value }
            | Step::Place { index, value }
            | Step::Copy { index, value } => write!(f, "{} {value} at [{index}]", self.kind()),
            Step::Count { bucket, count } => write!(f, "count bucket {bucket} = {count}"),
            Step::Complete(_) => f.write_str("complete"),
            Step::Timeout(_) => f.write_str("timeout"),
            Step::PassStart(pass) => write!(f, "pass {pass} start"),
            Step::PassEnd(pass) => write!(f, "pass {pass} end"),
            Step::GapChange(gap) => write!(f, "gap {gap}"),
            Step::SelectionStart(i) => write!(f, "selection from [{i}]"),
            Step::SelectionEnd(i) => write!(f, "selection into [{i}] done"),
            Step::HeapifyStart(i) => write!(f, "heapify [{i}]"),
            Step::HeapifyEnd(i) => write!(f, "heapify [{i}] done"),
            Step::Info(message) => f.write_str(message),
        }
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Terminal step is `Complete`; the array is sorted
    Complete,
    /// Terminal step is `Timeout`; the array need not be sorted
    IterationCapExceeded,
}

/// Ordered, append-only sequence of steps produced by one algorithm run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepLog {
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new() -> Self {
        StepLog { steps: Vec::new() }
    }

    pub(crate) fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }

    pub fn as_slice(&self) -> &[Step] {
        &self.steps
    }

    /// The last recorded step
    pub fn terminal(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn termination(&self) -> Option<Termination> {
        match self.terminal()? {
            Step::Complete(_) => Some(Termination::Complete),
            Step::Timeout(_) => Some(Termination::IterationCapExceeded),
            _ => None,
        }
    }

    /// Number of steps of the given kind
    pub fn count_kind(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind() == kind).count()
    }

    /// Apply every step in order to an empty array and return the result
    pub fn replay(&self) -> Result<Vec<Value>, StepError> {
        let mut array = Vec::new();
        for step in &self.steps {
            step.apply(&mut array)?;
        }
        Ok(array)
    }
}

impl<'a> IntoIterator for &'a StepLog {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Per-run counters, produced once and immutable afterward
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub comparisons: u64,
    pub swaps: u64,
    pub time_millis: f64,
}

/// Output of one instrumented algorithm run
#[derive(Debug, Clone, PartialEq)]
pub struct SortRun {
    pub steps: StepLog,
    pub stats: Stats,
}

impl SortRun {
    /// The array carried by the terminal step
    pub fn final_array(&self) -> Option<&[Value]> {
        match self.steps.terminal()? {
            Step::Complete(array) | Step::Timeout(array) => Some(array),
            _ => None,
        }
    }

    pub fn termination(&self) -> Option<Termination> {
        self.steps.termination()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_and_writes() {
        let mut array = vec![3.0, 1.0, 2.0];
        Step::Swap(0, 1).apply(&mut array).unwrap();
        assert_eq!(array, vec![1.0, 3.0, 2.0]);
        Step::Shift { index: 2, value: 9.0 }.apply(&mut array).unwrap();
        assert_eq!(array, vec![1.0, 3.0, 9.0]);
        Step::Compare(0, 2).apply(&mut array).unwrap();
        Step::Count { bucket: 7, count: 1 }.apply(&mut array).unwrap();
        assert_eq!(array, vec![1.0, 3.0, 9.0]);
    }

    #[test]
    fn test_snapshot_steps_replace_array() {
        let mut array = vec![5.0];
        Step::Init(vec![1.0, 2.0]).apply(&mut array).unwrap();
        assert_eq!(array, vec![1.0, 2.0]);
        Step::Timeout(vec![2.0, 1.0]).apply(&mut array).unwrap();
        assert_eq!(array, vec![2.0, 1.0]);
    }

    #[test]
    fn test_out_of_bounds_is_an_error() {
        let mut array = vec![1.0];
        let err = Step::Swap(0, 4).apply(&mut array).unwrap_err();
        assert_eq!(
            err,
            StepError::IndexOutOfBounds {
                kind: StepKind::Swap,
                index: 4,
                len: 1
            }
        );
        assert!(Step::Place { index: 1, value: 0.0 }
            .apply(&mut array)
            .is_err());
        assert_eq!(array, vec![1.0]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Step::Compare(1, 2).to_string(), "compare [1] with [2]");
        assert_eq!(
            Step::Merge { index: 3, value: 7.5 }.to_string(),
            "merge 7.5 at [3]"
        );
        assert_eq!(Step::Info("Using insertion".into()).to_string(), "Using insertion");
    }

    #[test]
    fn test_termination() {
        let mut log = StepLog::new();
        assert_eq!(log.termination(), None);
        log.push(Step::Init(vec![]));
        log.push(Step::Timeout(vec![]));
        assert_eq!(log.termination(), Some(Termination::IterationCapExceeded));
    }
}
