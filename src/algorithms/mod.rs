//! Instrumented sorting algorithms
//!
//! Each submodule exposes `run(input, policy) -> Result<SortRun, SortError>`,
//! running the classic algorithm once over a private copy of `input` and
//! recording every operation through a [`StepRecorder`](crate::steps::StepRecorder).
//!
//! - [`bubble`], [`selection`], [`insertion`], [`shell`]: quadratic / gapped exchange sorts
//! - [`quick`], [`merge`], [`heap`]: `O(n log n)` sorts with explicit work lists
//! - [`counting`], [`radix`]: bucket sorts over non-negative integers
//! - [`bogo`]: randomized, capped at [`SortPolicy::bogo_max_shuffles`]
//!
//! The registry is a fixed table indexed by [`AlgorithmKey`].

pub mod bogo;
pub mod bubble;
pub mod counting;
pub mod errors;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

pub use errors::{InvalidReason, SortError};
pub use shell::GapSequence;

use crate::steps::{SortRun, Stats, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Default shuffle cap for bogo sort
pub const DEFAULT_BOGO_MAX_SHUFFLES: usize = 1000;

/// Tunable constants that are policy rather than invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortPolicy {
    pub bogo_max_shuffles: usize,
    /// `None` seeds bogo sort from entropy
    pub bogo_seed: Option<u64>,
    pub shell_gaps: GapSequence,
}

impl Default for SortPolicy {
    fn default() -> Self {
        SortPolicy {
            bogo_max_shuffles: DEFAULT_BOGO_MAX_SHUFFLES,
            bogo_seed: None,
            shell_gaps: GapSequence::Sedgewick,
        }
    }
}

/// Signature shared by every instrumented runner
pub type Runner = fn(&[Value], &SortPolicy) -> Result<SortRun, SortError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKey {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Shell,
    Counting,
    Radix,
    Bogo,
}

/// Registry entry for one algorithm
pub struct Algorithm {
    pub key: AlgorithmKey,
    pub display_name: &'static str,
    pub run: Runner,
}

impl fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Algorithm")
            .field("key", &self.key)
            .field("display_name", &self.display_name)
            .finish()
    }
}

// Order matches `AlgorithmKey::ALL`
static REGISTRY: [Algorithm; 10] = [
    Algorithm {
        key: AlgorithmKey::Bubble,
        display_name: "Bubble Sort",
        run: bubble::run,
    },
    Algorithm {
        key: AlgorithmKey::Selection,
        display_name: "Selection Sort",
        run: selection::run,
    },
    Algorithm {
        key: AlgorithmKey::Insertion,
        display_name: "Insertion Sort",
        run: insertion::run,
    },
    Algorithm {
        key: AlgorithmKey::Quick,
        display_name: "Quick Sort",
        run: quick::run,
    },
    Algorithm {
        key: AlgorithmKey::Merge,
        display_name: "Merge Sort",
        run: merge::run,
    },
    Algorithm {
        key: AlgorithmKey::Heap,
        display_name: "Heap Sort",
        run: heap::run,
    },
    Algorithm {
        key: AlgorithmKey::Shell,
        display_name: "Shell Sort",
        run: shell::run,
    },
    Algorithm {
        key: AlgorithmKey::Counting,
        display_name: "Counting Sort",
        run: counting::run,
    },
    Algorithm {
        key: AlgorithmKey::Radix,
        display_name: "Radix Sort",
        run: radix::run,
    },
    Algorithm {
        key: AlgorithmKey::Bogo,
        display_name: "Bogo Sort",
        run: bogo::run,
    },
];

/// The full, fixed registry
pub fn registry() -> &'static [Algorithm] {
    &REGISTRY
}

impl AlgorithmKey {
    pub const ALL: [AlgorithmKey; 10] = [
        AlgorithmKey::Bubble,
        AlgorithmKey::Selection,
        AlgorithmKey::Insertion,
        AlgorithmKey::Quick,
        AlgorithmKey::Merge,
        AlgorithmKey::Heap,
        AlgorithmKey::Shell,
        AlgorithmKey::Counting,
        AlgorithmKey::Radix,
        AlgorithmKey::Bogo,
    ];

    /// Short identifier used on the command line
    pub fn id(self) -> &'static str {
        match self {
            AlgorithmKey::Bubble => "bubble",
            AlgorithmKey::Selection => "selection",
            AlgorithmKey::Insertion => "insertion",
            AlgorithmKey::Quick => "quick",
            AlgorithmKey::Merge => "merge",
            AlgorithmKey::Heap => "heap",
            AlgorithmKey::Shell => "shell",
            AlgorithmKey::Counting => "counting",
            AlgorithmKey::Radix => "radix",
            AlgorithmKey::Bogo => "bogo",
        }
    }

    pub fn descriptor(self) -> &'static Algorithm {
        &REGISTRY[self as usize]
    }

    pub fn display_name(self) -> &'static str {
        self.descriptor().display_name
    }

    /// Run the instrumented algorithm over `input`, which is left untouched
    pub fn run(self, input: &[Value], policy: &SortPolicy) -> Result<SortRun, SortError> {
        let result = (self.descriptor().run)(input, policy);
        match &result {
            Ok(run) => tracing::debug!(
                algorithm = self.id(),
                len = input.len(),
                steps = run.steps.len(),
                comparisons = run.stats.comparisons,
                swaps = run.stats.swaps,
                time_ms = run.stats.time_millis,
                "sort run recorded"
            ),
            Err(e) => tracing::debug!(algorithm = self.id(), error = %e, "sort run rejected"),
        }
        result
    }

    /// Next algorithm in registry order, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in registry order, wrapping around
    pub fn prev(self) -> Self {
        Self::ALL[(self as usize + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for AlgorithmKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm '{0}' (expected one of: bubble, selection, insertion, quick, merge, heap, shell, counting, radix, bogo)")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for AlgorithmKey {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let wanted = wanted
            .strip_suffix("sort")
            .unwrap_or(&wanted)
            .trim_end_matches(&['-', '_', ' '][..]);
        AlgorithmKey::ALL
            .into_iter()
            .find(|key| key.id() == wanted)
            .ok_or_else(|| ParseAlgorithmError(s.to_string()))
    }
}

/// One row of an algorithm comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub key: AlgorithmKey,
    pub result: Result<Stats, SortError>,
}

/// Run every registered algorithm, one after another, against the same input
pub fn compare_all(input: &[Value], policy: &SortPolicy) -> Vec<Comparison> {
    AlgorithmKey::ALL
        .into_iter()
        .map(|key| Comparison {
            key,
            result: key.run(input, policy).map(|run| run.stats),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_keys() {
        for key in AlgorithmKey::ALL {
            assert_eq!(key.descriptor().key, key);
        }
        assert_eq!(registry().len(), AlgorithmKey::ALL.len());
    }

    #[test]
    fn test_parse_algorithm_names() {
        assert_eq!("quick".parse::<AlgorithmKey>(), Ok(AlgorithmKey::Quick));
        assert_eq!("Heap Sort".parse::<AlgorithmKey>(), Ok(AlgorithmKey::Heap));
        assert_eq!("radix-sort".parse::<AlgorithmKey>(), Ok(AlgorithmKey::Radix));
        assert!("tim".parse::<AlgorithmKey>().is_err());
    }

    #[test]
    fn test_next_prev_wrap() {
        assert_eq!(AlgorithmKey::Bogo.next(), AlgorithmKey::Bubble);
        assert_eq!(AlgorithmKey::Bubble.prev(), AlgorithmKey::Bogo);
        for key in AlgorithmKey::ALL {
            assert_eq!(key.next().prev(), key);
        }
    }
}
