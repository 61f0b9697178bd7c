//! Shell sort: gapped insertion passes over a decreasing gap sequence

use super::errors::require_finite;
use super::{insertion, SortError, SortPolicy};
use crate::steps::{SortRun, Step, StepRecorder, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Gap sequence used by shell sort; every variant ends at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GapSequence {
    /// 1, 5, 19, 41, 109, 209, 505, …
    #[default]
    Sedgewick,
    /// n/2, n/4, …, 1
    Shell,
    /// 1, 4, 13, 40, 121, …
    Knuth,
}

impl GapSequence {
    pub const ALL: [GapSequence; 3] = [GapSequence::Sedgewick, GapSequence::Shell, GapSequence::Knuth];

    pub fn id(self) -> &'static str {
        match self {
            GapSequence::Sedgewick => "sedgewick",
            GapSequence::Shell => "shell",
            GapSequence::Knuth => "knuth",
        }
    }

    /// Gaps for an array of length `n`, largest first. Empty when `n < 2`.
    pub fn gaps(self, n: usize) -> Vec<usize> {
        let n = n as u64;
        let mut gaps = Vec::new();
        match self {
            GapSequence::Sedgewick => {
                for i in 0u32.. {
                    let gap = if i % 2 == 0 {
                        9 * ((1u64 << i) - (1u64 << (i / 2))) + 1
                    } else {
                        8 * (1u64 << i) - 6 * (1u64 << ((i + 1) / 2)) + 1
                    };
                    if gap >= n {
                        break;
                    }
                    gaps.push(gap as usize);
                }
                gaps.reverse();
            }
            GapSequence::Shell => {
                let mut gap = n / 2;
                while gap > 0 {
                    gaps.push(gap as usize);
                    gap /= 2;
                }
            }
            GapSequence::Knuth => {
                let mut gap = 1;
                while gap < n {
                    gaps.push(gap as usize);
                    gap = 3 * gap + 1;
                }
                gaps.reverse();
            }
        }
        gaps
    }
}

impl fmt::Display for GapSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown gap sequence '{0}' (expected sedgewick, shell or knuth)")]
pub struct ParseGapSequenceError(pub String);

impl FromStr for GapSequence {
    type Err = ParseGapSequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        GapSequence::ALL
            .into_iter()
            .find(|seq| seq.id() == wanted)
            .ok_or_else(|| ParseGapSequenceError(s.to_string()))
    }
}

pub fn run(input: &[Value], policy: &SortPolicy) -> Result<SortRun, SortError> {
    require_finite(input)?;
    let mut rec = StepRecorder::new(input);
    let n = rec.len();

    for gap in policy.shell_gaps.gaps(n) {
        rec.mark(Step::GapChange(gap));
        insertion::sort_range(&mut rec, 0, n, gap);
    }

    Ok(rec.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sedgewick_gaps() {
        assert_eq!(GapSequence::Sedgewick.gaps(1), Vec::<usize>::new());
        assert_eq!(GapSequence::Sedgewick.gaps(2), vec![1]);
        assert_eq!(GapSequence::Sedgewick.gaps(100), vec![41, 19, 5, 1]);
        assert_eq!(GapSequence::Sedgewick.gaps(1000), vec![929, 505, 209, 109, 41, 19, 5, 1]);
    }

    #[test]
    fn test_other_sequences_end_at_one() {
        assert_eq!(GapSequence::Shell.gaps(10), vec![5, 2, 1]);
        assert_eq!(GapSequence::Knuth.gaps(50), vec![40, 13, 4, 1]);
        for seq in GapSequence::ALL {
            for n in 2..200 {
                let gaps = seq.gaps(n);
                assert_eq!(gaps.last(), Some(&1), "{seq} for n={n}");
                assert!(gaps.windows(2).all(|w| w[0] > w[1]), "{seq} for n={n}");
            }
        }
    }
}
