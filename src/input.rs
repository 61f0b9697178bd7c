//! Input generation for new runs
//!
//! The playback engine asks an [`InputSource`] for fresh data on every reset.
//! [`RandomInput`] is the stock source; its [`Preset`]s shape the data
//! (uniform random, already sorted, reversed, few unique values, nearly sorted).

use crate::steps::Value;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inclusive integer bounds for generated values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: i64,
    pub max: i64,
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange { min: 1, max: 100 }
    }
}

/// Supplies fresh input arrays
pub trait InputSource {
    fn generate(&mut self, size: usize, range: ValueRange) -> Vec<Value>;
}

/// Shape of generated data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Random,
    Sorted,
    Reversed,
    FewUnique,
    NearlySorted,
}

/// Distinct values used by [`Preset::FewUnique`]
const FEW_UNIQUE_VALUES: i64 = 5;
/// Transpositions applied by [`Preset::NearlySorted`]
const NEARLY_SORTED_SWAPS: usize = 3;

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Random,
        Preset::Sorted,
        Preset::Reversed,
        Preset::FewUnique,
        Preset::NearlySorted,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Preset::Random => "random",
            Preset::Sorted => "sorted",
            Preset::Reversed => "reversed",
            Preset::FewUnique => "few-unique",
            Preset::NearlySorted => "nearly-sorted",
        }
    }

    /// Next preset, wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|p| *p == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown preset '{0}' (expected random, sorted, reversed, few-unique or nearly-sorted)")]
pub struct ParsePresetError(pub String);

impl FromStr for Preset {
    type Err = ParsePresetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Preset::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| ParsePresetError(s.to_string()))
    }
}

/// Seedable generator of integer-valued arrays
#[derive(Debug)]
pub struct RandomInput {
    rng: StdRng,
    preset: Preset,
}

impl RandomInput {
    pub fn new(preset: Preset) -> Self {
        RandomInput {
            rng: StdRng::from_entropy(),
            preset,
        }
    }

    /// Deterministic generator, for tests and reproducible sessions
    pub fn seeded(seed: u64, preset: Preset) -> Self {
        RandomInput {
            rng: StdRng::seed_from_u64(seed),
            preset,
        }
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
    }

    fn uniform(&mut self, size: usize, range: ValueRange) -> Vec<i64> {
        (0..size)
            .map(|_| self.rng.gen_range(range.min..=range.max))
            .collect()
    }

    /// `size` evenly spread ascending values within `range`
    fn ascending(size: usize, range: ValueRange) -> Vec<i64> {
        let span = (range.max - range.min) as f64;
        let denom = size.saturating_sub(1).max(1) as f64;
        (0..size)
            .map(|i| range.min + (span * i as f64 / denom).round() as i64)
            .collect()
    }
}

impl Default for RandomInput {
    fn default() -> Self {
        Self::new(Preset::Random)
    }
}

impl InputSource for RandomInput {
    fn generate(&mut self, size: usize, range: ValueRange) -> Vec<Value> {
        let range = if range.min <= range.max {
            range
        } else {
            ValueRange {
                min: range.max,
                max: range.min,
            }
        };

        let values = match self.preset {
            Preset::Random => self.uniform(size, range),
            Preset::Sorted => Self::ascending(size, range),
            Preset::Reversed => {
                let mut values = Self::ascending(size, range);
                values.reverse();
                values
            }
            Preset::FewUnique => {
                let top = (range.min + FEW_UNIQUE_VALUES - 1).min(range.max);
                self.uniform(size, ValueRange { min: range.min, max: top })
            }
            Preset::NearlySorted => {
                let mut values = Self::ascending(size, range);
                if size >= 2 {
                    for _ in 0..NEARLY_SORTED_SWAPS {
                        let a = self.rng.gen_range(0..size);
                        let mut b = self.rng.gen_range(0..size);
                        while b == a {
                            b = self.rng.gen_range(0..size);
                        }
                        values.swap(a, b);
                    }
                }
                values
            }
        };

        values.into_iter().map(|v| v as Value).collect()
    }
}
