// Configuration surface shared by the CLI and the playback engine

use crate::algorithms::{AlgorithmKey, SortPolicy};
use crate::input::{Preset, ValueRange};
use std::ops::RangeInclusive;
use std::time::Duration;
use thiserror::Error;

/// Accepted number of elements per run
pub const DATA_SIZE_RANGE: RangeInclusive<usize> = 5..=1000;

/// Accepted delay between automatic steps, in milliseconds
pub const INTERVAL_RANGE_MS: RangeInclusive<u64> = 0..=500;

pub const DEFAULT_DATA_SIZE: usize = 20;
pub const DEFAULT_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        min: u64,
        max: u64,
    },
    #[error("value range is empty: min {min} is greater than max {max}")]
    EmptyValueRange { min: i64, max: i64 },
}

/// Everything a session needs to produce and play back runs
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub algorithm: AlgorithmKey,
    pub data_size: usize,
    pub interval_ms: u64,
    pub range: ValueRange,
    pub preset: Preset,
    /// Seed for input generation; `None` draws from entropy
    pub seed: Option<u64>,
    pub policy: SortPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            algorithm: AlgorithmKey::Bubble,
            data_size: DEFAULT_DATA_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            range: ValueRange::default(),
            preset: Preset::Random,
            seed: None,
            policy: SortPolicy::default(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_data_size(self.data_size)?;
        check_interval(self.interval_ms)?;
        if self.range.min > self.range.max {
            return Err(ConfigError::EmptyValueRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

pub fn check_data_size(size: usize) -> Result<usize, ConfigError> {
    if DATA_SIZE_RANGE.contains(&size) {
        Ok(size)
    } else {
        Err(ConfigError::OutOfRange {
            field: "data size",
            value: size as u64,
            min: *DATA_SIZE_RANGE.start() as u64,
            max: *DATA_SIZE_RANGE.end() as u64,
        })
    }
}

pub fn check_interval(interval_ms: u64) -> Result<u64, ConfigError> {
    if INTERVAL_RANGE_MS.contains(&interval_ms) {
        Ok(interval_ms)
    } else {
        Err(ConfigError::OutOfRange {
            field: "interval (ms)",
            value: interval_ms,
            min: *INTERVAL_RANGE_MS.start(),
            max: *INTERVAL_RANGE_MS.end(),
        })
    }
}
