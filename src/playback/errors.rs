//! Playback error types
//!
//! Every error leaves the engine in a consistent state: rejected transitions
//! change nothing, and a run that fails to load keeps the previous run in
//! place. `Engine::reset` recovers from anything.

use super::Phase;
use crate::algorithms::SortError;
use crate::config::ConfigError;
use crate::steps::StepError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// Operation requested from a phase that forbids it
    #[error("cannot {operation} while {phase}")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },

    #[error(transparent)]
    Sort(#[from] SortError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A recorded step did not fit the display array
    #[error("step {cursor} could not be applied: {source}")]
    CorruptStep {
        cursor: usize,
        #[source]
        source: StepError,
    },
}
