//! # Introduction
//!
//! Sortty runs classic sorting algorithms over an array of numbers, records
//! every comparison and write as a [`steps::Step`], and plays the recording
//! back one step at a time in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm → Step Log + Stats → Playback Engine → TUI
//! ```
//!
//! 1. [`input`]: generates fresh arrays (random, sorted, reversed, ...).
//! 2. [`algorithms`]: ten instrumented sorts behind a fixed registry keyed
//!    by [`algorithms::AlgorithmKey`]. A run never mutates its input.
//! 3. [`steps`]: the step vocabulary, the append-only [`steps::StepLog`] and
//!    the [`steps::StepRecorder`] every algorithm writes through.
//! 4. [`playback`]: the [`playback::Engine`] state machine, which applies
//!    steps to a display array on timer ticks or on demand.
//! 5. [`config`]: validated session settings shared by the CLI and engine.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use sortty::algorithms::{AlgorithmKey, SortPolicy};
//!
//! let run = AlgorithmKey::Bubble
//!     .run(&[64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0], &SortPolicy::default())
//!     .expect("finite input");
//! assert_eq!(run.stats.comparisons, 21);
//! assert_eq!(
//!     run.final_array(),
//!     Some(&[11.0, 12.0, 22.0, 25.0, 34.0, 64.0, 90.0][..])
//! );
//! ```

pub mod algorithms;
pub mod config;
pub mod input;
pub mod playback;
pub mod steps;
pub mod ui;
