//! Step-by-step playback of a recorded sort run
//!
//! The [`Engine`] owns the current run (its [`StepLog`] and [`Stats`]), a
//! display array, and a cursor into the log. Applying steps in order from the
//! cursor reproduces the algorithm's intermediate states; once the terminal
//! step is applied the display array equals the sorted snapshot.
//!
//! ```text
//!            start                 resume
//!   Idle ──────────────► Paused ◄─────────► Running
//!    ▲                     │        pause      │
//!    │ reset               │ step_forward      │ tick
//!    │                     ▼                   ▼
//!    └─────────────── Complete ◄───────────────┘
//! ```
//!
//! Timed advancement goes through a [`Scheduler`]. Each scheduled [`Tick`]
//! carries the generation it was issued under. Scheduling and every
//! cancellation (pause, reset, start, algorithm change) bump the generation,
//! so only the single outstanding tick is honoured: a tick delivered twice, or
//! late after any of those transitions, is ignored.

pub mod errors;
pub mod scheduler;

pub use errors::PlaybackError;
pub use scheduler::{IntervalScheduler, ManualScheduler, Scheduler, Tick};

use crate::algorithms::AlgorithmKey;
use crate::config::{check_data_size, check_interval, Settings};
use crate::input::{InputSource, Preset, RandomInput};
use crate::steps::{Stats, Step, StepLog, Value};
use std::fmt;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run loaded; the display array holds fresh input
    Idle,
    /// Auto-advancing on scheduler ticks
    Running,
    /// Run loaded, advancing only on explicit requests
    Paused,
    /// Terminal step applied
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Complete => "complete",
        })
    }
}

/// Playback state machine over one run at a time
#[derive(Debug)]
pub struct Engine<S: Scheduler, G: InputSource> {
    settings: Settings,
    scheduler: S,
    source: G,
    /// Array the current run was computed from
    input: Vec<Value>,
    display: Vec<Value>,
    log: StepLog,
    stats: Option<Stats>,
    cursor: usize,
    phase: Phase,
    generation: u64,
}

impl<S: Scheduler, G: InputSource> Engine<S, G> {
    /// Validate `settings` and draw the first input from `source`
    pub fn new(settings: Settings, scheduler: S, mut source: G) -> Result<Self, PlaybackError> {
        settings.validate()?;
        let input = source.generate(settings.data_size, settings.range);
        Ok(Self::assemble(settings, scheduler, source, input))
    }

    /// Start from caller-supplied data instead of a generated array
    ///
    /// The data size bound does not apply to `input`; it only governs
    /// arrays drawn from `source` on later resets.
    pub fn with_input(
        settings: Settings,
        scheduler: S,
        source: G,
        input: Vec<Value>,
    ) -> Result<Self, PlaybackError> {
        settings.validate()?;
        Ok(Self::assemble(settings, scheduler, source, input))
    }

    fn assemble(settings: Settings, scheduler: S, source: G, input: Vec<Value>) -> Self {
        debug!(
            algorithm = settings.algorithm.id(),
            len = input.len(),
            interval_ms = settings.interval_ms,
            "playback engine ready"
        );
        Engine {
            settings,
            scheduler,
            source,
            display: input.clone(),
            input,
            log: StepLog::new(),
            stats: None,
            cursor: 0,
            phase: Phase::Idle,
            generation: 0,
        }
    }

    // ---- transitions ----

    /// Compute a run of the selected algorithm over the displayed array
    ///
    /// Allowed from `Idle` and `Complete`; leaves the engine `Paused` at
    /// cursor 0. A rejected input leaves every piece of state untouched.
    pub fn start(&mut self) -> Result<(), PlaybackError> {
        if !matches!(self.phase, Phase::Idle | Phase::Complete) {
            return Err(self.reject("start"));
        }
        self.load_run(self.settings.algorithm)?;
        self.phase = Phase::Paused;
        debug!(
            algorithm = self.settings.algorithm.id(),
            total = self.log.len(),
            "run started"
        );
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), PlaybackError> {
        if self.phase != Phase::Paused || self.cursor >= self.log.len() {
            return Err(self.reject("resume"));
        }
        self.phase = Phase::Running;
        self.schedule_next();
        debug!(cursor = self.cursor, generation = self.generation, "playback resumed");
        Ok(())
    }

    /// Stop automatic advancement. Pausing while already paused is a no-op.
    pub fn pause(&mut self) -> Result<(), PlaybackError> {
        match self.phase {
            Phase::Paused => Ok(()),
            Phase::Running => {
                self.cancel_pending();
                self.phase = Phase::Paused;
                debug!(cursor = self.cursor, "playback paused");
                Ok(())
            }
            _ => Err(self.reject("pause")),
        }
    }

    /// Apply exactly one step while paused
    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        if self.phase != Phase::Paused || self.cursor >= self.log.len() {
            return Err(self.reject("step forward"));
        }
        self.advance()
    }

    /// Apply up to `count` steps while paused, stopping early at the end of
    /// the log. Returns how many steps were applied.
    pub fn step_many(&mut self, count: usize) -> Result<usize, PlaybackError> {
        if count == 0 {
            return Ok(0);
        }
        self.step_forward()?;
        let mut applied = 1;
        while applied < count && self.phase == Phase::Paused {
            self.advance()?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Discard the current run and draw fresh input. Valid from any phase.
    pub fn reset(&mut self) {
        self.cancel_pending();
        self.input = self
            .source
            .generate(self.settings.data_size, self.settings.range);
        self.display = self.input.clone();
        self.log = StepLog::new();
        self.stats = None;
        self.cursor = 0;
        self.phase = Phase::Idle;
        debug!(
            len = self.input.len(),
            generation = self.generation,
            "playback reset"
        );
    }

    /// Select a different algorithm
    ///
    /// From `Idle` or `Complete` this only records the choice. From `Paused`
    /// the new algorithm is run over the displayed array and playback
    /// restarts at cursor 0. Rejected while `Running`.
    pub fn change_algorithm(&mut self, key: AlgorithmKey) -> Result<(), PlaybackError> {
        match self.phase {
            Phase::Running => Err(self.reject("change algorithm")),
            Phase::Paused => {
                self.load_run(key)?;
                self.settings.algorithm = key;
                debug!(algorithm = key.id(), total = self.log.len(), "algorithm switched mid-run");
                Ok(())
            }
            Phase::Idle | Phase::Complete => {
                self.settings.algorithm = key;
                debug!(algorithm = key.id(), "algorithm selected");
                Ok(())
            }
        }
    }

    /// Change the delay between automatic steps; applies from the next tick
    pub fn set_interval(&mut self, interval_ms: u64) -> Result<(), PlaybackError> {
        self.settings.interval_ms = check_interval(interval_ms)?;
        debug!(interval_ms, "interval changed");
        Ok(())
    }

    /// Change the generated array length and regenerate input
    ///
    /// Rejected while a run is in progress (running, or paused past its
    /// first step).
    pub fn set_data_size(&mut self, size: usize) -> Result<(), PlaybackError> {
        let size = check_data_size(size)?;
        if self.in_progress() {
            return Err(self.reject("change data size"));
        }
        self.settings.data_size = size;
        self.reset();
        Ok(())
    }

    /// Feed a tick delivered by the scheduler
    ///
    /// Returns `Ok(true)` when a step was applied. Ticks from an older
    /// generation, or arriving outside `Running`, are ignored. A step that
    /// cannot be applied leaves the engine `Paused` with the cursor unmoved.
    pub fn on_tick(&mut self, tick: Tick) -> Result<bool, PlaybackError> {
        if tick.generation() != self.generation || self.phase != Phase::Running {
            trace!(
                tick = tick.generation(),
                current = self.generation,
                phase = %self.phase,
                "stale tick ignored"
            );
            return Ok(false);
        }
        if self.cursor >= self.log.len() {
            self.phase = Phase::Complete;
            return Ok(false);
        }
        match self.advance() {
            Ok(()) => {
                if self.phase == Phase::Running {
                    self.schedule_next();
                }
                Ok(true)
            }
            Err(e) => {
                self.cancel_pending();
                self.phase = Phase::Paused;
                Err(e)
            }
        }
    }

    /// Poll the scheduler and process a due tick, if any
    pub fn pump(&mut self) -> Result<bool, PlaybackError> {
        match self.scheduler.poll() {
            Some(tick) => self.on_tick(tick),
            None => Ok(false),
        }
    }

    // ---- accessors ----

    pub fn display(&self) -> &[Value] {
        &self.display
    }

    /// Array the current run was computed from
    pub fn input(&self) -> &[Value] {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Steps in the current run; 0 when none is loaded
    pub fn total(&self) -> usize {
        self.log.len()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn algorithm(&self) -> AlgorithmKey {
        self.settings.algorithm
    }

    /// Totals of the current run
    pub fn stats(&self) -> Option<Stats> {
        self.stats
    }

    pub fn log(&self) -> &StepLog {
        &self.log
    }

    /// Next step to be applied
    pub fn current_step(&self) -> Option<&Step> {
        self.log.get(self.cursor)
    }

    /// Most recently applied step
    pub fn last_step(&self) -> Option<&Step> {
        self.cursor.checked_sub(1).and_then(|i| self.log.get(i))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Running, or paused past the first step
    pub fn in_progress(&self) -> bool {
        match self.phase {
            Phase::Running => true,
            Phase::Paused => self.cursor > 0,
            Phase::Idle | Phase::Complete => false,
        }
    }

    // ---- internals ----

    /// Compute a run of `key` over the display array and load it at cursor 0
    fn load_run(&mut self, key: AlgorithmKey) -> Result<(), PlaybackError> {
        let run = key.run(&self.display, &self.settings.policy)?;
        self.cancel_pending();
        self.input = self.display.clone();
        self.log = run.steps;
        self.stats = Some(run.stats);
        self.cursor = 0;
        Ok(())
    }

    fn advance(&mut self) -> Result<(), PlaybackError> {
        let cursor = self.cursor;
        let Some(step) = self.log.get(cursor) else {
            return Err(self.reject("advance"));
        };
        step.apply(&mut self.display)
            .map_err(|source| PlaybackError::CorruptStep { cursor, source })?;
        self.cursor += 1;
        if self.cursor == self.log.len() {
            self.cancel_pending();
            self.phase = Phase::Complete;
            debug!(total = self.log.len(), "run complete");
        }
        Ok(())
    }

    /// Issue a fresh tick; any earlier tick becomes stale
    fn schedule_next(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.scheduler
            .schedule(self.settings.interval(), Tick::new(self.generation));
    }

    fn cancel_pending(&mut self) {
        self.scheduler.cancel();
        self.generation = self.generation.wrapping_add(1);
    }

    fn reject(&self, operation: &'static str) -> PlaybackError {
        warn!(operation, phase = %self.phase, cursor = self.cursor, "transition rejected");
        PlaybackError::InvalidTransition {
            operation,
            phase: self.phase,
        }
    }
}

impl<S: Scheduler> Engine<S, RandomInput> {
    /// Change the shape of generated data and regenerate input
    ///
    /// Rejected while a run is in progress, like
    /// [`set_data_size`](Engine::set_data_size).
    pub fn set_preset(&mut self, preset: Preset) -> Result<(), PlaybackError> {
        if self.in_progress() {
            return Err(self.reject("change preset"));
        }
        self.settings.preset = preset;
        self.source.set_preset(preset);
        self.reset();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ValueRange;
    use std::time::Duration;

    /// Returns the same fixed array on every reset
    struct Fixed(Vec<Value>);

    impl InputSource for Fixed {
        fn generate(&mut self, _size: usize, _range: ValueRange) -> Vec<Value> {
            self.0.clone()
        }
    }

    fn engine(values: &[Value]) -> Engine<ManualScheduler, Fixed> {
        Engine::new(Settings::default(), ManualScheduler::new(), Fixed(values.to_vec()))
            .expect("default settings are valid")
    }

    #[test]
    fn test_start_loads_run_paused() {
        let mut engine = engine(&[3.0, 1.0, 2.0, 5.0, 4.0]);
        assert_eq!(engine.phase(), Phase::Idle);
        assert_eq!(engine.total(), 0);

        engine.start().expect("start from idle");
        assert_eq!(engine.phase(), Phase::Paused);
        assert_eq!(engine.cursor(), 0);
        assert!(engine.total() > 0);
        assert!(engine.stats().is_some());
        assert!(!engine.scheduler().is_pending());
    }

    #[test]
    fn test_pause_is_idempotent_but_not_from_idle() {
        let mut engine = engine(&[2.0, 1.0, 3.0, 4.0, 5.0]);
        assert!(matches!(
            engine.pause(),
            Err(PlaybackError::InvalidTransition { phase: Phase::Idle, .. })
        ));
        engine.start().expect("start");
        engine.pause().expect("already paused");
        assert_eq!(engine.phase(), Phase::Paused);
    }

    #[test]
    fn test_ticks_drive_running_to_complete() {
        let mut engine = engine(&[5.0, 4.0, 3.0, 2.0, 1.0]);
        engine.set_interval(10).expect("interval in range");
        engine.start().expect("start");
        engine.resume().expect("resume");

        let total = engine.total();
        for _ in 0..total {
            engine.scheduler_mut().advance(Duration::from_millis(10));
            assert!(engine.pump().expect("valid step"));
        }
        assert_eq!(engine.phase(), Phase::Complete);
        assert_eq!(engine.display(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(!engine.scheduler().is_pending());
    }

    #[test]
    fn test_corrupt_step_pauses_without_moving() {
        let mut engine = engine(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        engine.start().expect("start");

        let mut log = StepLog::new();
        log.push(Step::Init(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        log.push(Step::Swap(0, 9));
        log.push(Step::Complete(vec![1.0, 2.0, 3.0, 4.0, 5.0]));
        engine.log = log;

        engine.set_interval(0).expect("interval in range");
        engine.resume().expect("resume");
        assert!(engine.pump().expect("init applies"));

        let err = engine.pump().expect_err("swap index is out of bounds");
        assert!(matches!(err, PlaybackError::CorruptStep { cursor: 1, .. }));
        assert_eq!(engine.phase(), Phase::Paused);
        assert_eq!(engine.cursor(), 1);
        assert!(!engine.scheduler().is_pending());

        engine.reset();
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_change_algorithm_mid_run_restarts_from_display() {
        let mut engine = engine(&[4.0, 3.0, 5.0, 1.0, 2.0]);
        engine.start().expect("start");
        engine.step_many(6).expect("steps");
        let shown = engine.display().to_vec();

        engine
            .change_algorithm(AlgorithmKey::Insertion)
            .expect("switch while paused");
        assert_eq!(engine.algorithm(), AlgorithmKey::Insertion);
        assert_eq!(engine.cursor(), 0);
        assert_eq!(engine.input(), shown.as_slice());
        assert_eq!(engine.log().get(0), Some(&Step::Init(shown)));
    }
}
