//! Timer port for the playback engine
//!
//! The engine never sleeps. It asks a [`Scheduler`] to deliver a [`Tick`]
//! after a delay and the host hands due ticks back through
//! [`Engine::pump`](super::Engine::pump) or [`Engine::on_tick`](super::Engine::on_tick).
//! At most one tick is pending at a time: scheduling replaces the previous one.
//!
//! - [`IntervalScheduler`]: wall-clock deadlines, used by the terminal UI
//! - [`ManualScheduler`]: virtual clock advanced by hand, for tests

use std::time::{Duration, Instant};

/// Token delivered when a scheduled advance is due.
///
/// Carries the engine generation it was issued under; a tick from an older
/// generation is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    generation: u64,
}

impl Tick {
    pub(crate) fn new(generation: u64) -> Self {
        Tick { generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub trait Scheduler {
    /// Deliver `tick` once `delay` has elapsed, replacing any pending tick
    fn schedule(&mut self, delay: Duration, tick: Tick);

    /// Drop the pending tick, if any
    fn cancel(&mut self);

    /// Take the pending tick if it is due
    fn poll(&mut self) -> Option<Tick>;

    fn is_pending(&self) -> bool;
}

/// Wall-clock scheduler polled from an event loop
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    pending: Option<(Instant, Tick)>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        IntervalScheduler { pending: None }
    }

    /// When the pending tick becomes due
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.map(|(deadline, _)| deadline)
    }
}

impl Scheduler for IntervalScheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.pending = Some((Instant::now() + delay, tick));
    }

    fn cancel(&mut self) {
        self.pending = None;
    }

    fn poll(&mut self) -> Option<Tick> {
        match self.pending {
            Some((deadline, tick)) if Instant::now() >= deadline => {
                self.pending = None;
                Some(tick)
            }
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Scheduler driven by a virtual clock
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Duration,
    pending: Option<(Duration, Tick)>,
    scheduled: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the virtual clock forward
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// The pending tick, without consuming it
    pub fn pending_tick(&self) -> Option<Tick> {
        self.pending.map(|(_, tick)| tick)
    }

    /// Virtual time remaining until the pending tick is due
    pub fn time_until_due(&self) -> Option<Duration> {
        self.pending
            .map(|(due, _)| due.saturating_sub(self.now))
    }

    /// Total `schedule` calls so far
    pub fn scheduled_count(&self) -> usize {
        self.scheduled
    }

    /// `cancel` calls that actually dropped a pending tick
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay: Duration, tick: Tick) {
        self.scheduled += 1;
        self.pending = Some((self.now + delay, tick));
    }

    fn cancel(&mut self) {
        if self.pending.take().is_some() {
            self.cancelled += 1;
        }
    }

    fn poll(&mut self) -> Option<Tick> {
        match self.pending {
            Some((due, tick)) if self.now >= due => {
                self.pending = None;
                Some(tick)
            }
            _ => None,
        }
    }

    fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
