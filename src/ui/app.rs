//! Main TUI application state and logic

use crate::algorithms::{compare_all, Comparison};
use crate::config::{DATA_SIZE_RANGE, INTERVAL_RANGE_MS};
use crate::input::RandomInput;
use crate::playback::{Engine, IntervalScheduler, Phase, PlaybackError};
use crate::steps::Termination;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input between frames
const FRAME: Duration = Duration::from_millis(50);

/// Most steps applied between two frames when the interval is very short
const MAX_STEPS_PER_FRAME: usize = 256;

/// Interval change per `+`/`-` press
const INTERVAL_STEP_MS: u64 = 25;

pub type SortEngine = Engine<IntervalScheduler, RandomInput>;

/// The main application state
pub struct App {
    pub engine: SortEngine,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub is_error: bool,

    /// Last comparison table, shown until the next reset
    pub comparison: Option<Vec<Comparison>>,
}

impl App {
    pub fn new(engine: SortEngine) -> Self {
        App {
            engine,
            should_quit: false,
            status_message: String::from("Ready! Press Enter to sort"),
            is_error: false,
            comparison: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.drain_ticks();

            if event::poll(self.poll_timeout())? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Apply every due tick, up to the per-frame budget
    fn drain_ticks(&mut self) {
        if self.engine.phase() != Phase::Running {
            return;
        }
        for _ in 0..MAX_STEPS_PER_FRAME {
            match self.engine.pump() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.report(e);
                    break;
                }
            }
        }
        if self.engine.phase() == Phase::Complete {
            match self.engine.log().termination() {
                Some(Termination::IterationCapExceeded) => self.say("Gave up: shuffle limit reached"),
                _ => self.say("Sorted!"),
            }
        }
    }

    /// Wait no longer than the next scheduled step
    fn poll_timeout(&self) -> Duration {
        match self.engine.scheduler().next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(FRAME),
            None => FRAME,
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        let engine = &self.engine;
        let settings = engine.settings();

        super::panes::render_bars_pane(
            frame,
            columns[0],
            engine.display(),
            engine.last_step(),
            engine.algorithm().display_name(),
        );

        super::panes::render_stats_pane(
            frame,
            right_rows[0],
            &super::panes::StatsView {
                algorithm: engine.algorithm(),
                phase: engine.phase(),
                cursor: engine.cursor(),
                total: engine.total(),
                stats: engine.stats(),
                data_size: settings.data_size,
                interval_ms: settings.interval_ms,
                preset: settings.preset,
                comparison: self.comparison.as_deref(),
            },
        );

        super::panes::render_log_pane(frame, right_rows[1], engine.log(), engine.cursor());

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            engine.cursor(),
            engine.total(),
            engine.phase(),
            self.is_error,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Enter => self.start(),
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Right => self.step(1),
            KeyCode::Char(c @ '1'..='9') => match c.to_digit(10) {
                Some(n) => self.step(n as usize),
                None => Ok(()),
            },
            KeyCode::Tab => self.change_algorithm(true),
            KeyCode::BackTab => self.change_algorithm(false),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_interval(false),
            KeyCode::Char('-') => self.adjust_interval(true),
            KeyCode::Char(']') => self.resize(true),
            KeyCode::Char('[') => self.resize(false),
            KeyCode::Char('p') => self.cycle_preset(),
            KeyCode::Char('c') => {
                self.compare();
                Ok(())
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.comparison = None;
                self.say("New data");
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.report(e);
        }
    }

    fn start(&mut self) -> Result<(), PlaybackError> {
        self.engine.start()?;
        self.say(&format!(
            "{} recorded {} steps",
            self.engine.algorithm().display_name(),
            self.engine.total()
        ));
        Ok(())
    }

    /// Space: begin a run, or pause/resume the current one
    fn toggle_play(&mut self) -> Result<(), PlaybackError> {
        match self.engine.phase() {
            Phase::Idle | Phase::Complete => {
                self.engine.start()?;
                self.engine.resume()?;
                self.say("Playing...");
            }
            Phase::Paused => {
                self.engine.resume()?;
                self.say("Playing...");
            }
            Phase::Running => {
                self.engine.pause()?;
                self.say("Paused");
            }
        }
        Ok(())
    }

    /// Step forward `n` times, pausing and starting a run first if needed
    fn step(&mut self, n: usize) -> Result<(), PlaybackError> {
        match self.engine.phase() {
            Phase::Running => self.engine.pause()?,
            Phase::Idle => self.engine.start()?,
            Phase::Paused => {}
            Phase::Complete => {
                self.say("Already at the last step. Press Enter to sort again");
                return Ok(());
            }
        }
        let stepped = self.engine.step_many(n)?;
        self.say(&format!("Stepped forward {} step(s)", stepped));
        Ok(())
    }

    fn change_algorithm(&mut self, forward: bool) -> Result<(), PlaybackError> {
        let current = self.engine.algorithm();
        let key = if forward { current.next() } else { current.prev() };
        self.engine.change_algorithm(key)?;
        self.say(&format!("Algorithm: {}", key.display_name()));
        Ok(())
    }

    /// Lengthen (`slower`) or shorten the delay between steps
    fn adjust_interval(&mut self, slower: bool) -> Result<(), PlaybackError> {
        let current = self.engine.settings().interval_ms;
        let next = if slower {
            (current + INTERVAL_STEP_MS).min(*INTERVAL_RANGE_MS.end())
        } else {
            current
                .saturating_sub(INTERVAL_STEP_MS)
                .max(*INTERVAL_RANGE_MS.start())
        };
        self.engine.set_interval(next)?;
        self.say(&format!("Interval: {} ms", next));
        Ok(())
    }

    /// Double or halve the data size within bounds
    fn resize(&mut self, grow: bool) -> Result<(), PlaybackError> {
        let current = self.engine.settings().data_size;
        let next = if grow {
            current.saturating_mul(2).min(*DATA_SIZE_RANGE.end())
        } else {
            (current / 2).max(*DATA_SIZE_RANGE.start())
        };
        self.engine.set_data_size(next)?;
        self.comparison = None;
        self.say(&format!("Data size: {}", next));
        Ok(())
    }

    fn cycle_preset(&mut self) -> Result<(), PlaybackError> {
        let next = self.engine.settings().preset.next();
        self.engine.set_preset(next)?;
        self.comparison = None;
        self.say(&format!("Preset: {}", next));
        Ok(())
    }

    /// Run every algorithm over the array the current run started from
    fn compare(&mut self) {
        let rows = compare_all(self.engine.input(), &self.engine.settings().policy);
        let failed = rows.iter().filter(|r| r.result.is_err()).count();
        self.comparison = Some(rows);
        if failed > 0 {
            self.say(&format!("Compared algorithms ({} rejected the input)", failed));
        } else {
            self.say("Compared algorithms");
        }
    }

    fn say(&mut self, message: &str) {
        self.status_message = message.to_string();
        self.is_error = false;
    }

    fn report(&mut self, error: PlaybackError) {
        tracing::warn!(error = %error, "action failed");
        self.status_message = error.to_string();
        self.is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::input::Preset;
    use crossterm::event::KeyModifiers;

    fn app() -> App {
        let engine = Engine::with_input(
            Settings::default(),
            IntervalScheduler::new(),
            RandomInput::seeded(5, Preset::Random),
            vec![3.0, 1.0, 2.0, 5.0, 4.0],
        )
        .expect("default settings are valid");
        App::new(engine)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_step_keys_start_a_run_from_idle() {
        let mut app = app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.engine.phase(), Phase::Paused);
        assert_eq!(app.engine.cursor(), 3);
        assert!(!app.is_error);
    }

    #[test]
    fn test_step_keys_after_completion_are_not_errors() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.engine.step_many(usize::MAX).expect("paused run steps to the end");
        assert_eq!(app.engine.phase(), Phase::Complete);
        let cursor = app.engine.cursor();

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('9'));
        assert!(!app.is_error, "{}", app.status_message);
        assert_eq!(app.engine.phase(), Phase::Complete);
        assert_eq!(app.engine.cursor(), cursor);
    }
}
