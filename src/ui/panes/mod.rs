//! TUI pane rendering modules
//!
//! Each pane is a stateless `render_*` function that draws one region of the
//! frame from borrowed engine state.
//!
//! # Pane Modules
//!
//! - [`bars`]: one bar per element, highlighted by the last applied step
//! - [`stats`]: run counters, playback settings and the comparison table
//! - [`log`]: scrolling window over the step log around the cursor
//! - [`status`]: status bar with step counter, message and keybindings

pub mod bars;
pub mod log;
pub mod stats;
pub mod status;

pub use bars::render_bars_pane;
pub use log::render_log_pane;
pub use stats::{render_stats_pane, StatsView};
pub use status::render_status_bar;
