//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state and the keyboard/tick event loop
//! - **[`panes`]**: stateless render functions for each visible pane (bars,
//!   stats, step log, status bar)
//! - **[`theme`]**: centralized color palette, including the step-kind colours
//!
//! The entry point for consumers is [`App`]: construct it with a playback
//! [`Engine`] and call [`App::run`] to start the event loop.
//!
//! [`Engine`]: crate::playback::Engine
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
