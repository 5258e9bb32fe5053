//! User Interface module
//!
//! Terminal UI using ratatui. One [`App`] owns the tracker state and the
//! store; every keystroke that changes state goes through the command
//! layer and is persisted immediately.

pub mod app;
pub mod theme;
pub mod widgets;

pub use app::App;
