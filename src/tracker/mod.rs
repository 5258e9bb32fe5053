//! Tracker state
//!
//! The character roster, the single state container, and the command
//! entry point all mutation flows through.

pub mod character;
pub mod state;
pub mod command;

pub use character::Character;
pub use state::{ThemeMode, TrackerState};
pub use command::{apply, Command};
