//! Geartrack - a terminal equipment progression tracker
//!
//! Tracks gear levels, enhancement tiers, and upgrade materials per
//! character, plus a factor collection, with everything persisted
//! between sessions.

pub mod data;
pub mod factors;
pub mod gear;
pub mod progression;
pub mod store;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use tracker::{apply, Command, TrackerState};
pub use ui::App;
