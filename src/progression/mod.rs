//! Progression model
//!
//! Requirement tables and the pure engine that derives displayed
//! quantities and applies upgrade transitions.

pub mod tables;
pub mod engine;

pub use tables::{cumulative_cost, next_step_cost};
pub use engine::{apply_upgrade, cumulative_need, material_row, shortfall, MaterialRow};
