//! Reusable ratatui widgets

pub mod gear_table;
pub mod material_table;

pub use gear_table::{GearField, GearTableWidget};
pub use material_table::MaterialTableWidget;
