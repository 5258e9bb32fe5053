//! Seed data

pub mod defaults;

pub use defaults::{default_characters, default_state};
