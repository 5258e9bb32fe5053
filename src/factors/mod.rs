//! Factor catalog
//!
//! Data-only reference content: factor families, per-level bonuses, and
//! the combination table. Quantities live in the tracker state.

pub mod catalog;

pub use catalog::{catalog, factor_id, Combination, FactorDef, MAX_FACTOR_LEVEL};
