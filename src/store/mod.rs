//! Persistence
//!
//! A string-keyed get/set store and the typed load/save layer on top of
//! it. Loading never fails: corrupt or missing values fall back to the
//! built-in defaults silently.

pub mod kv;
pub mod persist;

pub use kv::{FileStore, KvStore, MemoryStore, StoreError};
pub use persist::{
    load_state, save_state, CHARACTERS_KEY, FACTORS_KEY, MATERIAL_INVENTORY_KEY, THEME_KEY,
};
