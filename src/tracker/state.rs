//! The tracker state container
//!
//! One immutable-by-convention snapshot of everything the tracker shows.
//! Consumers keep references to old snapshots; mutation always produces a
//! fresh one via [`crate::tracker::apply`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::character::Character;

/// UI color scheme preference, persisted under the `themeMode` key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Everything the tracker persists and displays
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerState {
    pub characters: Vec<Character>,
    /// Factor quantity counters keyed by catalog id (e.g. `vampire_3`)
    pub factor_counts: HashMap<String, u32>,
    pub theme: ThemeMode,
}

impl TrackerState {
    /// Find a character by id
    pub fn character(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub(crate) fn character_index(&self, id: &str) -> Option<usize> {
        self.characters.iter().position(|c| c.id == id)
    }

    /// Quantity held of a catalog factor, zero when never touched
    pub fn factor_count(&self, factor_id: &str) -> u32 {
        self.factor_counts.get(factor_id).copied().unwrap_or(0)
    }
}
