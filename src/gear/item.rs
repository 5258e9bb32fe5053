//! Gear pieces
//!
//! The per-slot equipment state a character tracks.

use serde::{Deserialize, Serialize};

use super::level::{EnhanceTier, EquipLevel, RefineLevel};

/// One tracked equipment piece: base level, enhancement, and refine state.
///
/// The three axes are independent; setting one never re-validates the
/// others (an enhance tier above the base level is representable and simply
/// yields zero remaining cost in the tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearItem {
    pub level: EquipLevel,
    pub enhance: EnhanceTier,
    pub refine: RefineLevel,
}

impl GearItem {
    /// A fresh piece at the given base level, not yet enhanced or refined
    pub fn new(level: EquipLevel) -> Self {
        Self {
            level,
            enhance: EnhanceTier::default(),
            refine: RefineLevel::default(),
        }
    }

    /// Whether the piece has been enhanced all the way to its own level
    pub fn is_fully_enhanced(&self) -> bool {
        self.enhance.value() >= self.level.value()
    }
}

impl Default for GearItem {
    fn default() -> Self {
        Self::new(EquipLevel::Lv70)
    }
}
