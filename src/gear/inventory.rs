//! Material inventory
//!
//! Per-slot counts of upgrade materials, keyed by material level.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::level::EquipLevel;
use super::slot::SlotType;

/// Upgrade-material counts for one character.
///
/// Counts are never negative: decrements clamp at zero, and absent entries
/// read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialInventory {
    counts: HashMap<SlotType, HashMap<EquipLevel, u32>>,
}

impl MaterialInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many materials of this level are held for this slot
    pub fn count(&self, slot: SlotType, level: EquipLevel) -> u32 {
        self.counts
            .get(&slot)
            .and_then(|row| row.get(&level))
            .copied()
            .unwrap_or(0)
    }

    /// Adjust a count by a signed delta, clamping the result at zero
    pub fn adjust(&mut self, slot: SlotType, level: EquipLevel, delta: i64) {
        let current = self.count(slot, level) as i64;
        let next = (current + delta).clamp(0, u32::MAX as i64) as u32;
        self.counts.entry(slot).or_default().insert(level, next);
    }
}
