//! Equipment slots
//!
//! The six fixed gear categories a character can equip. The slot type is
//! the sole identifier for a character's gear pieces.

use serde::{Deserialize, Serialize};

/// The fixed equipment slot categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotType {
    Weapon,
    Helmet,
    Garment,
    Gloves,
    Leggings,
    Necklace,
}

impl SlotType {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            SlotType::Weapon => "Weapon",
            SlotType::Helmet => "Helmet",
            SlotType::Garment => "Garment",
            SlotType::Gloves => "Gloves",
            SlotType::Leggings => "Leggings",
            SlotType::Necklace => "Necklace",
        }
    }

    /// Get all slots in display order
    pub fn all() -> &'static [SlotType] {
        &[
            SlotType::Weapon,
            SlotType::Helmet,
            SlotType::Garment,
            SlotType::Gloves,
            SlotType::Leggings,
            SlotType::Necklace,
        ]
    }
}
