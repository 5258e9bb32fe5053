//! Characters
//!
//! A character carries exactly one gear piece per slot and one material
//! inventory.

use std::collections::HashMap;

use crate::gear::{GearItem, MaterialInventory, SlotType};

/// One tracked character
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: String,
    pub name: String,
    /// Gear keyed by slot type; the slot is the sole identifier
    pub gear: HashMap<SlotType, GearItem>,
    pub inventory: MaterialInventory,
    /// Whether the player holds the character's agent (display-only flag)
    pub have_agent: bool,
}

impl Character {
    /// A character with a full default loadout and empty inventory
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        let gear = SlotType::all()
            .iter()
            .map(|&slot| (slot, GearItem::default()))
            .collect();
        Self {
            id: id.into(),
            name: name.into(),
            gear,
            inventory: MaterialInventory::new(),
            have_agent: false,
        }
    }

    /// Restore the one-piece-per-slot invariant after loading external data
    pub fn normalize(&mut self) {
        for &slot in SlotType::all() {
            self.gear.entry(slot).or_default();
        }
    }
}
