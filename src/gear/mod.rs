//! Gear domain types
//!
//! Slots, level axes, equipment pieces, and material inventories.

pub mod slot;
pub mod level;
pub mod item;
pub mod inventory;

pub use slot::SlotType;
pub use level::{EquipLevel, EnhanceTier, RefineLevel};
pub use item::GearItem;
pub use inventory::MaterialInventory;
