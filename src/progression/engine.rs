//! Progression engine
//!
//! Pure derivations over gear state plus the upgrade transition. Nothing
//! here can fail: missing table entries read as zero and inventory
//! deductions clamp at zero.

use crate::gear::{EquipLevel, GearItem, MaterialInventory, SlotType};
use crate::tracker::Character;

use super::tables;

/// Display-facing quantities for one material level of one slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaterialRow {
    pub level: EquipLevel,
    /// Total still needed to reach the piece's level cap
    pub total_needed: u32,
    /// Missing for the next single enhancement step
    pub shortfall: u32,
    /// Currently held
    pub have: u32,
}

/// Materials still missing for the next enhancement step of this piece.
///
/// Zero when the player holds enough, and zero when the current tier has
/// no defined cost at all.
pub fn shortfall(
    item: &GearItem,
    inventory: &MaterialInventory,
    slot: SlotType,
    material: EquipLevel,
) -> u32 {
    let needed = tables::next_step_cost(item.enhance, material).unwrap_or(0);
    let have = inventory.count(slot, material);
    needed.saturating_sub(have)
}

/// Total materials of this level still needed to fully enhance the piece.
///
/// Zero below tier 40 (no cumulative rows are defined there) and zero once
/// the tier has reached the piece's own level.
pub fn cumulative_need(item: &GearItem, material: EquipLevel) -> u32 {
    tables::cumulative_cost(item.level, item.enhance, material).unwrap_or(0)
}

/// Bundle the three displayed quantities for one material level
pub fn material_row(
    item: &GearItem,
    inventory: &MaterialInventory,
    slot: SlotType,
    material: EquipLevel,
) -> MaterialRow {
    MaterialRow {
        level: material,
        total_needed: cumulative_need(item, material),
        shortfall: shortfall(item, inventory, slot, material),
        have: inventory.count(slot, material),
    }
}

/// Apply one enhancement step to the piece in `slot`, consuming materials.
///
/// Returns a new character snapshot; the input is never mutated. Every
/// defined cost for the current tier is deducted from that slot's
/// inventory row, clamped at zero. Deduction is not gated on having
/// enough. A slot the character does not carry is a silent no-op. The tier
/// advances by `min(tier + 5, 70)` even when the current tier has no cost
/// entry; the tests below assert that asymmetry rather than guard against
/// it.
pub fn apply_upgrade(character: &Character, slot: SlotType) -> Character {
    let Some(item) = character.gear.get(&slot) else {
        return character.clone();
    };
    let tier = item.enhance;

    let mut next = character.clone();
    for &material in EquipLevel::all() {
        if let Some(quantity) = tables::next_step_cost(tier, material) {
            next.inventory.adjust(slot, material, -(quantity as i64));
        }
    }
    if let Some(piece) = next.gear.get_mut(&slot) {
        piece.enhance = tier.next();
    }
    next
}
