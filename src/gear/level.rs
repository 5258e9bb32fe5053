//! Level and tier axes
//!
//! Equipment base levels, enhancement tiers, and refine levels. The same
//! level scale keys both gear pieces and the upgrade materials they consume.

use serde::{Deserialize, Serialize};

/// Base rarity/level of a gear piece; also the material-level axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EquipLevel {
    Lv45,
    Lv50,
    Lv55,
    Lv60,
    Lv65,
    Lv70,
}

impl EquipLevel {
    /// Numeric value of this level
    pub fn value(&self) -> u8 {
        match self {
            EquipLevel::Lv45 => 45,
            EquipLevel::Lv50 => 50,
            EquipLevel::Lv55 => 55,
            EquipLevel::Lv60 => 60,
            EquipLevel::Lv65 => 65,
            EquipLevel::Lv70 => 70,
        }
    }

    /// Parse a numeric value back into a level
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            45 => Some(EquipLevel::Lv45),
            50 => Some(EquipLevel::Lv50),
            55 => Some(EquipLevel::Lv55),
            60 => Some(EquipLevel::Lv60),
            65 => Some(EquipLevel::Lv65),
            70 => Some(EquipLevel::Lv70),
            _ => None,
        }
    }

    /// All levels in display order (highest first)
    pub fn all() -> &'static [EquipLevel] {
        &[
            EquipLevel::Lv70,
            EquipLevel::Lv65,
            EquipLevel::Lv60,
            EquipLevel::Lv55,
            EquipLevel::Lv50,
            EquipLevel::Lv45,
        ]
    }

    /// Position of this level within `all()` (for indexing table rows)
    pub fn index(&self) -> usize {
        match self {
            EquipLevel::Lv70 => 0,
            EquipLevel::Lv65 => 1,
            EquipLevel::Lv60 => 2,
            EquipLevel::Lv55 => 3,
            EquipLevel::Lv50 => 4,
            EquipLevel::Lv45 => 5,
        }
    }
}

/// Enhancement progress of a gear piece, distinct from its base level.
///
/// Kept numeric rather than enumerated: upgrading always computes
/// `min(current + 5, 70)`, even from tiers the requirement tables never
/// define (a fresh piece sits at 0 and its first upgrade lands on 5).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EnhanceTier(u8);

impl EnhanceTier {
    /// Terminal tier; upgrades never pass it
    pub const MAX: EnhanceTier = EnhanceTier(70);

    pub fn new(value: u8) -> Self {
        EnhanceTier(value.min(70))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// The tier one upgrade step ahead, capped at 70
    pub fn next(&self) -> Self {
        EnhanceTier((self.0 + 5).min(70))
    }

    pub fn is_max(&self) -> bool {
        *self == Self::MAX
    }

    /// Tiers offered by the enhance selector
    pub fn options() -> &'static [EnhanceTier] {
        &[
            EnhanceTier(70),
            EnhanceTier(65),
            EnhanceTier(60),
            EnhanceTier(55),
            EnhanceTier(50),
            EnhanceTier(45),
            EnhanceTier(40),
            EnhanceTier(0),
        ]
    }
}

/// Refine progress, 0 through 8; independent of enhancement, no material cost
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RefineLevel(u8);

impl RefineLevel {
    /// Highest refine step
    pub const MAX: RefineLevel = RefineLevel(8);

    pub fn new(value: u8) -> Self {
        RefineLevel(value.min(8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_tier_advance() {
        assert_eq!(EnhanceTier::new(40).next(), EnhanceTier::new(45));
        assert_eq!(EnhanceTier::new(65).next(), EnhanceTier::new(70));
        assert_eq!(EnhanceTier::new(70).next(), EnhanceTier::new(70)); // terminal
    }

    #[test]
    fn test_enhance_tier_clamps_to_cap() {
        assert_eq!(EnhanceTier::new(200).value(), 70);
    }

    #[test]
    fn test_refine_level_clamps() {
        assert_eq!(RefineLevel::new(8).value(), 8);
        assert_eq!(RefineLevel::new(12).value(), 8);
    }

    #[test]
    fn test_equip_level_roundtrip() {
        for &level in EquipLevel::all() {
            assert_eq!(EquipLevel::from_value(level.value()), Some(level));
        }
        assert_eq!(EquipLevel::from_value(40), None);
    }
}
