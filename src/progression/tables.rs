//! Requirement tables
//!
//! Static lookup data for enhancement costs. Lookups return `Option` so
//! that "no entry" stays distinguishable from a defined zero; both display
//! as zero, and absence is never an error.

use crate::gear::{EnhanceTier, EquipLevel};

/// Materials consumed to advance one enhancement step from `from`.
///
/// Only tiers 40 through 65 have defined costs; everything else (including
/// the terminal tier 70) has no entry.
pub fn next_step_cost(from: EnhanceTier, material: EquipLevel) -> Option<u32> {
    use EquipLevel::*;

    let quantity = match (from.value(), material) {
        (40, Lv45) => 1,
        (45, Lv50) => 1,
        (45, Lv45) => 2,
        (50, Lv55) => 1,
        (50, Lv50) => 2,
        (50, Lv45) => 3,
        (55, Lv60) => 1,
        (55, Lv55) => 2,
        (55, Lv50) => 3,
        (60, Lv65) => 1,
        (60, Lv60) => 2,
        (60, Lv55) => 3,
        (65, Lv70) => 1,
        (65, Lv65) => 2,
        (65, Lv60) => 3,
        _ => return None,
    };
    Some(quantity)
}

/// One row of the cumulative table: total materials still needed to take a
/// piece of `level` from enhancement `tier` to its own level cap.
struct CumulativeRow {
    level: u8,
    tier: u8,
    /// Costs per material level, in `EquipLevel::all()` order (70 → 45)
    costs: [u32; 6],
}

const CUMULATIVE_COSTS: &[CumulativeRow] = &[
    // Level 70 pieces
    CumulativeRow { level: 70, tier: 40, costs: [1, 3, 6, 6, 6, 6] },
    CumulativeRow { level: 70, tier: 45, costs: [1, 3, 6, 6, 6, 5] },
    CumulativeRow { level: 70, tier: 50, costs: [1, 3, 6, 6, 5, 3] },
    CumulativeRow { level: 70, tier: 55, costs: [1, 3, 6, 5, 3, 0] },
    CumulativeRow { level: 70, tier: 60, costs: [1, 3, 5, 3, 0, 0] },
    CumulativeRow { level: 70, tier: 65, costs: [1, 2, 3, 0, 0, 0] },
    CumulativeRow { level: 70, tier: 70, costs: [0, 0, 0, 0, 0, 0] },
    // Level 65 pieces
    CumulativeRow { level: 65, tier: 40, costs: [0, 1, 3, 6, 6, 6] },
    CumulativeRow { level: 65, tier: 45, costs: [0, 1, 3, 6, 6, 5] },
    CumulativeRow { level: 65, tier: 50, costs: [0, 1, 3, 6, 5, 3] },
    CumulativeRow { level: 65, tier: 55, costs: [0, 1, 3, 5, 3, 0] },
    CumulativeRow { level: 65, tier: 60, costs: [0, 1, 2, 3, 0, 0] },
    CumulativeRow { level: 65, tier: 65, costs: [0, 0, 0, 0, 0, 0] },
    // Level 60 pieces
    CumulativeRow { level: 60, tier: 40, costs: [0, 0, 1, 3, 6, 6] },
    CumulativeRow { level: 60, tier: 45, costs: [0, 0, 1, 3, 6, 5] },
    CumulativeRow { level: 60, tier: 50, costs: [0, 0, 1, 3, 5, 3] },
    CumulativeRow { level: 60, tier: 55, costs: [0, 0, 1, 2, 3, 0] },
    CumulativeRow { level: 60, tier: 60, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 60, tier: 65, costs: [0, 0, 0, 0, 0, 0] },
    // Level 55 pieces
    CumulativeRow { level: 55, tier: 40, costs: [0, 0, 0, 1, 3, 6] },
    CumulativeRow { level: 55, tier: 45, costs: [0, 0, 0, 1, 3, 5] },
    CumulativeRow { level: 55, tier: 50, costs: [0, 0, 0, 1, 2, 3] },
    CumulativeRow { level: 55, tier: 55, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 55, tier: 60, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 55, tier: 65, costs: [0, 0, 0, 0, 0, 0] },
    // Level 50 pieces
    CumulativeRow { level: 50, tier: 40, costs: [0, 0, 0, 0, 1, 3] },
    CumulativeRow { level: 50, tier: 45, costs: [0, 0, 0, 0, 1, 2] },
    CumulativeRow { level: 50, tier: 50, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 50, tier: 55, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 50, tier: 60, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 50, tier: 65, costs: [0, 0, 0, 0, 0, 0] },
    // Level 45 pieces
    CumulativeRow { level: 45, tier: 40, costs: [0, 0, 0, 0, 0, 1] },
    CumulativeRow { level: 45, tier: 45, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 45, tier: 50, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 45, tier: 55, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 45, tier: 60, costs: [0, 0, 0, 0, 0, 0] },
    CumulativeRow { level: 45, tier: 65, costs: [0, 0, 0, 0, 0, 0] },
];

/// Total materials still required to reach the piece's level cap from the
/// current enhancement tier.
///
/// `None` when the (level, tier) row is undefined (tiers below 40 never
/// have rows); defined zeros come back as `Some(0)`.
pub fn cumulative_cost(
    item_level: EquipLevel,
    tier: EnhanceTier,
    material: EquipLevel,
) -> Option<u32> {
    CUMULATIVE_COSTS
        .iter()
        .find(|row| row.level == item_level.value() && row.tier == tier.value())
        .map(|row| row.costs[material.index()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_step_cost_at_tier_60() {
        assert_eq!(next_step_cost(EnhanceTier::new(60), EquipLevel::Lv65), Some(1));
        assert_eq!(next_step_cost(EnhanceTier::new(60), EquipLevel::Lv60), Some(2));
        assert_eq!(next_step_cost(EnhanceTier::new(60), EquipLevel::Lv55), Some(3));
        assert_eq!(next_step_cost(EnhanceTier::new(60), EquipLevel::Lv70), None);
    }

    #[test]
    fn test_next_step_cost_undefined_tiers() {
        for &material in EquipLevel::all() {
            assert_eq!(next_step_cost(EnhanceTier::new(0), material), None);
            assert_eq!(next_step_cost(EnhanceTier::new(5), material), None);
            assert_eq!(next_step_cost(EnhanceTier::new(70), material), None);
        }
    }

    #[test]
    fn test_cumulative_cost_distinguishes_absence_from_zero() {
        // Defined zero: a level-55 piece at tier 55 needs nothing more
        assert_eq!(
            cumulative_cost(EquipLevel::Lv55, EnhanceTier::new(55), EquipLevel::Lv45),
            Some(0)
        );
        // No row at all below tier 40
        assert_eq!(
            cumulative_cost(EquipLevel::Lv55, EnhanceTier::new(0), EquipLevel::Lv45),
            None
        );
    }

    #[test]
    fn test_cumulative_cost_level_70_column() {
        // Only level-70 pieces ever consume level-70 materials
        assert_eq!(
            cumulative_cost(EquipLevel::Lv70, EnhanceTier::new(40), EquipLevel::Lv70),
            Some(1)
        );
        assert_eq!(
            cumulative_cost(EquipLevel::Lv65, EnhanceTier::new(40), EquipLevel::Lv70),
            Some(0)
        );
    }

    #[test]
    fn test_cumulative_cost_decreases_with_tier() {
        // For every defined item level, the remaining total never grows as
        // the tier climbs in +5 steps
        for &item_level in EquipLevel::all() {
            for &material in EquipLevel::all() {
                let mut tier = 40u8;
                while tier < 65 {
                    let at = cumulative_cost(
                        item_level,
                        EnhanceTier::new(tier),
                        material,
                    );
                    let after = cumulative_cost(
                        item_level,
                        EnhanceTier::new(tier + 5),
                        material,
                    );
                    if let (Some(a), Some(b)) = (at, after) {
                        assert!(
                            b <= a,
                            "cumulative cost rose for level {} tier {} material {}",
                            item_level.value(),
                            tier,
                            material.value()
                        );
                    }
                    tier += 5;
                }
            }
        }
    }

    #[test]
    fn test_cumulative_matches_summed_steps_for_level_70() {
        // The cumulative table for a level-70 piece equals the sum of the
        // per-step costs over the remaining tiers
        for &material in EquipLevel::all() {
            let mut tier = 40u8;
            while tier <= 70 {
                let mut expected = 0;
                let mut step = tier;
                while step < 70 {
                    expected += next_step_cost(EnhanceTier::new(step), material).unwrap_or(0);
                    step += 5;
                }
                assert_eq!(
                    cumulative_cost(EquipLevel::Lv70, EnhanceTier::new(tier), material),
                    Some(expected),
                    "mismatch at tier {} material {}",
                    tier,
                    material.value()
                );
                tier += 5;
            }
        }
    }
}
