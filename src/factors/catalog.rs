//! Factor definitions
//!
//! Six factor families, nine levels each. Combinations list which families
//! fuse into which bonus effect; nothing here is computed, it is shown as
//! reference alongside the quantity counters.

/// Highest factor level
pub const MAX_FACTOR_LEVEL: u8 = 9;

/// One factor family
#[derive(Debug, Clone, Copy)]
pub struct FactorDef {
    pub name: &'static str,
    /// The stat the factor boosts
    pub trait_name: &'static str,
    /// Bonus value at levels 1 through 9
    pub bonuses: [u32; 9],
    pub combinations: &'static [Combination],
}

/// A fusion recipe: these families together yield the named effect
#[derive(Debug, Clone, Copy)]
pub struct Combination {
    pub factors: &'static [&'static str],
    pub result: &'static str,
}

impl FactorDef {
    /// Bonus value at a given level (1-based); zero outside the range
    pub fn bonus(&self, level: u8) -> u32 {
        if (1..=MAX_FACTOR_LEVEL).contains(&level) {
            self.bonuses[(level - 1) as usize]
        } else {
            0
        }
    }
}

/// Counter key for one (family, level) pair, e.g. `factor_vampire_3`
pub fn factor_id(name: &str, level: u8) -> String {
    format!("factor_{}_{}", name.to_lowercase(), level)
}

/// The full factor catalog
pub fn catalog() -> &'static [FactorDef] {
    CATALOG
}

const CATALOG: &[FactorDef] = &[
    FactorDef {
        name: "Vampire",
        trait_name: "Leech",
        bonuses: [10, 20, 40, 70, 120, 200, 300, 520, 780],
        combinations: &[
            Combination { factors: &["Vampire", "Resist"], result: "Move Speed" },
            Combination {
                factors: &["Vampire", "Resist", "Vigour"],
                result: "Endure Trap odds",
            },
        ],
    },
    FactorDef {
        name: "Resist",
        trait_name: "DEF",
        bonuses: [50, 100, 200, 350, 600, 1000, 1650, 2600, 3900],
        combinations: &[
            Combination { factors: &["Resist", "Vigour"], result: "Move Speed" },
            Combination { factors: &["Resist", "Vigour"], result: "Defense Armor" },
            Combination {
                factors: &["Resist", "Vigour", "Surge"],
                result: "Trap DMG Reduce",
            },
        ],
    },
    FactorDef {
        name: "Vigour",
        trait_name: "STA",
        bonuses: [75, 150, 300, 525, 900, 1500, 2475, 3900, 5850],
        combinations: &[
            Combination { factors: &["Vigour", "Surge"], result: "Move Speed" },
            Combination { factors: &["Vigour", "Surge"], result: "Fall Armor" },
            Combination {
                factors: &["Vigour", "Surge", "Excess"],
                result: "1/5 odds get Def Rage",
            },
        ],
    },
    FactorDef {
        name: "Surge",
        trait_name: "Burst Period DMG",
        bonuses: [200, 400, 800, 1400, 2400, 4000, 6600, 10400, 15600],
        combinations: &[
            Combination { factors: &["Surge", "Excess"], result: "DMG to Mob" },
            Combination { factors: &["Surge", "Excess"], result: "DMG" },
            Combination {
                factors: &["Surge", "Excess", "Force"],
                result: "DMG to BOSS",
            },
        ],
    },
    FactorDef {
        name: "Excess",
        trait_name: "Extra DMG",
        bonuses: [100, 200, 400, 700, 1200, 2000, 3300, 5200, 7800],
        combinations: &[
            Combination { factors: &["Excess", "Force"], result: "DMG to Mob" },
            Combination {
                factors: &["Excess", "Force"],
                result: "1/5 odds cut foe Rage",
            },
            Combination {
                factors: &["Vampire", "Excess", "Force"],
                result: "Attack Armor",
            },
        ],
    },
    FactorDef {
        name: "Force",
        trait_name: "STR",
        bonuses: [75, 150, 300, 525, 900, 1500, 2475, 3900, 5850],
        combinations: &[
            Combination { factors: &["Vampire", "Force"], result: "DMG to Mob" },
            Combination {
                factors: &["Vampire", "Force"],
                result: "1/5 odds get Def Rage",
            },
            Combination {
                factors: &["Vampire", "Resist", "Force"],
                result: "DMG to Hero",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_six_families() {
        assert_eq!(catalog().len(), 6);
    }

    #[test]
    fn test_bonus_lookup() {
        let vampire = &catalog()[0];
        assert_eq!(vampire.bonus(1), 10);
        assert_eq!(vampire.bonus(9), 780);
        assert_eq!(vampire.bonus(0), 0);
        assert_eq!(vampire.bonus(10), 0);
    }

    #[test]
    fn test_factor_id_format() {
        assert_eq!(factor_id("Vampire", 3), "factor_vampire_3");
    }
}
