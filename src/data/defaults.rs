//! Default roster
//!
//! The characters seeded on first launch, before anything is persisted.
//! Each starts with a full level 70 loadout at tier 0 and an empty
//! material inventory.

use crate::tracker::{Character, TrackerState};

/// Seed roster entries: (id, display name)
const SEED_ROSTER: &[(&str, &str)] = &[
    ("ragna", "Ragna the Bloodedge"),
    ("jin", "Jin Kisaragi"),
];

/// The roster used when no saved characters exist
pub fn default_characters() -> Vec<Character> {
    SEED_ROSTER
        .iter()
        .map(|&(id, name)| Character::new(id, name))
        .collect()
}

/// A fresh tracker state for first launch
pub fn default_state() -> TrackerState {
    TrackerState {
        characters: default_characters(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{EnhanceTier, EquipLevel, SlotType};
    use crate::tracker::ThemeMode;

    #[test]
    fn test_default_roster_ids_are_unique() {
        let characters = default_characters();
        for (i, a) in characters.iter().enumerate() {
            for b in &characters[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_default_state_starts_dark_with_fresh_gear() {
        let state = default_state();
        assert_eq!(state.theme, ThemeMode::Dark);
        let item = state.characters[0].gear[&SlotType::Weapon];
        assert_eq!(item.level, EquipLevel::Lv70);
        assert_eq!(item.enhance, EnhanceTier::new(0));
    }
}
