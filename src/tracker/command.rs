//! Commands
//!
//! Every mutation of the tracker goes through [`apply`], which takes the
//! current snapshot and returns a new one. Commands addressing a character
//! or slot that does not exist are silent no-ops; the command stream is
//! built from internal lookups, never external input.

use crate::gear::{EnhanceTier, EquipLevel, GearItem, RefineLevel, SlotType};
use crate::progression::apply_upgrade;

use super::state::{ThemeMode, TrackerState};

/// A single user-triggered state change
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetLevel { character: String, slot: SlotType, level: EquipLevel },
    SetEnhance { character: String, slot: SlotType, tier: EnhanceTier },
    SetRefine { character: String, slot: SlotType, refine: RefineLevel },
    AdjustMaterial { character: String, slot: SlotType, level: EquipLevel, delta: i64 },
    /// Advance one enhancement step, consuming materials
    Upgrade { character: String, slot: SlotType },
    SetAgent { character: String, have: bool },
    AdjustFactor { factor: String, delta: i64 },
    SetTheme(ThemeMode),
}

/// Apply a command to a snapshot, producing the next snapshot.
///
/// The input state is never mutated; callers persist the returned value
/// and re-render from it.
pub fn apply(state: &TrackerState, command: Command) -> TrackerState {
    log::debug!("Applying {:?}", command);
    let mut next = state.clone();

    match command {
        Command::SetLevel { character, slot, level } => {
            if let Some(item) = gear_mut(&mut next, &character, slot) {
                item.level = level;
            }
        }
        Command::SetEnhance { character, slot, tier } => {
            if let Some(item) = gear_mut(&mut next, &character, slot) {
                item.enhance = tier;
            }
        }
        Command::SetRefine { character, slot, refine } => {
            if let Some(item) = gear_mut(&mut next, &character, slot) {
                item.refine = refine;
            }
        }
        Command::AdjustMaterial { character, slot, level, delta } => {
            if let Some(index) = next.character_index(&character) {
                next.characters[index].inventory.adjust(slot, level, delta);
            }
        }
        Command::Upgrade { character, slot } => {
            if let Some(index) = next.character_index(&character) {
                next.characters[index] = apply_upgrade(&next.characters[index], slot);
            }
        }
        Command::SetAgent { character, have } => {
            if let Some(index) = next.character_index(&character) {
                next.characters[index].have_agent = have;
            }
        }
        Command::AdjustFactor { factor, delta } => {
            let current = next.factor_count(&factor) as i64;
            let count = (current + delta).clamp(0, u32::MAX as i64) as u32;
            next.factor_counts.insert(factor, count);
        }
        Command::SetTheme(mode) => {
            next.theme = mode;
        }
    }

    next
}

fn gear_mut<'a>(
    state: &'a mut TrackerState,
    character: &str,
    slot: SlotType,
) -> Option<&'a mut GearItem> {
    let index = state.character_index(character)?;
    state.characters[index].gear.get_mut(&slot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::Character;

    fn one_character_state() -> TrackerState {
        TrackerState {
            characters: vec![Character::new("ragna", "Ragna the Bloodedge")],
            ..Default::default()
        }
    }

    #[test]
    fn test_apply_leaves_input_snapshot_untouched() {
        let state = one_character_state();
        let before = state.clone();

        let next = apply(
            &state,
            Command::AdjustMaterial {
                character: "ragna".into(),
                slot: SlotType::Weapon,
                level: EquipLevel::Lv60,
                delta: 4,
            },
        );

        assert_eq!(state, before);
        assert_eq!(
            next.characters[0].inventory.count(SlotType::Weapon, EquipLevel::Lv60),
            4
        );
    }

    #[test]
    fn test_set_level_does_not_revalidate_enhance() {
        let state = one_character_state();
        let next = apply(
            &state,
            Command::SetEnhance {
                character: "ragna".into(),
                slot: SlotType::Weapon,
                tier: EnhanceTier::new(70),
            },
        );
        let next = apply(
            &next,
            Command::SetLevel {
                character: "ragna".into(),
                slot: SlotType::Weapon,
                level: EquipLevel::Lv45,
            },
        );

        let item = next.characters[0].gear[&SlotType::Weapon];
        assert_eq!(item.level, EquipLevel::Lv45);
        assert_eq!(item.enhance, EnhanceTier::new(70)); // left as-is
    }

    #[test]
    fn test_unknown_character_is_noop() {
        let state = one_character_state();
        let next = apply(
            &state,
            Command::Upgrade {
                character: "jubei".into(),
                slot: SlotType::Weapon,
            },
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_upgrade_replaces_only_target_character() {
        let mut state = one_character_state();
        state.characters.push(Character::new("jin", "Jin Kisaragi"));
        state.characters[0].gear.get_mut(&SlotType::Weapon).unwrap().enhance =
            EnhanceTier::new(40);

        let next = apply(
            &state,
            Command::Upgrade {
                character: "ragna".into(),
                slot: SlotType::Weapon,
            },
        );

        assert_eq!(
            next.characters[0].gear[&SlotType::Weapon].enhance,
            EnhanceTier::new(45)
        );
        assert_eq!(next.characters[1], state.characters[1]);
    }

    #[test]
    fn test_factor_counts_clamp_at_zero() {
        let state = TrackerState::default();
        let next = apply(
            &state,
            Command::AdjustFactor { factor: "factor_vampire_3".into(), delta: -5 },
        );
        assert_eq!(next.factor_count("factor_vampire_3"), 0);

        let next = apply(
            &next,
            Command::AdjustFactor { factor: "factor_vampire_3".into(), delta: 2 },
        );
        assert_eq!(next.factor_count("factor_vampire_3"), 2);
    }

    #[test]
    fn test_set_agent_flag() {
        let state = one_character_state();
        let next = apply(
            &state,
            Command::SetAgent { character: "ragna".into(), have: true },
        );
        assert!(next.characters[0].have_agent);
    }
}
