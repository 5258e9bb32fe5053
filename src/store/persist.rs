//! Typed load/save over the key-value contract
//!
//! Characters and their material inventories are persisted under separate
//! keys and rejoined by character id on load. Any value that is missing or
//! fails to parse is replaced with its default; a load can therefore never
//! error, at worst it forgets.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::data::default_characters;
use crate::gear::{GearItem, MaterialInventory, SlotType};
use crate::tracker::{Character, TrackerState};

use super::kv::{KvStore, StoreError};

pub const CHARACTERS_KEY: &str = "characters";
pub const MATERIAL_INVENTORY_KEY: &str = "materialInventory";
pub const THEME_KEY: &str = "themeMode";
pub const FACTORS_KEY: &str = "factors";

/// On-disk shape of a character, inventory stored separately
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CharacterRecord {
    id: String,
    name: String,
    gear: HashMap<SlotType, GearItem>,
    #[serde(default)]
    have_agent: bool,
}

impl CharacterRecord {
    fn from_character(character: &Character) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            gear: character.gear.clone(),
            have_agent: character.have_agent,
        }
    }

    fn into_character(self, inventory: MaterialInventory) -> Character {
        let mut character = Character {
            id: self.id,
            name: self.name,
            gear: self.gear,
            inventory,
            have_agent: self.have_agent,
        };
        character.normalize();
        character
    }
}

fn read_key<S: KvStore, T: DeserializeOwned>(store: &S, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("Discarding unreadable `{}` value: {}", key, err);
            None
        }
    }
}

/// Load the full tracker state, substituting defaults for anything broken
pub fn load_state<S: KvStore>(store: &S) -> TrackerState {
    let mut inventories: HashMap<String, MaterialInventory> =
        read_key(store, MATERIAL_INVENTORY_KEY).unwrap_or_default();

    let characters = match read_key::<S, Vec<CharacterRecord>>(store, CHARACTERS_KEY) {
        Some(records) => records
            .into_iter()
            .map(|record| {
                let inventory = inventories.remove(&record.id).unwrap_or_default();
                record.into_character(inventory)
            })
            .collect(),
        None => default_characters(),
    };

    TrackerState {
        characters,
        factor_counts: read_key(store, FACTORS_KEY).unwrap_or_default(),
        theme: read_key(store, THEME_KEY).unwrap_or_default(),
    }
}

/// Write the full tracker state back to the store
pub fn save_state<S: KvStore>(store: &mut S, state: &TrackerState) -> Result<(), StoreError> {
    let records: Vec<CharacterRecord> = state
        .characters
        .iter()
        .map(CharacterRecord::from_character)
        .collect();
    let inventories: HashMap<&str, &MaterialInventory> = state
        .characters
        .iter()
        .map(|c| (c.id.as_str(), &c.inventory))
        .collect();

    store.set(CHARACTERS_KEY, &serde_json::to_string_pretty(&records)?)?;
    store.set(
        MATERIAL_INVENTORY_KEY,
        &serde_json::to_string_pretty(&inventories)?,
    )?;
    store.set(THEME_KEY, &serde_json::to_string(&state.theme)?)?;
    store.set(FACTORS_KEY, &serde_json::to_string_pretty(&state.factor_counts)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gear::{EnhanceTier, EquipLevel};
    use crate::store::MemoryStore;
    use crate::tracker::{apply, Command, ThemeMode};

    #[test]
    fn test_empty_store_loads_defaults() {
        let store = MemoryStore::new();
        let state = load_state(&store);
        assert_eq!(state.characters, default_characters());
        assert_eq!(state.theme, ThemeMode::Dark);
        assert!(state.factor_counts.is_empty());
    }

    #[test]
    fn test_state_survives_save_and_load() {
        let mut store = MemoryStore::new();
        let mut state = load_state(&store);
        state = apply(
            &state,
            Command::AdjustMaterial {
                character: state.characters[0].id.clone(),
                slot: SlotType::Helmet,
                level: EquipLevel::Lv55,
                delta: 7,
            },
        );
        state = apply(
            &state,
            Command::SetEnhance {
                character: state.characters[0].id.clone(),
                slot: SlotType::Helmet,
                tier: EnhanceTier::new(50),
            },
        );
        state = apply(&state, Command::SetTheme(ThemeMode::Light));
        state = apply(
            &state,
            Command::AdjustFactor { factor: "factor_surge_4".into(), delta: 3 },
        );

        save_state(&mut store, &state).unwrap();
        let reloaded = load_state(&store);
        assert_eq!(reloaded, state);
    }

    #[test]
    fn test_corrupt_characters_value_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(CHARACTERS_KEY, "{not json").unwrap();
        store.set(THEME_KEY, "\"light\"").unwrap();

        let state = load_state(&store);
        assert_eq!(state.characters, default_characters());
        // Other keys are unaffected by the corrupt one
        assert_eq!(state.theme, ThemeMode::Light);
    }

    #[test]
    fn test_corrupt_theme_value_falls_back_to_dark() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "\"sepia\"").unwrap();
        assert_eq!(load_state(&store).theme, ThemeMode::Dark);
    }

    #[test]
    fn test_character_without_inventory_entry_gets_empty_inventory() {
        let mut store = MemoryStore::new();
        let state = TrackerState {
            characters: vec![Character::new("ragna", "Ragna the Bloodedge")],
            ..Default::default()
        };
        save_state(&mut store, &state).unwrap();
        // Drop the inventory key entirely
        store.set(MATERIAL_INVENTORY_KEY, "null").unwrap();

        let reloaded = load_state(&store);
        assert_eq!(reloaded.characters[0].inventory, MaterialInventory::new());
    }

    #[test]
    fn test_loaded_character_is_normalized() {
        let mut store = MemoryStore::new();
        store
            .set(
                CHARACTERS_KEY,
                r#"[{"id": "ragna", "name": "Ragna the Bloodedge", "gear": {}}]"#,
            )
            .unwrap();

        let state = load_state(&store);
        for &slot in SlotType::all() {
            assert!(state.characters[0].gear.contains_key(&slot));
        }
        assert_eq!(state.characters[0].gear[&SlotType::Weapon], GearItem::default());
    }
}
