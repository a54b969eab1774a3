//! Name-template tables extracted from the legacy executable, plus the
//! per-level menu table. Loaded once and treated as read-only.

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// The fixed string tables driving building and interior names. The name
/// generators draw indices with fixed legacy moduli, so `validate` checks
/// every table against its minimum length before assembly begins.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ExeStrings {
    pub tavern_prefixes: Vec<String>,
    pub tavern_suffixes: Vec<String>,
    /// Used in place of `tavern_suffixes` for coastal cities.
    pub tavern_marine_suffixes: Vec<String>,
    pub equipment_prefixes: Vec<String>,
    pub equipment_suffixes: Vec<String>,
    pub temple_prefixes: Vec<String>,
    pub temple1_suffixes: Vec<String>,
    pub temple2_suffixes: Vec<String>,
    pub temple3_suffixes: Vec<String>,
    /// Interior `.MIF` prefixes, indexed by `menu::mif_prefix_index`.
    pub menu_mif_prefixes: Vec<String>,
    /// Palace `.MIF` names by city type (city-state, town, village).
    pub palace_mifs: Vec<String>,
    /// The main-quest dungeon `.MIF` name (palace of the center province).
    pub final_dungeon_mif: String,
    /// City-type display names for the `%ct` substitution.
    pub city_type_names: Vec<String>,
    pub male_first_names: Vec<String>,
    pub male_surnames: Vec<String>,
}

impl ExeStrings {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let strings: ExeStrings = toml::from_str(toml_str)?;
        Ok(strings)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    /// Checks every table against the legacy draw moduli; a shorter table
    /// would be indexed out of range mid-generation.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let checks = [
            ("tavern_prefixes", self.tavern_prefixes.len(), 23),
            ("tavern_suffixes", self.tavern_suffixes.len(), 23),
            ("tavern_marine_suffixes", self.tavern_marine_suffixes.len(), 23),
            ("equipment_prefixes", self.equipment_prefixes.len(), 20),
            ("equipment_suffixes", self.equipment_suffixes.len(), 10),
            ("temple_prefixes", self.temple_prefixes.len(), 3),
            ("temple1_suffixes", self.temple1_suffixes.len(), 5),
            ("temple2_suffixes", self.temple2_suffixes.len(), 9),
            ("temple3_suffixes", self.temple3_suffixes.len(), 10),
            ("menu_mif_prefixes", self.menu_mif_prefixes.len(), 9),
            ("palace_mifs", self.palace_mifs.len(), 3),
            ("city_type_names", self.city_type_names.len(), 3),
            ("male_first_names", self.male_first_names.len(), 1),
            ("male_surnames", self.male_surnames.len(), 1),
        ];
        for (name, have, min) in checks {
            if have < min {
                return Err(format!(
                    "string table '{}' has {} entries, needs at least {}",
                    name, have, min
                )
                .into());
            }
        }
        Ok(())
    }
}

/// Per-level mapping from a wall code's texture index to its menu ID. Small
/// and scanned linearly.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MenuTable {
    entries: Vec<(i32, i32)>,
}

impl MenuTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, texture_index: i32, menu_id: i32) {
        self.entries.push((texture_index, menu_id));
    }

    /// Menu ID for a wall texture index, if the level marks it enterable.
    pub fn menu_id(&self, texture_index: i32) -> Option<i32> {
        self.entries
            .iter()
            .find(|(t, _)| *t == texture_index)
            .map(|(_, id)| *id)
    }
}
