//! City and wilderness generation definitions, keyed by (province, city).

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CityType {
    CityState,
    Town,
    Village,
}

impl CityType {
    /// Index into per-city-type tables (palace names, display names).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            CityType::CityState => 0,
            CityType::Town => 1,
            CityType::Village => 2,
        }
    }
}

/// Replaces the name of the n-th generated temple in the main-quest city.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct MainQuestTempleOverride {
    pub model_index: i32,
    pub suffix_index: i32,
    /// Which temple entry (in generation order) the override applies to.
    pub temple_index: usize,
}

/// A block cell with authored replacement content: the overlay is stamped
/// as-is and the cell is excluded from random fill.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ReservedBlock {
    /// Row-major cell index in the city's block grid.
    pub cell: u8,
    /// Index of the replacement chunk among the city fill blocks.
    pub block: usize,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CityDefinition {
    pub name: String,
    pub city_type: CityType,
    /// Premade cities are authored whole; no block generation runs.
    #[serde(default)]
    pub premade: bool,
    #[serde(default)]
    pub coastal: bool,
    /// True only for the center province's city, whose palace is the
    /// main-quest dungeon.
    #[serde(default)]
    pub palace_is_main_quest: bool,
    pub ruler_seed: u32,
    pub city_seed: u32,
    pub wild_seed: u32,
    /// City block cells per side of the generated layout.
    pub blocks_per_side: i32,
    pub block_start_x: i32,
    pub block_start_y: i32,
    /// Authored replacements overlaid onto the block grid before random
    /// fill.
    #[serde(default)]
    pub reserved_blocks: Vec<ReservedBlock>,
    /// Index of this city's authored skeleton in the chunk library.
    pub skeleton: usize,
    #[serde(default)]
    pub temple_override: Option<MainQuestTempleOverride>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProvinceDefinition {
    pub name: String,
    pub cities: Vec<CityDefinition>,
}

/// All provinces and their cities. Assembler entry points resolve
/// (province, city) pairs here and refuse out-of-range IDs.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CityLibrary {
    pub provinces: Vec<ProvinceDefinition>,
}

impl CityLibrary {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let lib: CityLibrary = toml::from_str(toml_str)?;
        Ok(lib)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn province(&self, province_id: usize) -> Option<&ProvinceDefinition> {
        self.provinces.get(province_id)
    }

    pub fn city(&self, province_id: usize, local_city_id: usize) -> Option<&CityDefinition> {
        self.province(province_id)
            .and_then(|p| p.cities.get(local_city_id))
    }
}

/// Wilderness fill-chunk selectors by terrain category. Selector values are
/// 1-based indices into the chunk library's wilderness chunks.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WildBlockLists {
    pub normal: Vec<u8>,
    pub village: Vec<u8>,
    pub dungeon: Vec<u8>,
    pub tavern: Vec<u8>,
    pub temple: Vec<u8>,
}

impl WildBlockLists {
    /// Every category must be drawable from.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        let lists = [
            ("normal", &self.normal),
            ("village", &self.village),
            ("dungeon", &self.dungeon),
            ("tavern", &self.tavern),
            ("temple", &self.temple),
        ];
        for (name, list) in lists {
            if list.is_empty() {
                return Err(format!("wilderness block list '{}' is empty", name).into());
            }
        }
        Ok(())
    }
}
