//! Door identity: the coordinate packing, interior file naming, lock level,
//! and save-slot derivations all share the offset rule defined here.

use relic_assets::{CityType, ExeStrings};
use relic_random::LegacyRandom;
use relic_voxel::menu::{self, MapType, MenuType};

/// Span of numbered interior variants per building prefix.
const MIF_VARIANT_SPAN: u32 = 8;

/// Identity of one interactive door voxel, derived on demand after the grid
/// is final and never stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DoorDescriptor {
    /// Interior file the door opens, if it opens one.
    pub mif_name: Option<String>,
    pub lock_level: i32,
}

/// Derives a door's full identity in one call. Draws the lock level from
/// the supplied stream; see `door_lock_level` for the stream contract.
#[allow(clippy::too_many_arguments)]
pub fn door_descriptor(
    x: i32,
    y: i32,
    menu_id: i32,
    ruler_seed: u32,
    palace_is_main_quest: bool,
    city_type: CityType,
    is_city: bool,
    strings: &ExeStrings,
    random: &mut LegacyRandom,
) -> DoorDescriptor {
    DoorDescriptor {
        mif_name: door_mif_name(
            x,
            y,
            menu_id,
            ruler_seed,
            palace_is_main_quest,
            city_type,
            is_city,
            strings,
        ),
        lock_level: door_lock_level(x, y, random),
    }
}

/// Packs a door coordinate into the 16-bit offset the save format keys on.
/// Y-major; injective over the save format's coordinate domain.
#[inline]
pub fn door_voxel_offset(x: i32, y: i32) -> u16 {
    ((y << 8) + (x << 1)) as u16
}

/// Interior `.MIF` name for a door voxel, or `None` for transitions that do
/// not open an interior (city gates, unmapped menus).
///
/// Deterministic: the variant number is derived from the door offset and the
/// ruler seed, never from stream state.
#[allow(clippy::too_many_arguments)]
pub fn door_mif_name(
    x: i32,
    y: i32,
    menu_id: i32,
    ruler_seed: u32,
    palace_is_main_quest: bool,
    city_type: CityType,
    is_city: bool,
    strings: &ExeStrings,
) -> Option<String> {
    let map = if is_city {
        MapType::City
    } else {
        MapType::Wilderness
    };
    let menu = menu::menu_type(menu_id, map);

    if menu == MenuType::Palace {
        // The center province's palace is the main-quest dungeon.
        if palace_is_main_quest {
            return Some(strings.final_dungeon_mif.to_uppercase());
        }
        return Some(strings.palace_mifs[city_type.index()].clone());
    }

    let prefix_index = menu::mif_prefix_index(menu)?;
    let prefix = &strings.menu_mif_prefixes[prefix_index];
    let offset = u32::from(door_voxel_offset(x, y));
    let variant = 1 + (ruler_seed.wrapping_add(offset) % MIF_VARIANT_SPAN);
    Some(format!("{}{}.MIF", prefix, variant))
}

/// Lock level for a door voxel, in `1..=10`.
///
/// Reseeds the caller's stream from the door offset, then takes exactly one
/// draw, so the value is reproducible per coordinate while still consuming
/// the stream.
pub fn door_lock_level(x: i32, y: i32, random: &mut LegacyRandom) -> i32 {
    let offset = u32::from(door_voxel_offset(x, y));
    random.srand(offset.wrapping_add(offset << 16));
    ((random.next() % 10) + 1) as i32
}

/// The '#' number of a city service save file. Both coordinates are masked
/// to four bits; collisions are expected and tolerated by the save format.
#[inline]
pub fn service_save_file_number(door_x: i32, door_y: i32) -> i32 {
    ((door_y & 0xF) << 4) | (door_x & 0xF)
}

/// Wilderness variant of the service save-file number, over chunk
/// coordinates.
#[inline]
pub fn wilderness_service_save_file_number(wild_x: i32, wild_y: i32) -> i32 {
    ((wild_y & 0xF) << 4) | (wild_x & 0xF)
}
