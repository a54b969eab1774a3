//! Display names for enterable voxels, generated after the grid is final.

use hashbrown::HashMap;

use relic_assets::{CityDefinition, ExeStrings, MenuTable, WILD_CHUNK_DIM};
use relic_random::{LegacyRandom, seeds};
use relic_voxel::menu::{self, MapType, MenuType};
use relic_voxel::{VoxelLayer, decode};

/// Voxel coordinate -> display name for menu voxels. Built once per level;
/// insertion order is irrelevant.
pub type MenuNameMap = HashMap<(i32, i32), String>;

/// Temple suffix-table sizes by model; fixed legacy draw moduli.
const TEMPLE_MODEL_VARS: [u32; 3] = [5, 9, 10];

fn menu_type_at(
    map1: &VoxelLayer,
    menus: &MenuTable,
    map: MapType,
    x: usize,
    z: usize,
) -> MenuType {
    decode::wall_texture_index(map1.get(x, z))
        .and_then(|t| menus.menu_id(t))
        .map(|id| menu::menu_type(id, map))
        .unwrap_or(MenuType::None)
}

fn tavern_name(strings: &ExeStrings, coastal: bool, m: u32, n: u32) -> String {
    let suffixes = if coastal {
        &strings.tavern_marine_suffixes
    } else {
        &strings.tavern_suffixes
    };
    format!("{} {}", strings.tavern_prefixes[m as usize], suffixes[n as usize])
}

fn temple_name(strings: &ExeStrings, model: u32, n: u32) -> String {
    let suffix = match model {
        0 => &strings.temple1_suffixes[n as usize],
        1 => &strings.temple2_suffixes[n as usize],
        _ => &strings.temple3_suffixes[n as usize],
    };
    // Temple suffixes carry their own leading text.
    format!("{}{}", strings.temple_prefixes[model as usize], suffix)
}

fn npc_first_name(strings: &ExeStrings, random: &mut LegacyRandom) -> String {
    let first = &strings.male_first_names[random.next() as usize % strings.male_first_names.len()];
    first.clone()
}

fn npc_full_name(strings: &ExeStrings, random: &mut LegacyRandom) -> String {
    let first = npc_first_name(strings, random);
    let last = &strings.male_surnames[random.next() as usize % strings.male_surnames.len()];
    format!("{} {}", first, last)
}

fn equipment_name(
    strings: &ExeStrings,
    city: &CityDefinition,
    m: u32,
    n: u32,
    x: i32,
    z: i32,
) -> String {
    let mut name = format!(
        "{} {}",
        strings.equipment_prefixes[m as usize], strings.equipment_suffixes[n as usize]
    );

    // %ct: city-type display name.
    if let Some(i) = name.find("%ct") {
        name.replace_range(i..i + 3, &strings.city_type_names[city.city_type.index()]);
    }

    // %ef: owner's first name, from a fresh stream seeded by the voxel.
    if let Some(i) = name.find("%ef") {
        let mut name_random = LegacyRandom::new(((x as u32) << 16).wrapping_add(z as u32));
        let first = npc_first_name(strings, &mut name_random);
        name.replace_range(i..i + 3, &first);
    }

    // %n: owner's full name, seeded with the axes swapped.
    if let Some(i) = name.find("%n") {
        let mut name_random = LegacyRandom::new(((z as u32) << 16).wrapping_add(x as u32));
        let full = npc_full_name(strings, &mut name_random);
        name.replace_range(i..i + 2, &full);
    }

    name
}

/// Generates display names for a city's menu voxels.
///
/// Three passes (tavern, equipment, temple) over the main layer in x-major
/// order, drawing name parts from the shared stream and redrawing on hash
/// collision so no two buildings of a type share a name. The stream is
/// reseeded from the city seed before the equipment and temple passes,
/// reproducing the legacy draw sequence.
pub fn generate_building_names(
    city: &CityDefinition,
    strings: &ExeStrings,
    menus: &MenuTable,
    map1: &VoxelLayer,
    random: &mut LegacyRandom,
) -> MenuNameMap {
    let mut names = MenuNameMap::new();
    let mut temple_order: Vec<(i32, i32)> = Vec::new();

    for pass in [MenuType::Tavern, MenuType::Equipment, MenuType::Temple] {
        if matches!(pass, MenuType::Equipment | MenuType::Temple) {
            let (px, py) = seeds::local_city_point(city.city_seed);
            random.srand(seeds::city_seed(px, py));
        }

        let mut seen: Vec<u32> = Vec::new();
        for x in 0..map1.width() {
            for z in 0..map1.depth() {
                if menu_type_at(map1, menus, MapType::City, x, z) != pass {
                    continue;
                }

                let name = match pass {
                    MenuType::Tavern => {
                        let (m, n) = loop {
                            let m = random.next() % 23;
                            let n = random.next() % 23;
                            if !seen.contains(&((m << 8) + n)) {
                                break (m, n);
                            }
                        };
                        seen.push((m << 8) + n);
                        tavern_name(strings, city.coastal, m, n)
                    }
                    MenuType::Equipment => {
                        let (m, n) = loop {
                            let m = random.next() % 20;
                            let n = random.next() % 10;
                            if !seen.contains(&((m << 8) + n)) {
                                break (m, n);
                            }
                        };
                        seen.push((m << 8) + n);
                        equipment_name(strings, city, m, n, x as i32, z as i32)
                    }
                    _ => {
                        let (model, n) = loop {
                            let model = random.next() % 3;
                            let n = random.next() % TEMPLE_MODEL_VARS[model as usize];
                            if !seen.contains(&((model << 8) + n)) {
                                break (model, n);
                            }
                        };
                        seen.push((model << 8) + n);
                        temple_order.push((x as i32, z as i32));
                        temple_name(strings, model, n)
                    }
                };

                names.insert((x as i32, z as i32), name);
            }
        }
    }

    // The main-quest city pins one temple's name.
    if let Some(ov) = &city.temple_override {
        if let Some(&coord) = temple_order.get(ov.temple_index) {
            names.insert(
                coord,
                temple_name(strings, ov.model_index as u32, ov.suffix_index as u32),
            );
        } else {
            log::warn!(
                "temple override index {} out of range ({} temples)",
                ov.temple_index,
                temple_order.len()
            );
        }
    }

    names
}

/// Generates display names for the wilderness: taverns and temples only.
///
/// Every voxel draws from a fresh stream seeded by its chunk, so all
/// buildings of one type in a chunk share a name; the legacy save format
/// depends on that.
pub fn generate_wild_building_names(
    map1: &VoxelLayer,
    strings: &ExeStrings,
    menus: &MenuTable,
) -> MenuNameMap {
    let mut names = MenuNameMap::new();
    let chunks_wide = map1.width() / WILD_CHUNK_DIM;
    let chunks_deep = map1.depth() / WILD_CHUNK_DIM;

    for wy in 0..chunks_deep {
        for wx in 0..chunks_wide {
            let chunk_seed = seeds::wild_chunk_seed(wx as i32, wy as i32);
            for pass in [MenuType::Tavern, MenuType::Temple] {
                for z in wy * WILD_CHUNK_DIM..(wy + 1) * WILD_CHUNK_DIM {
                    for x in wx * WILD_CHUNK_DIM..(wx + 1) * WILD_CHUNK_DIM {
                        if menu_type_at(map1, menus, MapType::Wilderness, x, z) != pass {
                            continue;
                        }

                        let mut random = LegacyRandom::new(chunk_seed);
                        let name = if pass == MenuType::Tavern {
                            let m = random.next() % 23;
                            let n = random.next() % 23;
                            tavern_name(strings, false, m, n)
                        } else {
                            let model = random.next() % 3;
                            let n = random.next() % TEMPLE_MODEL_VARS[model as usize];
                            temple_name(strings, model, n)
                        };
                        names.insert((x as i32, z as i32), name);
                    }
                }
            }
        }
    }

    names
}
