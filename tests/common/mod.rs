//! Shared synthetic fixtures: chunk library, string tables, city library.

use relic_assets::{
    ChunkLevel, ChunkLibrary, CityDefinition, CityLibrary, CityType, ExeStrings, MenuTable,
    ProvinceDefinition, ReservedBlock, WILD_CHUNK_DIM, WildBlockLists,
};
use relic_voxel::VoxelId;

/// Wall code whose texture index is `t` (matching high/low bytes).
pub fn wall_code(t: u16) -> VoxelId {
    ((t + 1) << 8) | (t + 1)
}

// Texture indices wired into the menu table below.
pub const TAVERN_TEX: u16 = 10;
pub const EQUIPMENT_TEX: u16 = 11;
pub const TEMPLE_TEX: u16 = 12;
pub const PALACE_TEX: u16 = 13;
pub const WILD_TAVERN_TEX: u16 = 20;
pub const WILD_TEMPLE_TEX: u16 = 21;

pub fn menu_table() -> MenuTable {
    MenuTable::from_entries([
        // City IDs: 1 tavern, 0 equipment, 3 temple, 11 palace.
        (TAVERN_TEX as i32, 1),
        (EQUIPMENT_TEX as i32, 0),
        (TEMPLE_TEX as i32, 3),
        (PALACE_TEX as i32, 11),
        // Wilderness IDs: 3 tavern, 4 temple.
        (WILD_TAVERN_TEX as i32, 3),
        (WILD_TEMPLE_TEX as i32, 4),
    ])
}

fn numbered(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{}{}", prefix, i)).collect()
}

pub fn strings() -> ExeStrings {
    ExeStrings {
        tavern_prefixes: numbered("TavPre", 23),
        tavern_suffixes: numbered("TavSuf", 23),
        tavern_marine_suffixes: numbered("TavSea", 23),
        equipment_prefixes: numbered("EqPre", 20),
        equipment_suffixes: vec![
            "Gear of %ct".to_string(),
            "%ef's Rack".to_string(),
            "Arms of %n".to_string(),
            "EqSuf3".to_string(),
            "EqSuf4".to_string(),
            "EqSuf5".to_string(),
            "EqSuf6".to_string(),
            "EqSuf7".to_string(),
            "EqSuf8".to_string(),
            "EqSuf9".to_string(),
        ],
        temple_prefixes: numbered("TplPre", 3),
        temple1_suffixes: numbered("TplA", 5),
        temple2_suffixes: numbered("TplB", 9),
        temple3_suffixes: numbered("TplC", 10),
        menu_mif_prefixes: vec![
            "CRYPT".into(),
            "DUNGEON".into(),
            "EQUIP".into(),
            "HOUSE".into(),
            "MAGE".into(),
            "NOBLE".into(),
            "TAVERN".into(),
            "TEMPLE".into(),
            "TOWER".into(),
        ],
        palace_mifs: vec!["PALACE.MIF".into(), "TOWNPAL.MIF".into(), "VILPAL.MIF".into()],
        final_dungeon_mif: "FinalKeep.mif".into(),
        city_type_names: vec!["City".into(), "Town".into(), "Village".into()],
        male_first_names: numbered("First", 8),
        male_surnames: numbered("Sur", 8),
    }
}

pub fn wild_lists() -> WildBlockLists {
    WildBlockLists {
        normal: vec![5, 6],
        village: vec![7],
        dungeon: vec![8],
        tavern: vec![9],
        temple: vec![10],
    }
}

/// A 64x64 wilderness fill chunk whose floor carries its selector, with one
/// wild tavern and one wild temple voxel.
fn wild_chunk(selector: u8) -> ChunkLevel {
    let mut chunk = ChunkLevel::new(WILD_CHUNK_DIM, WILD_CHUNK_DIM);
    chunk.flor.fill(selector as VoxelId);
    chunk.map1.set(3, 3, wall_code(WILD_TAVERN_TEX));
    chunk.map1.set(9, 9, wall_code(WILD_TEMPLE_TEX));
    chunk
}

/// City skeleton: perimeter walls, a palace placeholder pair on the north
/// edge, and one menu voxel of each named type inside.
pub fn city_skeleton(dim: usize) -> ChunkLevel {
    let mut skeleton = ChunkLevel::new(dim, dim);
    for i in 0..dim {
        skeleton.map1.set(i, 0, 0x2F2F);
        skeleton.map1.set(i, dim - 1, 0x2F2F);
        skeleton.map1.set(0, i, 0x2F2F);
        skeleton.map1.set(dim - 1, i, 0x2F2F);
    }
    // Palace placeholders and their menu voxels.
    skeleton.map1.set(4, 0, 0x9000);
    skeleton.map1.set(5, 0, 0x9001);
    skeleton.map1.set(4, 1, wall_code(PALACE_TEX));
    // One of each interior type.
    skeleton.map1.set(3, 5, wall_code(TAVERN_TEX));
    skeleton.map1.set(7, 5, wall_code(EQUIPMENT_TEX));
    skeleton.map1.set(11, 5, wall_code(TEMPLE_TEX));
    // Something tall for the height scan.
    skeleton.map2.set(2, 2, 0x8000);
    skeleton
}

pub fn chunk_library() -> ChunkLibrary {
    let mut chunks = ChunkLibrary::new();
    // Selectors 1..=4 are the city placeholder blocks; 5..=10 are filler.
    for selector in 1..=10u8 {
        chunks.wild_chunks.push(wild_chunk(selector));
    }
    let mut block = ChunkLevel::new(relic_assets::CITY_BLOCK_DIM, relic_assets::CITY_BLOCK_DIM);
    block.map1.set(2, 2, wall_code(TAVERN_TEX));
    chunks.city_blocks.push(block);
    chunks.city_skeletons.push(city_skeleton(40));
    chunks
}

pub fn city_library() -> CityLibrary {
    CityLibrary {
        provinces: vec![ProvinceDefinition {
            name: "Border March".into(),
            cities: vec![
                CityDefinition {
                    name: "Highreach".into(),
                    city_type: CityType::Town,
                    premade: false,
                    coastal: false,
                    palace_is_main_quest: false,
                    ruler_seed: 0x0051_0049,
                    city_seed: 0x0020_0030,
                    wild_seed: 12345,
                    blocks_per_side: 2,
                    block_start_x: 1,
                    block_start_y: 1,
                    reserved_blocks: vec![ReservedBlock { cell: 3, block: 0 }],
                    skeleton: 0,
                    temple_override: None,
                },
                CityDefinition {
                    name: "Seawatch".into(),
                    city_type: CityType::CityState,
                    premade: true,
                    coastal: true,
                    palace_is_main_quest: false,
                    ruler_seed: 77,
                    city_seed: 0x0011_0022,
                    wild_seed: 999,
                    blocks_per_side: 0,
                    block_start_x: 0,
                    block_start_y: 0,
                    reserved_blocks: Vec::new(),
                    skeleton: 0,
                    temple_override: None,
                },
            ],
        }],
    }
}
