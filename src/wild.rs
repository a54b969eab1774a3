//! Wilderness generation: seeded fill-chunk selection and the city splice.

use relic_assets::{ChunkLibrary, CityDefinition, WILD_CHUNK_DIM, WildBlockLists};
use relic_random::LegacyRandom;
use relic_voxel::VoxelLayer;

/// Chunk cells across the full wilderness of a location.
pub const WILD_WIDTH: usize = 64;
pub const WILD_HEIGHT: usize = WILD_WIDTH;

/// Vertical voxel count of a wilderness level (tallest authored chunk).
pub const WILD_LEVEL_HEIGHT: i32 = 6;

/// One selector per wilderness chunk cell, generated once per location and
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WildIndexGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl WildIndexGrid {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Chunk cell holding the north-west corner of the city footprint.
    #[inline]
    pub fn city_origin(&self) -> (usize, usize) {
        (self.width / 2 - 1, self.height / 2 - 1)
    }
}

// Cumulative category thresholds for the first draw of each cell.
const NORMAL_SPAN: u32 = 0x6666;
const VILLAGE_SPAN: u32 = 0x4000;
const DUNGEON_SPAN: u32 = 0x2666;
const TAVERN_SPAN: u32 = 0x1999;

/// Generates the wilderness selector grid for a location.
///
/// Two draws per cell in row-major order: the first picks the terrain
/// category by the fixed thresholds, the second the selector within that
/// category's list. The four center cells are then overwritten with the
/// city placeholder selectors 1..=4. Identical seed, dimensions, and lists
/// produce a bit-identical grid.
///
/// Panics if either dimension is less than 2 or a category list is empty;
/// the assembler validates both beforehand.
pub fn generate_wilderness_indices(
    wild_seed: u32,
    width: usize,
    height: usize,
    lists: &WildBlockLists,
) -> WildIndexGrid {
    assert!(width >= 2 && height >= 2, "city tiles need a 2x2 footprint");

    let mut random = LegacyRandom::new(wild_seed);
    let mut data = Vec::with_capacity(width * height);
    for _ in 0..width * height {
        let list = {
            let mut v = random.next();
            if v < NORMAL_SPAN {
                &lists.normal
            } else {
                v -= NORMAL_SPAN;
                if v < VILLAGE_SPAN {
                    &lists.village
                } else {
                    v -= VILLAGE_SPAN;
                    if v < DUNGEON_SPAN {
                        &lists.dungeon
                    } else if v - DUNGEON_SPAN < TAVERN_SPAN {
                        &lists.tavern
                    } else {
                        &lists.temple
                    }
                }
            }
        };
        let pick = (random.next() & 0xFF) as usize % list.len();
        data.push(list[pick]);
    }

    let mut grid = WildIndexGrid {
        width,
        height,
        data,
    };

    // City placeholder chunks sit in the center of the wilderness.
    let (cx, cy) = grid.city_origin();
    grid.data[cy * width + cx] = 1;
    grid.data[cy * width + cx + 1] = 2;
    grid.data[(cy + 1) * width + cx] = 3;
    grid.data[(cy + 1) * width + cx + 1] = 4;

    grid
}

/// Replaces the generic placeholder city blocks in a wilderness composite
/// with the location's actual city.
///
/// Clears the 2x2-chunk placeholder footprint, stamps the city skeleton
/// (plus generated blocks for non-premade cities), rewrites the stamped
/// cells by the wilderness wall rules, and writes them back. Cells outside
/// the footprint are never touched. The city ID is validated by the
/// assembler before this runs.
pub fn revise_wilderness_city(
    city: &CityDefinition,
    flor: &mut VoxelLayer,
    map1: &mut VoxelLayer,
    map2: &mut VoxelLayer,
    chunks: &ChunkLibrary,
) {
    debug_assert!(flor.same_extent(map1) && flor.same_extent(map2));

    let chunks_wide = flor.width() / WILD_CHUNK_DIM;
    let chunks_deep = flor.depth() / WILD_CHUNK_DIM;
    assert!(
        chunks_wide >= 2 && chunks_deep >= 2,
        "composite too small for the 2x2 city footprint"
    );
    let x_offset = (chunks_wide / 2 - 1) * WILD_CHUNK_DIM;
    let z_offset = (chunks_deep / 2 - 1) * WILD_CHUNK_DIM;

    // Clear the placeholder blocks.
    let footprint = WILD_CHUNK_DIM * 2;
    for z in 0..footprint {
        for x in 0..footprint {
            flor.set(x_offset + x, z_offset + z, 0);
            map1.set(x_offset + x, z_offset + z, 0);
            map2.set(x_offset + x, z_offset + z, 0);
        }
    }

    let Some(skeleton) = chunks.city_skeletons.get(city.skeleton) else {
        log::error!("missing city skeleton chunk {}", city.skeleton);
        return;
    };

    // Build the city in temp buffers: skeleton, then generated blocks for
    // non-premade cities.
    let mut city_flor = VoxelLayer::new(skeleton.width(), skeleton.depth());
    let mut city_map1 = VoxelLayer::new(skeleton.width(), skeleton.depth());
    let mut city_map2 = VoxelLayer::new(skeleton.width(), skeleton.depth());
    crate::city::write_skeleton(skeleton, &mut city_flor, &mut city_map1, &mut city_map2);

    if !city.premade {
        let mut random = LegacyRandom::new(city.city_seed);
        crate::city::generate_city(
            &mut random,
            city.blocks_per_side,
            (city.block_start_x, city.block_start_y),
            &city.reserved_blocks,
            &chunks.city_blocks,
            &mut city_flor,
            &mut city_map1,
            &mut city_map2,
        );
    }

    // Transform city voxels by the wilderness rules: only walls survive,
    // and each wall kind maps to its wilderness counterpart.
    for z in 0..city_map1.depth() {
        for x in 0..city_map1.width() {
            let m1 = city_map1.get(x, z);
            let m2 = city_map2.get(x, z);
            if (m1 & 0x8000) != 0 {
                city_map1.set(x, z, 0);
                city_map2.set(x, z, 0);
                continue;
            }
            match m1 {
                0x2F2F => {
                    city_map1.set(x, z, 0x3030);
                    city_map2.set(x, z, 0x3030 | (m2 & 0x8080));
                }
                0x2D2D => {
                    city_map1.set(x, z, 0x2F2F);
                    city_map2.set(x, z, 0x3030 | (m2 & 0x8080));
                }
                0x2E2E => {
                    city_map2.set(x, z, 0x3030 | (m2 & 0x8080));
                }
                _ => {
                    city_map1.set(x, z, 0);
                    city_map2.set(x, z, 0);
                }
            }
        }
    }

    // Write the city into the wilderness at the placeholder origin.
    let w = city_flor.width().min(footprint);
    let d = city_flor.depth().min(footprint);
    for z in 0..d {
        for x in 0..w {
            flor.set(x_offset + x, z_offset + z, city_flor.get(x, z));
            map1.set(x_offset + x, z_offset + z, city_map1.get(x, z));
            map2.set(x_offset + x, z_offset + z, city_map2.get(x, z));
        }
    }
}
