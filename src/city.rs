//! City assembly passes: skeleton stamping, block-cell generation, and the
//! perimeter palace/gate revision.

use relic_assets::{CITY_BLOCK_DIM, ChunkLevel, ReservedBlock};
use relic_random::LegacyRandom;
use relic_voxel::{VoxelId, VoxelLayer};

/// Placeholder palace/gate codes carry this top nibble on authored maps.
pub const PALACE_PLACEHOLDER_NIBBLE: u16 = 0x9;

/// Final palace wall codes, indexed by edge (north, south, east, west).
pub const PALACE_WALLS: [VoxelId; 4] = [0x2121, 0x2222, 0x2323, 0x2424];

/// Final gate codes flanking the palace, same edge order.
pub const PALACE_GATES: [VoxelId; 4] = [0x2929, 0x2A2A, 0x2B2B, 0x2C2C];

/// Copies the authored city skeleton into the level buffers at the origin.
pub fn write_skeleton(
    skeleton: &ChunkLevel,
    flor: &mut VoxelLayer,
    map1: &mut VoxelLayer,
    map2: &mut VoxelLayer,
) {
    skeleton.stamp_into(flor, map1, map2, 0, 0);
}

/// Generates the city's block layout: reserved replacements first, then
/// random fill with one draw per generated cell.
///
/// Cells are `CITY_BLOCK_DIM` voxels square, walked row-major from the
/// city's block start position. Reserved overlays consume no draws, so the
/// fill sequence stays save-compatible regardless of how many replacements
/// a city carries. Cells the skeleton already covers keep their content.
#[allow(clippy::too_many_arguments)]
pub fn generate_city(
    random: &mut LegacyRandom,
    blocks_per_side: i32,
    block_start: (i32, i32),
    reserved: &[ReservedBlock],
    blocks: &[ChunkLevel],
    flor: &mut VoxelLayer,
    map1: &mut VoxelLayer,
    map2: &mut VoxelLayer,
) {
    if blocks.is_empty() {
        log::warn!("no city fill blocks available; leaving skeleton as-is");
        return;
    }

    let (grid_w, grid_d) = (map1.width(), map1.depth());
    let cell_origin = move |cell_x: i32, cell_y: i32| -> Option<(usize, usize)> {
        let dst_x = block_start.0 + cell_x * CITY_BLOCK_DIM as i32;
        let dst_z = block_start.1 + cell_y * CITY_BLOCK_DIM as i32;
        if dst_x < 0 || dst_z < 0 {
            return None;
        }
        let (dst_x, dst_z) = (dst_x as usize, dst_z as usize);
        (dst_x < grid_w && dst_z < grid_d).then_some((dst_x, dst_z))
    };

    // Overlay the authored replacements.
    for r in reserved {
        let cell = i32::from(r.cell);
        let (cell_x, cell_y) = (cell % blocks_per_side, cell / blocks_per_side);
        let Some((dst_x, dst_z)) = cell_origin(cell_x, cell_y) else {
            continue;
        };
        match blocks.get(r.block) {
            Some(block) => block.stamp_into(flor, map1, map2, dst_x, dst_z),
            None => log::warn!("reserved block {} has no chunk {}", r.cell, r.block),
        }
    }

    // Random fill over the remaining cells.
    for cell_y in 0..blocks_per_side {
        for cell_x in 0..blocks_per_side {
            let cell_index = cell_y * blocks_per_side + cell_x;
            if reserved.iter().any(|r| i32::from(r.cell) == cell_index) {
                continue;
            }
            let Some((dst_x, dst_z)) = cell_origin(cell_x, cell_y) else {
                continue;
            };
            if cell_has_skeleton(map1, dst_x, dst_z) {
                continue;
            }

            let pick = (random.next() & 0xFF) as usize % blocks.len();
            blocks[pick].stamp_into(flor, map1, map2, dst_x, dst_z);
        }
    }
}

fn cell_has_skeleton(map1: &VoxelLayer, dst_x: usize, dst_z: usize) -> bool {
    let w = CITY_BLOCK_DIM.min(map1.width() - dst_x);
    let d = CITY_BLOCK_DIM.min(map1.depth() - dst_z);
    for z in 0..d {
        for x in 0..w {
            if map1.get(dst_x + x, dst_z + z) != 0 {
                return true;
            }
        }
    }
    false
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    North,
    South,
    East,
    West,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::North => 0,
            Side::South => 1,
            Side::East => 2,
            Side::West => 3,
        }
    }
}

/// Rewrites placeholder palace graphics and their gates on the perimeter of
/// a city's main layer to the final in-game codes, oriented by edge.
///
/// Only perimeter cells are ever touched. A map without a palace
/// placeholder (hand-authored premade maps) is left unchanged.
pub fn revise_palace_graphics(map1: &mut VoxelLayer) {
    let width = map1.width();
    let depth = map1.depth();

    let is_placeholder = |v: VoxelId| (v & 0xF000) >> 12 == PALACE_PLACEHOLDER_NIBBLE;

    // Edge cell by along-edge position, in the fixed search order.
    let edge_cell = |side: Side, t: usize| -> (usize, usize) {
        match side {
            Side::North => (t, 0),
            Side::South => (t, depth - 1),
            Side::East => (0, t),
            Side::West => (width - 1, t),
        }
    };
    let edge_len = |side: Side| match side {
        Side::North | Side::South => width,
        Side::East | Side::West => depth,
    };

    let found = [Side::North, Side::South, Side::East, Side::West]
        .into_iter()
        .find_map(|side| {
            (0..edge_len(side)).find_map(|t| {
                let (x, z) = edge_cell(side, t);
                is_placeholder(map1.get(x, z)).then_some((side, t))
            })
        });

    let Some((side, offset)) = found else {
        log::warn!("no palace placeholder found on the city perimeter");
        return;
    };

    let wall = PALACE_WALLS[side.index()];
    let gate = PALACE_GATES[side.index()];
    let len = edge_len(side);
    let mut put = |t: i64, v: VoxelId| {
        if (0..len as i64).contains(&t) {
            let (x, z) = edge_cell(side, t as usize);
            map1.set(x, z, v);
        }
    };

    // Two palace blocks, flanked by their gates.
    let offset = offset as i64;
    put(offset, wall);
    put(offset + 1, wall);
    put(offset - 1, gate);
    put(offset + 2, gate);
}
