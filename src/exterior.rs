//! The exterior level assembler: three one-shot pipelines producing a fully
//! owned level product.

use std::error::Error;
use std::fmt;

use relic_assets::{ChunkLibrary, CityDefinition, CityLibrary, ExeStrings, MenuTable};
use relic_assets::{WILD_CHUNK_DIM, WildBlockLists};
use relic_random::{LegacyRandom, seeds};
use relic_voxel::decode::{self, CeilingInfo};
use relic_voxel::{VoxelGrid, VoxelLayer};

use crate::city;
use crate::names::{self, MenuNameMap};
use crate::sky::DistantSky;
use crate::weather::{Climate, Weather};
use crate::wild;

/// Fatal assembly conditions. Generation is deterministic, so retrying with
/// the same inputs reproduces the same failure; no partial level escapes.
#[derive(Debug)]
pub enum AssemblyError {
    UnknownCity {
        province_id: usize,
        local_city_id: usize,
    },
    MissingSkeleton(usize),
    UnknownWildSelector(u8),
    BadChunkExtent {
        selector: u8,
        width: usize,
        depth: usize,
    },
    BadTables(String),
    BadWildDimensions {
        width: usize,
        height: usize,
    },
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::UnknownCity {
                province_id,
                local_city_id,
            } => write!(f, "no city ({}, {}) in the library", province_id, local_city_id),
            AssemblyError::MissingSkeleton(i) => write!(f, "no city skeleton chunk {}", i),
            AssemblyError::UnknownWildSelector(s) => {
                write!(f, "no wilderness chunk for selector {}", s)
            }
            AssemblyError::BadChunkExtent {
                selector,
                width,
                depth,
            } => write!(
                f,
                "wilderness chunk {} is {}x{}, expected {}x{}",
                selector, width, depth, WILD_CHUNK_DIM, WILD_CHUNK_DIM
            ),
            AssemblyError::BadTables(msg) => write!(f, "bad lookup tables: {}", msg),
            AssemblyError::BadWildDimensions { width, height } => {
                write!(f, "wilderness needs at least 2x2 chunks, got {}x{}", width, height)
            }
        }
    }
}

impl Error for AssemblyError {}

/// Borrowed read-only inputs shared by the assembly pipelines.
#[derive(Clone, Copy)]
pub struct ExteriorAssets<'a> {
    pub chunks: &'a ChunkLibrary,
    pub strings: &'a ExeStrings,
    pub menus: &'a MenuTable,
    pub cities: &'a CityLibrary,
    pub wild_lists: &'a WildBlockLists,
}

impl<'a> ExteriorAssets<'a> {
    fn city(
        &self,
        province_id: usize,
        local_city_id: usize,
    ) -> Result<&'a CityDefinition, AssemblyError> {
        self.cities
            .city(province_id, local_city_id)
            .ok_or(AssemblyError::UnknownCity {
                province_id,
                local_city_id,
            })
    }

    fn validated_strings(&self) -> Result<&'a ExeStrings, AssemblyError> {
        self.strings
            .validate()
            .map_err(|e| AssemblyError::BadTables(e.to_string()))?;
        Ok(self.strings)
    }
}

/// A finished exterior level: the decoded grid, its menu names, and the
/// ambient sky. Exclusively owned by the caller; after construction only
/// `tick` mutates it, and only the sky.
#[derive(Clone, Debug)]
pub struct ExteriorLevelData {
    grid: VoxelGrid,
    menu_names: MenuNameMap,
    distant_sky: DistantSky,
    inf_name: String,
    name: String,
}

impl ExteriorLevelData {
    #[inline]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    #[inline]
    pub fn menu_names(&self) -> &MenuNameMap {
        &self.menu_names
    }

    #[inline]
    pub fn distant_sky(&self) -> &DistantSky {
        &self.distant_sky
    }

    #[inline]
    pub fn inf_name(&self) -> &str {
        &self.inf_name
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-frame update; touches nothing but the distant sky.
    pub fn tick(&mut self, dt: f64) {
        self.distant_sky.tick(dt);
    }
}

fn sky_for(
    city: &CityDefinition,
    province_id: usize,
    climate: Climate,
    weather: Weather,
    current_day: i32,
    star_count: i32,
) -> DistantSky {
    let (px, py) = seeds::local_city_point(city.city_seed);
    let seed = seeds::distant_sky_seed(px, py, province_id as u32 + 1);
    DistantSky::new(seed, climate, weather, current_day, star_count)
}

/// Loads a hand-authored city whole: height scan and names only, no
/// graphics revision.
#[allow(clippy::too_many_arguments)]
pub fn load_premade_city(
    province_id: usize,
    local_city_id: usize,
    climate: Climate,
    weather: Weather,
    current_day: i32,
    star_count: i32,
    ceiling: Option<&CeilingInfo>,
    assets: &ExteriorAssets,
) -> Result<ExteriorLevelData, AssemblyError> {
    let city = assets.city(province_id, local_city_id)?;
    let strings = assets.validated_strings()?;
    let skeleton = assets
        .chunks
        .city_skeletons
        .get(city.skeleton)
        .ok_or(AssemblyError::MissingSkeleton(city.skeleton))?;

    let flor = skeleton.flor.clone();
    let map1 = skeleton.map1.clone();
    let map2 = skeleton.map2.clone();
    let height = decode::level_height(&map2, ceiling);

    let mut random = LegacyRandom::new(city.city_seed);
    let menu_names =
        names::generate_building_names(city, strings, assets.menus, &map1, &mut random);

    log::info!(
        "assembled premade city '{}' ({}x{}x{})",
        city.name,
        flor.width(),
        flor.depth(),
        height
    );

    Ok(ExteriorLevelData {
        grid: VoxelGrid::new(flor, map1, map2, height),
        menu_names,
        distant_sky: sky_for(city, province_id, climate, weather, current_day, star_count),
        inf_name: crate::weather::city_inf_name(climate, weather),
        name: city.name.clone(),
    })
}

/// Loads a randomly laid-out city: skeleton, generated block fill, palace
/// revision, then names.
#[allow(clippy::too_many_arguments)]
pub fn load_city(
    province_id: usize,
    local_city_id: usize,
    grid_width: usize,
    grid_depth: usize,
    climate: Climate,
    weather: Weather,
    current_day: i32,
    star_count: i32,
    ceiling: Option<&CeilingInfo>,
    assets: &ExteriorAssets,
) -> Result<ExteriorLevelData, AssemblyError> {
    let city = assets.city(province_id, local_city_id)?;
    let strings = assets.validated_strings()?;
    let skeleton = assets
        .chunks
        .city_skeletons
        .get(city.skeleton)
        .ok_or(AssemblyError::MissingSkeleton(city.skeleton))?;

    let mut flor = VoxelLayer::new(grid_width, grid_depth);
    let mut map1 = VoxelLayer::new(grid_width, grid_depth);
    let mut map2 = VoxelLayer::new(grid_width, grid_depth);
    city::write_skeleton(skeleton, &mut flor, &mut map1, &mut map2);

    // The same stream drives block fill and, afterwards, building names.
    let mut random = LegacyRandom::new(city.city_seed);
    if !city.premade {
        city::generate_city(
            &mut random,
            city.blocks_per_side,
            (city.block_start_x, city.block_start_y),
            &city.reserved_blocks,
            &assets.chunks.city_blocks,
            &mut flor,
            &mut map1,
            &mut map2,
        );
    }

    city::revise_palace_graphics(&mut map1);

    let height = decode::level_height(&map2, ceiling);
    let menu_names =
        names::generate_building_names(city, strings, assets.menus, &map1, &mut random);

    log::info!(
        "assembled city '{}' ({}x{}x{})",
        city.name,
        grid_width,
        grid_depth,
        height
    );

    Ok(ExteriorLevelData {
        grid: VoxelGrid::new(flor, map1, map2, height),
        menu_names,
        distant_sky: sky_for(city, province_id, climate, weather, current_day, star_count),
        inf_name: crate::weather::city_inf_name(climate, weather),
        name: city.name.clone(),
    })
}

/// Loads the wilderness around a city: seeded fill-chunk selection, chunk
/// stamping, the city splice, then wilderness names.
#[allow(clippy::too_many_arguments)]
pub fn load_wilderness(
    province_id: usize,
    local_city_id: usize,
    wild_width: usize,
    wild_height: usize,
    climate: Climate,
    weather: Weather,
    current_day: i32,
    star_count: i32,
    assets: &ExteriorAssets,
) -> Result<ExteriorLevelData, AssemblyError> {
    let city = assets.city(province_id, local_city_id)?;
    let strings = assets.validated_strings()?;
    if wild_width < 2 || wild_height < 2 {
        return Err(AssemblyError::BadWildDimensions {
            width: wild_width,
            height: wild_height,
        });
    }
    assets
        .wild_lists
        .validate()
        .map_err(|e| AssemblyError::BadTables(e.to_string()))?;

    let indices =
        wild::generate_wilderness_indices(city.wild_seed, wild_width, wild_height, assets.wild_lists);

    let mut flor = VoxelLayer::new(wild_width * WILD_CHUNK_DIM, wild_height * WILD_CHUNK_DIM);
    let mut map1 = VoxelLayer::new(flor.width(), flor.depth());
    let mut map2 = VoxelLayer::new(flor.width(), flor.depth());

    for cy in 0..indices.height() {
        for cx in 0..indices.width() {
            let selector = indices.get(cx, cy);
            let chunk = assets
                .chunks
                .wild_chunk(selector)
                .ok_or(AssemblyError::UnknownWildSelector(selector))?;
            if chunk.width() != WILD_CHUNK_DIM || chunk.depth() != WILD_CHUNK_DIM {
                return Err(AssemblyError::BadChunkExtent {
                    selector,
                    width: chunk.width(),
                    depth: chunk.depth(),
                });
            }
            chunk.stamp_into(
                &mut flor,
                &mut map1,
                &mut map2,
                cx * WILD_CHUNK_DIM,
                cy * WILD_CHUNK_DIM,
            );
        }
    }

    wild::revise_wilderness_city(city, &mut flor, &mut map1, &mut map2, assets.chunks);

    let menu_names = names::generate_wild_building_names(&map1, strings, assets.menus);

    log::info!(
        "assembled wilderness around '{}' ({}x{} chunks)",
        city.name,
        wild_width,
        wild_height
    );

    Ok(ExteriorLevelData {
        grid: VoxelGrid::new(flor, map1, map2, wild::WILD_LEVEL_HEIGHT),
        menu_names,
        distant_sky: sky_for(city, province_id, climate, weather, current_day, star_count),
        inf_name: crate::weather::wild_inf_name(climate, weather),
        name: "WILD".to_string(),
    })
}
