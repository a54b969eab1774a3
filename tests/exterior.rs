mod common;

use relic::exterior::{self, AssemblyError, ExteriorAssets};
use relic::weather::{Climate, Weather};
use relic::{LegacyRandom, doors, names, wild};
use relic_assets::{CityType, ExeStrings};
use relic_voxel::menu::{MapType, MenuType, menu_type};

fn assets<'a>(
    chunks: &'a relic_assets::ChunkLibrary,
    strings: &'a ExeStrings,
    menus: &'a relic_assets::MenuTable,
    cities: &'a relic_assets::CityLibrary,
    lists: &'a relic_assets::WildBlockLists,
) -> ExteriorAssets<'a> {
    ExteriorAssets {
        chunks,
        strings,
        menus,
        cities,
        wild_lists: lists,
    }
}

#[test]
fn wilderness_selection_is_deterministic_for_a_fixed_seed() {
    let lists = common::wild_lists();
    let a = wild::generate_wilderness_indices(12345, 2, 2, &lists);
    let b = wild::generate_wilderness_indices(12345, 2, 2, &lists);
    assert_eq!(a.as_slice(), b.as_slice());

    let wide = wild::generate_wilderness_indices(12345, 8, 8, &lists);
    let again = wild::generate_wilderness_indices(12345, 8, 8, &lists);
    assert_eq!(wide.as_slice(), again.as_slice());
}

#[test]
fn wilderness_assembly_reproduces_itself() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let a = exterior::load_wilderness(0, 0, 4, 4, Climate::Temperate, Weather::Clear, 3, 5, &assets)
        .unwrap();
    let b = exterior::load_wilderness(0, 0, 4, 4, Climate::Temperate, Weather::Clear, 3, 5, &assets)
        .unwrap();

    assert_eq!(a.grid().flor, b.grid().flor);
    assert_eq!(a.grid().map1, b.grid().map1);
    assert_eq!(a.grid().map2, b.grid().map2);
    assert_eq!(a.menu_names(), b.menu_names());
    assert_eq!(a.grid().height(), wild::WILD_LEVEL_HEIGHT);
    assert_eq!(a.inf_name(), "TWN.INF");
}

#[test]
fn wilderness_door_names_resolve_from_authored_chunks() {
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let level =
        exterior::load_wilderness(0, 0, 4, 4, Climate::Temperate, Weather::Clear, 3, 5, &assets)
            .unwrap();

    // Chunk (0,0) lies outside the 2x2 city footprint, so its authored
    // tavern voxel at local (3,3) survives the splice.
    let (x, y) = (3, 3);
    assert_eq!(
        relic_voxel::decode::wall_texture_index(level.grid().map1.get(x, y)),
        Some(common::WILD_TAVERN_TEX as i32)
    );

    let city = cities.city(0, 0).unwrap();
    assert_eq!(menu_type(3, MapType::Wilderness), MenuType::Tavern);
    let name = doors::door_mif_name(
        x as i32,
        y as i32,
        3,
        city.ruler_seed,
        false,
        CityType::Town,
        false,
        &strings,
    )
    .unwrap();

    // offset(3,3) = 0x306; (0x510049 + 0x306) % 8 = 7, so variant 8.
    assert_eq!(name, "TAVERN8.MIF");

    // And its display name came from the chunk-seeded stream.
    assert!(level.menu_names().contains_key(&(x as i32, y as i32)));
}

#[test]
fn wilderness_city_footprint_is_spliced_in() {
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let level =
        exterior::load_wilderness(0, 0, 4, 4, Climate::Temperate, Weather::Clear, 3, 5, &assets)
            .unwrap();

    // City origin is chunk (1,1); the skeleton's perimeter wall becomes the
    // wilderness city-wall code after the splice.
    let o = relic_assets::WILD_CHUNK_DIM;
    assert_eq!(level.grid().map1.get(o, o), 0x3030);
    // Outside the footprint the fill chunks' floors are intact.
    assert_ne!(level.grid().flor.get(0, 0), 0);
}

#[test]
fn premade_city_name_map_is_idempotent() {
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let a = exterior::load_premade_city(
        0,
        1,
        Climate::Desert,
        Weather::Clear,
        12,
        9,
        None,
        &assets,
    )
    .unwrap();
    let b = exterior::load_premade_city(
        0,
        1,
        Climate::Desert,
        Weather::Clear,
        12,
        9,
        None,
        &assets,
    )
    .unwrap();
    assert_eq!(a.menu_names(), b.menu_names());

    // Rebuilding the names from the finished grid changes nothing.
    let city = cities.city(0, 1).unwrap();
    let mut random = LegacyRandom::new(city.city_seed);
    let again =
        names::generate_building_names(city, &strings, &menus, &a.grid().map1, &mut random);
    assert_eq!(&again, a.menu_names());

    // Premade maps keep their palace placeholders; no revision ran.
    assert_eq!(a.grid().map1.get(4, 0), 0x9000);
}

#[test]
fn city_assembly_revises_the_palace_and_names_buildings() {
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let level = exterior::load_city(
        0,
        0,
        48,
        48,
        Climate::Temperate,
        Weather::Rain,
        3,
        5,
        None,
        &assets,
    )
    .unwrap();

    // The north-edge placeholders became the final palace and gate codes.
    assert_eq!(level.grid().map1.get(4, 0), relic::city::PALACE_WALLS[0]);
    assert_eq!(level.grid().map1.get(5, 0), relic::city::PALACE_WALLS[0]);
    assert_eq!(level.grid().map1.get(3, 0), relic::city::PALACE_GATES[0]);
    assert_eq!(level.grid().map1.get(6, 0), relic::city::PALACE_GATES[0]);

    // One name per authored menu voxel: the skeleton's three interiors plus
    // the tavern in the reserved replacement block. Fully substituted.
    assert_eq!(level.menu_names().len(), 4);
    for name in level.menu_names().values() {
        assert!(!name.contains('%'), "unsubstituted name: {}", name);
    }
    assert!(level.menu_names().contains_key(&(3, 5)));
    assert!(level.menu_names().contains_key(&(23, 23)));
    assert_eq!(level.inf_name(), "TCR.INF");
    assert_eq!(level.name(), "Highreach");

    // The height scan saw the skeleton's tall MAP2 code.
    assert_eq!(level.grid().height(), 3);
}

#[test]
fn one_cell_grid_still_assembles() {
    let mut chunks = common::chunk_library();
    chunks.city_skeletons.push(relic_assets::ChunkLevel::new(1, 1));
    let mut cities = common::city_library();
    cities.provinces[0].cities[1].skeleton = 1;
    let (strings, menus, lists) = (common::strings(), common::menu_table(), common::wild_lists());
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let level = exterior::load_premade_city(
        0,
        1,
        Climate::Temperate,
        Weather::Clear,
        0,
        0,
        None,
        &assets,
    )
    .unwrap();
    assert_eq!(level.grid().width(), 1);
    assert_eq!(level.grid().depth(), 1);
    assert!(level.grid().height() >= 1);
    assert!(level.menu_names().is_empty());
}

#[test]
fn bad_inputs_abort_assembly() {
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    // Out-of-range city IDs.
    let err = exterior::load_city(
        7,
        0,
        48,
        48,
        Climate::Temperate,
        Weather::Clear,
        0,
        0,
        None,
        &assets,
    )
    .unwrap_err();
    assert!(matches!(err, AssemblyError::UnknownCity { .. }));

    // Undersized wilderness.
    let err = exterior::load_wilderness(
        0,
        0,
        1,
        2,
        Climate::Temperate,
        Weather::Clear,
        0,
        0,
        &assets,
    )
    .unwrap_err();
    assert!(matches!(err, AssemblyError::BadWildDimensions { .. }));

    // Short string tables are rejected before any generation runs.
    let bad_strings = ExeStrings::default();
    let bad = ExteriorAssets {
        strings: &bad_strings,
        ..assets
    };
    let err = exterior::load_premade_city(
        0,
        1,
        Climate::Temperate,
        Weather::Clear,
        0,
        0,
        None,
        &bad,
    )
    .unwrap_err();
    assert!(matches!(err, AssemblyError::BadTables(_)));
}

#[test]
fn tick_only_moves_the_sky() {
    let (chunks, strings, menus, cities, lists) = (
        common::chunk_library(),
        common::strings(),
        common::menu_table(),
        common::city_library(),
        common::wild_lists(),
    );
    let assets = assets(&chunks, &strings, &menus, &cities, &lists);

    let mut level = exterior::load_city(
        0,
        0,
        48,
        48,
        Climate::Mountain,
        Weather::Clear,
        0,
        3,
        None,
        &assets,
    )
    .unwrap();

    let map1_before = level.grid().map1.clone();
    let names_before = level.menu_names().clone();
    let anim_before = level.distant_sky().animated_land()[0].anim_percent();

    level.tick(0.05);

    assert_eq!(level.grid().map1, map1_before);
    assert_eq!(level.menu_names(), &names_before);
    assert!(level.distant_sky().animated_land()[0].anim_percent() > anim_before);
}
