//! Menu-ID classification for enterable exterior voxels.

/// Which exterior map a menu ID is being interpreted for; the same ID means
/// different things in a city and in the wilderness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapType {
    City,
    Wilderness,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuType {
    CityGates,
    Crypt,
    Dungeon,
    Equipment,
    House,
    MagesGuild,
    Noble,
    None,
    Palace,
    Tavern,
    Temple,
    Tower,
}

const CITY_MENUS: [MenuType; 14] = [
    MenuType::Equipment,
    MenuType::Tavern,
    MenuType::MagesGuild,
    MenuType::Temple,
    MenuType::House,
    MenuType::House,
    MenuType::House,
    MenuType::CityGates,
    MenuType::CityGates,
    MenuType::Noble,
    MenuType::None,
    MenuType::Palace,
    MenuType::Palace,
    MenuType::Palace,
];

const WILD_MENUS: [MenuType; 10] = [
    MenuType::None,
    MenuType::Crypt,
    MenuType::House,
    MenuType::Tavern,
    MenuType::Temple,
    MenuType::Tower,
    MenuType::CityGates,
    MenuType::CityGates,
    MenuType::Dungeon,
    MenuType::Dungeon,
];

/// Maps a raw menu ID to its menu type, or `None` for unmapped IDs.
pub fn menu_type(menu_id: i32, map: MapType) -> MenuType {
    let table: &[MenuType] = match map {
        MapType::City => &CITY_MENUS,
        MapType::Wilderness => &WILD_MENUS,
    };
    usize::try_from(menu_id)
        .ok()
        .and_then(|i| table.get(i).copied())
        .unwrap_or(MenuType::None)
}

/// Whether the menu leads into a loadable interior (rather than, say, a
/// city gate transition).
pub fn menu_leads_to_interior(menu: MenuType) -> bool {
    !matches!(menu, MenuType::CityGates | MenuType::None)
}

/// Whether the menu type carries a generated display name.
pub fn menu_has_display_name(menu: MenuType) -> bool {
    matches!(
        menu,
        MenuType::Tavern | MenuType::Equipment | MenuType::Temple
    )
}

/// Index into the interior `.MIF` prefix table for menu types that resolve
/// to numbered interior files. Palaces and gates are named elsewhere.
pub fn mif_prefix_index(menu: MenuType) -> Option<usize> {
    match menu {
        MenuType::Crypt => Some(0),
        MenuType::Dungeon => Some(1),
        MenuType::Equipment => Some(2),
        MenuType::House => Some(3),
        MenuType::MagesGuild => Some(4),
        MenuType::Noble => Some(5),
        MenuType::Tavern => Some(6),
        MenuType::Temple => Some(7),
        MenuType::Tower => Some(8),
        MenuType::CityGates | MenuType::None | MenuType::Palace => None,
    }
}
