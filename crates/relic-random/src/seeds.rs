//! Seed formulas shared by the exterior generation passes.
//!
//! Each seed packs map coordinates into 32 bits the same way the legacy
//! format does; the save/load path depends on these exact layouts.

/// City seed from the location's local map point.
#[inline]
pub const fn city_seed(x: i32, y: i32) -> u32 {
    ((x as u32) << 16).wrapping_add(y as u32)
}

/// Recovers the local map point a city seed was packed from.
#[inline]
pub const fn local_city_point(seed: u32) -> (i32, i32) {
    ((seed >> 16) as i32, (seed & 0xFFFF) as i32)
}

/// Seed for one wilderness chunk, used for its building names.
#[inline]
pub const fn wild_chunk_seed(wild_x: i32, wild_y: i32) -> u32 {
    ((wild_y as u32) << 16).wrapping_add(wild_x as u32)
}

/// Ruler seed from the location's global map point.
#[inline]
pub const fn ruler_seed(global_x: i32, global_y: i32) -> u32 {
    let packed = ((global_x as u32) << 16).wrapping_add(global_y as u32);
    packed.rotate_left(16)
}

/// Seed driving distant-sky object placement.
#[inline]
pub const fn distant_sky_seed(global_x: i32, global_y: i32, province_id: u32) -> u32 {
    let packed = ((global_x as u32) << 16).wrapping_add(global_y as u32);
    packed.wrapping_mul(province_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_seed_round_trips_local_point() {
        let seed = city_seed(37, 112);
        assert_eq!(local_city_point(seed), (37, 112));
    }

    #[test]
    fn ruler_seed_swaps_halves() {
        // A rotate by 16 swaps the packed halves, so the Y point lands high.
        assert_eq!(ruler_seed(0x1234, 0x5678), 0x5678_1234);
    }
}
