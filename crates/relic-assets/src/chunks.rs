//! Raw chunk sources: already-parsed tile buffers handed in by the caller.

use std::error::Error;

use relic_voxel::VoxelLayer;

/// One authored chunk: three parallel tile layers of equal extent.
#[derive(Clone, Debug)]
pub struct ChunkLevel {
    pub flor: VoxelLayer,
    pub map1: VoxelLayer,
    pub map2: VoxelLayer,
}

impl ChunkLevel {
    /// An empty chunk of the given extent.
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            flor: VoxelLayer::new(width, depth),
            map1: VoxelLayer::new(width, depth),
            map2: VoxelLayer::new(width, depth),
        }
    }

    /// Wraps three pre-parsed layers, refusing mismatched extents.
    pub fn from_layers(
        flor: VoxelLayer,
        map1: VoxelLayer,
        map2: VoxelLayer,
    ) -> Result<Self, Box<dyn Error>> {
        if !flor.same_extent(&map1) || !flor.same_extent(&map2) {
            return Err(format!(
                "chunk layer extents disagree: flor {}x{}, map1 {}x{}, map2 {}x{}",
                flor.width(),
                flor.depth(),
                map1.width(),
                map1.depth(),
                map2.width(),
                map2.depth()
            )
            .into());
        }
        Ok(Self { flor, map1, map2 })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.flor.width()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.flor.depth()
    }

    /// Copies this chunk's three layers into the destination layers with the
    /// chunk origin at `(dst_x, dst_z)`, clipped to the destination extent.
    pub fn stamp_into(
        &self,
        flor: &mut VoxelLayer,
        map1: &mut VoxelLayer,
        map2: &mut VoxelLayer,
        dst_x: usize,
        dst_z: usize,
    ) {
        let w = self.width().min(flor.width().saturating_sub(dst_x));
        let d = self.depth().min(flor.depth().saturating_sub(dst_z));
        for z in 0..d {
            for x in 0..w {
                flor.set(dst_x + x, dst_z + z, self.flor.get(x, z));
                map1.set(dst_x + x, dst_z + z, self.map1.get(x, z));
                map2.set(dst_x + x, dst_z + z, self.map2.get(x, z));
            }
        }
    }
}

/// Every chunk the assembler can stamp. Wilderness selectors are 1-based;
/// the first four wilderness chunks are the city placeholder blocks.
#[derive(Clone, Debug, Default)]
pub struct ChunkLibrary {
    pub wild_chunks: Vec<ChunkLevel>,
    pub city_blocks: Vec<ChunkLevel>,
    pub city_skeletons: Vec<ChunkLevel>,
}

impl ChunkLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wilderness chunk for a 1-based selector.
    pub fn wild_chunk(&self, selector: u8) -> Option<&ChunkLevel> {
        (selector as usize)
            .checked_sub(1)
            .and_then(|i| self.wild_chunks.get(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatched_layers_are_refused() {
        let flor = VoxelLayer::new(4, 4);
        let map1 = VoxelLayer::new(4, 4);
        let map2 = VoxelLayer::new(4, 5);
        assert!(ChunkLevel::from_layers(flor, map1, map2).is_err());
    }

    #[test]
    fn wild_selector_is_one_based() {
        let mut lib = ChunkLibrary::new();
        lib.wild_chunks.push(ChunkLevel::new(2, 2));
        assert!(lib.wild_chunk(0).is_none());
        assert!(lib.wild_chunk(1).is_some());
        assert!(lib.wild_chunk(2).is_none());
    }
}
