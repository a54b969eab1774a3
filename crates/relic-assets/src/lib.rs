//! Read-only lookup tables and raw chunk sources for exterior generation.
#![forbid(unsafe_code)]

pub mod chunks;
pub mod city;
pub mod strings;

pub use chunks::{ChunkLevel, ChunkLibrary};
pub use city::{
    CityDefinition, CityLibrary, CityType, ProvinceDefinition, ReservedBlock, WildBlockLists,
};
pub use strings::{ExeStrings, MenuTable};

/// Voxels along each side of one wilderness fill chunk.
pub const WILD_CHUNK_DIM: usize = 64;

/// Voxels along each side of one city block cell.
pub const CITY_BLOCK_DIM: usize = 20;
