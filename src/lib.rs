//! Exterior world reconstruction from the legacy tile format.
//!
//! Rebuilds city and wilderness regions from already-parsed chunk buffers:
//! decodes the layered tile codes into a voxel grid, reproduces the seeded
//! generation sequences bit-for-bit (wilderness fill selection, lock levels,
//! building names), splices authored city skeletons into generic filler, and
//! hands back a self-contained level product.
#![forbid(unsafe_code)]

pub mod city;
pub mod doors;
pub mod exterior;
pub mod names;
pub mod sky;
pub mod weather;
pub mod wild;

pub use exterior::{AssemblyError, ExteriorAssets, ExteriorLevelData};
pub use names::MenuNameMap;
pub use relic_random::LegacyRandom;
pub use relic_voxel::{VoxelGrid, VoxelLayer};
pub use weather::{Climate, Weather};
