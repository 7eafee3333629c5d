//! Procedural terrain meshes from layered noise.
//!
//! ```text
//! TerrainConfig ──► DensityField ──► VoxelGrid ──► Polygonizer ──► MeshAssembler
//!  (octaves)        (NoiseSource)    (densities)    (RawMesh)        (MeshChunk[])
//! ```
//!
//! - [`density`]: octave stacking, redistribution, terracing and the hard floor
//! - [`voxel_grid`]: dense lattice storage and gradient estimation
//! - [`polygonizer`]: surface nets and marching tetrahedra
//! - [`assembler`]: world scaling, smooth normals and index-capacity chunking
//! - [`pipeline`]: one-call generation, timing and the chunk-set owner
//!
//! ```no_run
//! use voxel_terrain::{generate, NoiseKind, NoiseOctave, TerrainConfig};
//!
//! let config = TerrainConfig::new()
//!   .with_resolution(32)
//!   .with_base_height(-0.5)
//!   .with_octave(NoiseOctave::new(NoiseKind::Simplex3D).with_frequency(2.0).with_amplitude(0.3));
//!
//! for chunk in generate(&config)? {
//!   println!("{} vertices at {:?}", chunk.vertex_count(), chunk.local_offset);
//! }
//! # Ok::<(), voxel_terrain::TerrainError>(())
//! ```

pub mod assembler;
pub mod config;
pub mod density;
pub mod error;
pub mod pipeline;
pub mod polygonizer;
pub mod types;
pub mod voxel_grid;

#[cfg(test)]
mod test_utils;

pub use assembler::{assemble, MeshAssembler};
pub use config::{IndexFormat, MarchingMode, NoiseOctave, TerrainConfig};
pub use density::DensityField;
pub use error::TerrainError;
pub use pipeline::{generate, generate_timed, generate_with, GenerationStats, TerrainGenerator};
pub use polygonizer::{MarchingTetrahedra, Polygonizer, SurfaceNets};
pub use terrain_noise::{NoiseKind, NoiseSource};
pub use types::{MeshChunk, MinMaxAABB, RawMesh};
pub use voxel_grid::VoxelGrid;
