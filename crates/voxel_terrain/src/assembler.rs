//! Turns polygonizer output into bounded, world-scaled mesh chunks.
//!
//! ```text
//! RawMesh (lattice units)
//!     │  × density_factor
//!     ▼
//! scaled vertices ──► optional gradient normals (from unscaled positions)
//!     │
//!     ▼
//! fits index capacity? ── yes ──► 1 chunk
//!     │ no
//!     ▼
//! triangle blocks of max_vertices_per_chunk / 3 ──► N chunks
//! ```
//!
//! Every chunk shares the same `local_offset`, which centres the lattice on
//! the parent origin.

use crate::config::TerrainConfig;
use crate::types::{MeshChunk, MinMaxAABB, RawMesh};
use crate::voxel_grid::VoxelGrid;

const UNMAPPED: u32 = u32::MAX;

/// Scaling, normal and chunking parameters captured from a [`TerrainConfig`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshAssembler {
  pub density_factor: f32,
  pub smooth_normals: bool,
  pub flip_normals: bool,
  /// Largest vertex count a single chunk may address.
  pub capacity: usize,
  /// Vertices per block when splitting; a multiple of 3.
  pub max_vertices_per_chunk: usize,
}

impl MeshAssembler {
  pub fn new(config: &TerrainConfig) -> Self {
    Self {
      density_factor: config.density_factor(),
      smooth_normals: config.smooth_normals,
      flip_normals: config.flip_normals,
      capacity: config.index_format.capacity(),
      max_vertices_per_chunk: config.max_vertices_per_chunk,
    }
  }

  /// Offset that centres a `width × height × depth` lattice on the origin.
  pub fn local_offset(grid: &VoxelGrid) -> [f32; 3] {
    let (w, h, d) = grid.dimensions();
    [-(w as f32) / 2.0, -(h as f32) / 2.0, -(d as f32) / 2.0]
  }

  /// Assemble `raw` into chunks. Returns an empty list for an empty mesh.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "assembler::assemble"))]
  pub fn assemble(&self, raw: &RawMesh, grid: &VoxelGrid) -> Vec<MeshChunk> {
    if raw.vertices.is_empty() {
      return Vec::new();
    }

    let local_offset = Self::local_offset(grid);
    let vertices = self.scale(&raw.vertices);
    let normals = if self.smooth_normals {
      self.normals(&raw.vertices, grid)
    } else {
      Vec::new()
    };

    if vertices.len() <= self.capacity {
      return vec![MeshChunk {
        bounds: MinMaxAABB::from_points(&vertices),
        vertices,
        normals,
        indices: raw.indices.clone(),
        local_offset,
      }];
    }

    let block = self.max_vertices_per_chunk.max(3) / 3 * 3;
    log::warn!(
      "{} vertices exceed index capacity {}, splitting into blocks of {}",
      vertices.len(),
      self.capacity,
      block
    );
    split(&vertices, &normals, &raw.indices, block, local_offset)
  }

  fn scale(&self, vertices: &[[f32; 3]]) -> Vec<[f32; 3]> {
    let f = self.density_factor;
    vertices.iter().map(|v| [v[0] * f, v[1] * f, v[2] * f]).collect()
  }

  /// Gradient normals sampled at the unscaled lattice positions.
  fn normals(&self, lattice: &[[f32; 3]], grid: &VoxelGrid) -> Vec<[f32; 3]> {
    let (w, h, d) = grid.dimensions();
    let normalize = |c: f32, dim: usize| if dim > 1 { c / (dim - 1) as f32 } else { 0.0 };
    let sign = if self.flip_normals { -1.0 } else { 1.0 };

    lattice
      .iter()
      .map(|p| {
        let n = grid.gradient(normalize(p[0], w), normalize(p[1], h), normalize(p[2], d));
        [n[0] * sign, n[1] * sign, n[2] * sign]
      })
      .collect()
  }
}

/// Assemble with parameters taken from `config`.
pub fn assemble(raw: &RawMesh, grid: &VoxelGrid, config: &TerrainConfig) -> Vec<MeshChunk> {
  MeshAssembler::new(config).assemble(raw, grid)
}

/// Partition the triangle stream into blocks of `block / 3` triangles.
///
/// Each block gathers the vertices it references in first-use order and
/// rewrites its indices against them. For an unindexed soup this is the
/// plain vertex-block partition.
fn split(
  vertices: &[[f32; 3]],
  normals: &[[f32; 3]],
  indices: &[u32],
  block: usize,
  local_offset: [f32; 3],
) -> Vec<MeshChunk> {
  let has_normals = !normals.is_empty();
  let mut remap = vec![UNMAPPED; vertices.len()];
  let mut chunks = Vec::with_capacity(indices.len().div_ceil(block));

  for tri_block in indices.chunks(block) {
    let reserve = tri_block.len().min(vertices.len());
    let mut chunk = MeshChunk {
      vertices: Vec::with_capacity(reserve),
      normals: Vec::with_capacity(if has_normals { reserve } else { 0 }),
      indices: Vec::with_capacity(tri_block.len()),
      local_offset,
      bounds: MinMaxAABB::EMPTY,
    };

    for &global in tri_block {
      let slot = &mut remap[global as usize];
      if *slot == UNMAPPED {
        *slot = chunk.vertices.len() as u32;
        chunk.vertices.push(vertices[global as usize]);
        if has_normals {
          chunk.normals.push(normals[global as usize]);
        }
      }
      chunk.indices.push(*slot);
    }

    for &global in tri_block {
      remap[global as usize] = UNMAPPED;
    }
    chunk.bounds = MinMaxAABB::from_points(&chunk.vertices);
    log::debug!(
      "chunk {}: {} vertices, {} triangles",
      chunks.len(),
      chunk.vertices.len(),
      chunk.triangle_count()
    );
    chunks.push(chunk);
  }

  chunks
}

#[cfg(test)]
#[path = "assembler_test.rs"]
mod assembler_test;
