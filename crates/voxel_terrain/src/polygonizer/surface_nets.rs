//! Naive Surface Nets over an arbitrary-sized [`VoxelGrid`].
//!
//! One vertex per cell containing a crossing, placed at the centroid of the
//! cell's edge crossings. Output is indexed: neighbouring quads share
//! vertices.
//!
//! ```text
//! PHASE 1: for each cell, classify 8 corners
//!          mixed cell → vertex at crossing centroid, record its index
//! PHASE 2: for each lattice edge with a sign change
//!          gather the 4 cells around it → quad → 2 triangles
//! ```

use glam::Vec3A;

use super::{corner_mask, edge_crossing, load_cell, Polygonizer, CORNER_POSITIONS};
use crate::types::RawMesh;
use crate::voxel_grid::VoxelGrid;

/// Corner pairs for the 12 cube edges.
///
/// Edges 0..3 leave corner 0 along +X, +Y, +Z; quads are emitted for those.
const CUBE_EDGES: [[usize; 2]; 12] = [
  [0, 1], // X
  [0, 2], // Y
  [0, 4], // Z
  [1, 3],
  [1, 5],
  [2, 3],
  [2, 6],
  [4, 5],
  [4, 6],
  [3, 7],
  [5, 7],
  [6, 7],
];

const NO_VERTEX: u32 = u32::MAX;

/// Dual contouring with centroid placement.
#[derive(Clone, Copy, Debug, Default)]
pub struct SurfaceNets;

impl Polygonizer for SurfaceNets {
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "surface_nets::polygonize"))]
  fn polygonize(&self, grid: &VoxelGrid, iso_level: f32) -> RawMesh {
    let (w, h, d) = grid.dimensions();
    let mut mesh = RawMesh::new();
    if w < 2 || h < 2 || d < 2 {
      return mesh;
    }

    let cells = CellIndex::new(w - 1, h - 1, d - 1);
    let mut vertex_of_cell = vec![NO_VERTEX; cells.len()];

    for x in 0..w - 1 {
      for y in 0..h - 1 {
        for z in 0..d - 1 {
          let samples = load_cell(grid, x, y, z, iso_level);
          let mask = corner_mask(&samples);
          if mask == 0 || mask == 0xFF {
            continue;
          }

          let origin = Vec3A::new(x as f32, y as f32, z as f32);
          let position = origin + crossing_centroid(&samples, mask);
          vertex_of_cell[cells.index(x, y, z)] = mesh.vertices.len() as u32;
          mesh.vertices.push(position.to_array());
        }
      }
    }

    for x in 0..w - 1 {
      for y in 0..h - 1 {
        for z in 0..d - 1 {
          if vertex_of_cell[cells.index(x, y, z)] == NO_VERTEX {
            continue;
          }
          let samples = load_cell(grid, x, y, z, iso_level);
          emit_quads([x, y, z], &samples, &cells, &vertex_of_cell, &mut mesh);
        }
      }
    }

    mesh
  }
}

/// Flat indexing for the `(w-1) × (h-1) × (d-1)` cell lattice.
struct CellIndex {
  height: usize,
  depth: usize,
  len: usize,
}

impl CellIndex {
  fn new(width: usize, height: usize, depth: usize) -> Self {
    Self {
      height,
      depth,
      len: width * height * depth,
    }
  }

  #[inline]
  fn index(&self, x: usize, y: usize, z: usize) -> usize {
    (x * self.height + y) * self.depth + z
  }

  fn len(&self) -> usize {
    self.len
  }
}

/// Centroid of the edge crossings within the unit cell.
fn crossing_centroid(samples: &[f32; 8], mask: u8) -> Vec3A {
  let mut sum = Vec3A::ZERO;
  let mut count = 0u32;

  for &[c0, c1] in &CUBE_EDGES {
    let inside0 = (mask >> c0) & 1;
    let inside1 = (mask >> c1) & 1;
    if inside0 == inside1 {
      continue;
    }
    sum += edge_crossing(CORNER_POSITIONS[c0], CORNER_POSITIONS[c1], samples[c0], samples[c1]);
    count += 1;
  }

  if count == 0 {
    return Vec3A::splat(0.5);
  }
  sum / count as f32
}

/// Emit the quads dual to the three edges leaving corner 0 of the cell.
///
/// Quad corners are the cells `p`, `p - u`, `p - u - v` and `p - v`, which
/// run counter-clockwise around `+axis`. The order is reversed when the
/// solid side of the edge is its far end so faces point towards empty space.
fn emit_quads(
  pos: [usize; 3],
  samples: &[f32; 8],
  cells: &CellIndex,
  vertex_of_cell: &[u32],
  mesh: &mut RawMesh,
) {
  for axis in 0..3 {
    let [c0, c1] = CUBE_EDGES[axis];
    let near_inside = samples[c0] > 0.0;
    if near_inside == (samples[c1] > 0.0) {
      continue;
    }

    let u = (axis + 1) % 3;
    let v = (axis + 2) % 3;
    // Boundary edges lack a full ring of cells.
    if pos[u] == 0 || pos[v] == 0 {
      continue;
    }

    let lookup = |du: usize, dv: usize| {
      let mut p = pos;
      p[u] -= du;
      p[v] -= dv;
      vertex_of_cell[cells.index(p[0], p[1], p[2])]
    };

    let v_a = lookup(0, 0);
    let v_c = lookup(1, 0);
    let v_b = lookup(1, 1);
    let v_d = lookup(0, 1);
    if v_a == NO_VERTEX || v_b == NO_VERTEX || v_c == NO_VERTEX || v_d == NO_VERTEX {
      continue;
    }

    let position = |i: u32| Vec3A::from_array(mesh.vertices[i as usize]);
    let diag_ab = position(v_a).distance_squared(position(v_b));
    let diag_cd = position(v_c).distance_squared(position(v_d));

    // Cyclic order A, C, B, D; split along the shorter diagonal.
    let tris = if diag_ab <= diag_cd {
      [[v_a, v_c, v_b], [v_a, v_b, v_d]]
    } else {
      [[v_c, v_b, v_d], [v_c, v_d, v_a]]
    };

    for [i0, i1, i2] in tris {
      if near_inside {
        mesh.indices.extend_from_slice(&[i0, i1, i2]);
      } else {
        mesh.indices.extend_from_slice(&[i0, i2, i1]);
      }
    }
  }
}

#[cfg(test)]
#[path = "surface_nets_test.rs"]
mod surface_nets_test;
