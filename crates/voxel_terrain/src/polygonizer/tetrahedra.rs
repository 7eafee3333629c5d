//! Marching tetrahedra.
//!
//! Each cell is split into six tetrahedra sharing the main diagonal 0–7,
//! one per monotone corner path from `(0,0,0)` to `(1,1,1)`:
//!
//! ```text
//! 0 → 1 → 3 → 7    (X, Y, Z)
//! 0 → 1 → 5 → 7    (X, Z, Y)
//! 0 → 2 → 3 → 7    (Y, X, Z)
//! 0 → 2 → 6 → 7    (Y, Z, X)
//! 0 → 4 → 5 → 7    (Z, X, Y)
//! 0 → 4 → 6 → 7    (Z, Y, X)
//! ```
//!
//! The split is identical in every cell, so faces shared by neighbouring
//! cells are cut the same way and the surface has no cracks. Output is an
//! unindexed triangle soup: every triangle owns its three vertices.

use glam::Vec3A;

use super::{corner_mask, edge_crossing, load_cell, Polygonizer, CORNER_POSITIONS};
use crate::types::RawMesh;
use crate::voxel_grid::VoxelGrid;

const TETRAHEDRA: [[usize; 4]; 6] = [
  [0, 1, 3, 7],
  [0, 1, 5, 7],
  [0, 2, 3, 7],
  [0, 2, 6, 7],
  [0, 4, 5, 7],
  [0, 4, 6, 7],
];

/// Six-tetrahedra-per-cell isosurface extraction.
#[derive(Clone, Copy, Debug, Default)]
pub struct MarchingTetrahedra;

impl Polygonizer for MarchingTetrahedra {
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "tetrahedra::polygonize"))]
  fn polygonize(&self, grid: &VoxelGrid, iso_level: f32) -> RawMesh {
    let (w, h, d) = grid.dimensions();
    let mut mesh = RawMesh::new();
    if w < 2 || h < 2 || d < 2 {
      return mesh;
    }

    for x in 0..w - 1 {
      for y in 0..h - 1 {
        for z in 0..d - 1 {
          let samples = load_cell(grid, x, y, z, iso_level);
          let mask = corner_mask(&samples);
          if mask == 0 || mask == 0xFF {
            continue;
          }

          let origin = Vec3A::new(x as f32, y as f32, z as f32);
          for tet in &TETRAHEDRA {
            polygonize_tetrahedron(origin, tet, &samples, &mut mesh);
          }
        }
      }
    }

    mesh
  }
}

fn polygonize_tetrahedron(origin: Vec3A, tet: &[usize; 4], samples: &[f32; 8], mesh: &mut RawMesh) {
  let mut inside = [0usize; 4];
  let mut outside = [0usize; 4];
  let (mut n_in, mut n_out) = (0, 0);
  for &corner in tet {
    if samples[corner] > 0.0 {
      inside[n_in] = corner;
      n_in += 1;
    } else {
      outside[n_out] = corner;
      n_out += 1;
    }
  }
  if n_in == 0 || n_out == 0 {
    return;
  }

  let corner = |c: usize| origin + CORNER_POSITIONS[c];
  let crossing = |a: usize, b: usize| edge_crossing(corner(a), corner(b), samples[a], samples[b]);

  // Solid → empty direction used to orient every emitted triangle.
  let centroid = |set: &[usize]| set.iter().map(|&c| corner(c)).sum::<Vec3A>() / set.len() as f32;
  let outward = centroid(&outside[..n_out]) - centroid(&inside[..n_in]);

  match (n_in, n_out) {
    (1, 3) => {
      let i = inside[0];
      let tri = [crossing(i, outside[0]), crossing(i, outside[1]), crossing(i, outside[2])];
      push_oriented(mesh, tri, outward);
    }
    (3, 1) => {
      let o = outside[0];
      let tri = [crossing(inside[0], o), crossing(inside[1], o), crossing(inside[2], o)];
      push_oriented(mesh, tri, outward);
    }
    _ => {
      // 2 / 2: the four crossings form a quad, walked around its perimeter.
      let [i0, i1] = [inside[0], inside[1]];
      let [o0, o1] = [outside[0], outside[1]];
      let quad = [crossing(i0, o0), crossing(i0, o1), crossing(i1, o1), crossing(i1, o0)];
      push_oriented(mesh, [quad[0], quad[1], quad[2]], outward);
      push_oriented(mesh, [quad[0], quad[2], quad[3]], outward);
    }
  }
}

/// Append an unindexed triangle whose face normal agrees with `outward`.
fn push_oriented(mesh: &mut RawMesh, tri: [Vec3A; 3], outward: Vec3A) {
  let normal = (tri[1] - tri[0]).cross(tri[2] - tri[0]);
  let ordered = if normal.dot(outward) < 0.0 {
    [tri[0], tri[2], tri[1]]
  } else {
    tri
  };

  for p in ordered {
    mesh.indices.push(mesh.vertices.len() as u32);
    mesh.vertices.push(p.to_array());
  }
}

#[cfg(test)]
#[path = "tetrahedra_test.rs"]
mod tetrahedra_test;
