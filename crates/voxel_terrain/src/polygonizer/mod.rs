//! Isosurface extraction from a [`VoxelGrid`].
//!
//! The pipeline only relies on the [`Polygonizer`] contract:
//! `grid × iso_level → RawMesh`, with vertices in lattice units. Two
//! interchangeable strategies ship with the crate.
//!
//! # Cube Topology
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```
//!
//! A corner is inside (solid) when `density > iso_level`. Emitted triangles
//! wind so their face normals point from solid towards empty space.

mod surface_nets;
mod tetrahedra;

pub use surface_nets::SurfaceNets;
pub use tetrahedra::MarchingTetrahedra;

use glam::Vec3A;

use crate::config::MarchingMode;
use crate::types::RawMesh;
use crate::voxel_grid::VoxelGrid;

/// Turns a scalar grid into triangles.
pub trait Polygonizer: Send + Sync {
  /// Extract the `iso_level` surface. Vertices are in lattice units.
  fn polygonize(&self, grid: &VoxelGrid, iso_level: f32) -> RawMesh;
}

/// Strategy for a configured marching mode.
pub fn for_mode(mode: MarchingMode) -> Box<dyn Polygonizer> {
  match mode {
    MarchingMode::Cubes => Box::new(SurfaceNets),
    MarchingMode::Tetrahedra => Box::new(MarchingTetrahedra),
  }
}

/// Corner positions within the unit cube, indexed by corner bits.
pub(crate) const CORNER_POSITIONS: [Vec3A; 8] = [
  Vec3A::new(0.0, 0.0, 0.0), // 0b000
  Vec3A::new(1.0, 0.0, 0.0), // 0b001
  Vec3A::new(0.0, 1.0, 0.0), // 0b010
  Vec3A::new(1.0, 1.0, 0.0), // 0b011
  Vec3A::new(0.0, 0.0, 1.0), // 0b100
  Vec3A::new(1.0, 0.0, 1.0), // 0b101
  Vec3A::new(0.0, 1.0, 1.0), // 0b110
  Vec3A::new(1.0, 1.0, 1.0), // 0b111
];

/// Load the 8 corner densities of cell `(x, y, z)`, shifted by `iso_level`.
#[inline]
pub(crate) fn load_cell(grid: &VoxelGrid, x: usize, y: usize, z: usize, iso_level: f32) -> [f32; 8] {
  std::array::from_fn(|i| grid.get(x + (i & 1), y + ((i >> 1) & 1), z + ((i >> 2) & 1)) - iso_level)
}

/// 8-bit mask with bit `i` set when corner `i` is inside.
#[inline]
pub(crate) fn corner_mask(samples: &[f32; 8]) -> u8 {
  samples
    .iter()
    .enumerate()
    .fold(0u8, |mask, (i, &s)| if s > 0.0 { mask | (1 << i) } else { mask })
}

/// Zero crossing along the edge `p0 → p1`.
///
/// Non-finite samples make `t` undefined; the crossing then falls back to
/// the edge midpoint so no NaN vertex is emitted.
#[inline]
pub(crate) fn edge_crossing(p0: Vec3A, p1: Vec3A, s0: f32, s1: f32) -> Vec3A {
  let t = s0 / (s0 - s1);
  let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.5 };
  p0 + t * (p1 - p0)
}
