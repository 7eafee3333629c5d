//! Shared fixtures for unit tests: stub noise sources and grid builders.

use terrain_noise::{NoiseKind, NoiseSource};

use crate::config::{NoiseOctave, TerrainConfig};
use crate::voxel_grid::VoxelGrid;

/// Returns the same value everywhere.
pub struct ConstantNoise(pub f32);

impl NoiseSource for ConstantNoise {
  fn sample_2d(&self, _x: f32, _y: f32) -> f32 {
    self.0
  }

  fn sample_3d(&self, _x: f32, _y: f32, _z: f32) -> f32 {
    self.0
  }
}

/// Echoes the second coordinate it receives.
///
/// 2D calls return the sampled `z`, 3D calls the sampled `y`, which makes
/// the coordinate routing observable.
pub struct SecondAxisNoise;

impl NoiseSource for SecondAxisNoise {
  fn sample_2d(&self, _x: f32, y: f32) -> f32 {
    y
  }

  fn sample_3d(&self, _x: f32, y: f32, _z: f32) -> f32 {
    y
  }
}

/// Config with no octaves and the hard floor pushed far out of the grid.
pub fn plain_config(resolution: u32) -> TerrainConfig {
  TerrainConfig::new()
    .with_resolution(resolution)
    .with_hard_floor(-1000.0, 1.0, 0.0)
}

/// Config with one simplex octave; produces rolling terrain.
pub fn hilly_config(resolution: u32) -> TerrainConfig {
  plain_config(resolution)
    .with_base_height(-0.5)
    .with_octave(
      NoiseOctave::new(NoiseKind::Simplex3D)
        .with_seed(1337)
        .with_frequency(2.0)
        .with_amplitude(0.25)
        .with_terrace(64.0),
    )
}

/// Signed distance to a sphere, positive (solid) inside.
pub fn sphere_grid(size: usize, radius: f32) -> VoxelGrid {
  let c = (size - 1) as f32 * 0.5;
  VoxelGrid::from_fn(size, size, size, |x, y, z| {
    let dx = x as f32 - c;
    let dy = y as f32 - c;
    let dz = z as f32 - c;
    radius - (dx * dx + dy * dy + dz * dz).sqrt()
  })
}

/// Solid below `level`, empty above.
pub fn ground_grid(width: usize, height: usize, depth: usize, level: f32) -> VoxelGrid {
  VoxelGrid::from_fn(width, height, depth, |_, y, _| level - y as f32)
}

/// Signed volume enclosed by a triangle list (divergence theorem).
///
/// Positive when faces point outward from the enclosed solid.
pub fn signed_volume(vertices: &[[f32; 3]], indices: &[u32]) -> f32 {
  indices
    .chunks_exact(3)
    .map(|tri| {
      let a = glam::Vec3::from_array(vertices[tri[0] as usize]);
      let b = glam::Vec3::from_array(vertices[tri[1] as usize]);
      let c = glam::Vec3::from_array(vertices[tri[2] as usize]);
      a.dot(b.cross(c)) / 6.0
    })
    .sum()
}

/// Unnormalized face normal of triangle `t`.
pub fn face_normal(vertices: &[[f32; 3]], indices: &[u32], t: usize) -> glam::Vec3 {
  let p = |k: usize| glam::Vec3::from_array(vertices[indices[t * 3 + k] as usize]);
  (p(1) - p(0)).cross(p(2) - p(0))
}
