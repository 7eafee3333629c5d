//! Layered-noise density field.
//!
//! ```text
//! lattice (x, y, z)
//!   │  u = x / (width - 1), v, w likewise
//!   ▼
//! world = (u * size.x, (v + base_height) * size.y, w * size.z) + offset
//!   │
//!   ▼
//! density = -world.y
//!         + Σ enabled octaves i:
//!             freq  = frequency * lacunarity^i
//!             amp   = amplitude * persistence^i
//!             raw   = noise(world * freq)        (2D kinds: x, z only)
//!             terraced(pow(raw * amp, redistribution), terrace)
//!         + saturate((hard_floor - world.y) * ramp) * magnitude
//! ```
//!
//! Positive density is solid, negative is empty.

use glam::Vec3;
use rayon::prelude::*;
use terrain_noise::{create_source, Dimensionality, NoiseSource};

use crate::config::{NoiseOctave, TerrainConfig};
use crate::error::TerrainError;
use crate::voxel_grid::VoxelGrid;

/// One octave with its noise source resolved and falloff applied.
pub struct ResolvedOctave {
  /// Position in the configured octave list (drives the falloff exponent).
  pub index: usize,
  pub dimensionality: Dimensionality,
  pub frequency: f32,
  pub amplitude: f32,
  pub terrace: f32,
  pub redistribution: f32,
  source: Box<dyn NoiseSource>,
}

impl std::fmt::Debug for ResolvedOctave {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ResolvedOctave")
      .field("index", &self.index)
      .field("dimensionality", &self.dimensionality)
      .field("frequency", &self.frequency)
      .field("amplitude", &self.amplitude)
      .field("terrace", &self.terrace)
      .field("redistribution", &self.redistribution)
      .finish_non_exhaustive()
  }
}

impl ResolvedOctave {
  /// Raw noise at a world position, before amplitude and shaping.
  #[inline]
  pub fn raw_sample(&self, world: Vec3) -> f32 {
    let p = world * self.frequency;
    match self.dimensionality {
      Dimensionality::TwoD => self.source.sample_2d(p.x, p.z),
      Dimensionality::ThreeD => self.source.sample_3d(p.x, p.y, p.z),
    }
  }

  /// Density contributed at a world position.
  #[inline]
  pub fn contribution(&self, world: Vec3) -> f32 {
    shape_sample(
      self.raw_sample(world),
      self.amplitude,
      self.redistribution,
      self.terrace,
    )
  }
}

/// Amplitude, redistribution and terrace quantization of one raw sample.
#[inline]
pub fn shape_sample(raw: f32, amplitude: f32, redistribution: f32, terrace: f32) -> f32 {
  terraced(redistribute(raw * amplitude, redistribution), terrace)
}

/// `value^exponent`, applied to the magnitude when a negative base would
/// otherwise produce NaN.
#[inline]
pub fn redistribute(value: f32, exponent: f32) -> f32 {
  if exponent == 1.0 {
    value
  } else if value < 0.0 && exponent.fract() != 0.0 {
    -(-value).powf(exponent)
  } else {
    value.powf(exponent)
  }
}

/// `round(value * steps) / steps`, ties to even.
#[inline]
pub fn terraced(value: f32, steps: f32) -> f32 {
  (value * steps).round_ties_even() / steps
}

/// Smoothed clamp forcing density positive below `floor`.
#[inline]
pub fn hard_floor_term(world_y: f32, floor: f32, ramp: f32, magnitude: f32) -> f32 {
  ((floor - world_y) * ramp).clamp(0.0, 1.0) * magnitude
}

/// Density sampler built from a [`TerrainConfig`].
///
/// Immutable once constructed; shared by reference across fill threads.
#[derive(Debug)]
pub struct DensityField {
  octaves: Vec<ResolvedOctave>,
  size: Vec3,
  base_height: f32,
  world_offset: Vec3,
  hard_floor: f32,
  hard_floor_ramp: f32,
  hard_floor_magnitude: f32,
}

impl DensityField {
  /// Resolve every enabled octave to a FastNoiseLite source.
  pub fn from_config(config: &TerrainConfig) -> Result<Self, TerrainError> {
    Self::with_sources(config, |octave| create_source(octave.kind, octave.seed, 1.0))
  }

  /// Resolve octaves with a caller-supplied source factory.
  ///
  /// Disabled octaves are dropped here and never sampled. Enabled octaves
  /// failing [`NoiseOctave::check`] are rejected.
  pub fn with_sources<F>(config: &TerrainConfig, mut make_source: F) -> Result<Self, TerrainError>
  where
    F: FnMut(&NoiseOctave) -> Box<dyn NoiseSource>,
  {
    let mut octaves = Vec::with_capacity(config.octaves.len());
    for (index, octave) in config.octaves.iter().enumerate() {
      if !octave.enabled {
        continue;
      }
      octave.check(index)?;

      let exponent = index as i32;
      octaves.push(ResolvedOctave {
        index,
        dimensionality: octave.kind.dimensionality(),
        frequency: octave.frequency * config.lacunarity.powi(exponent),
        amplitude: octave.amplitude * config.persistence.powi(exponent),
        terrace: octave.terrace,
        redistribution: octave.redistribution,
        source: make_source(octave),
      });
    }

    Ok(Self {
      octaves,
      size: Vec3::new(
        config.size[0] as f32,
        config.size[1] as f32,
        config.size[2] as f32,
      ),
      base_height: config.base_height,
      world_offset: Vec3::from_array(config.world_offset),
      hard_floor: config.hard_floor,
      hard_floor_ramp: config.hard_floor_ramp,
      hard_floor_magnitude: config.hard_floor_magnitude,
    })
  }

  /// Enabled octaves in configuration order.
  pub fn octaves(&self) -> &[ResolvedOctave] {
    &self.octaves
  }

  /// World position of a lattice point.
  pub fn world_position(
    &self,
    x: usize,
    y: usize,
    z: usize,
    width: usize,
    height: usize,
    depth: usize,
  ) -> Vec3 {
    let u = normalize(x, width);
    let v = normalize(y, height);
    let w = normalize(z, depth);
    Vec3::new(
      u * self.size.x,
      (v + self.base_height) * self.size.y,
      w * self.size.z,
    ) + self.world_offset
  }

  /// Density of a lattice point in a `width × height × depth` grid.
  #[inline]
  pub fn sample(
    &self,
    x: usize,
    y: usize,
    z: usize,
    width: usize,
    height: usize,
    depth: usize,
  ) -> f32 {
    self.sample_world(self.world_position(x, y, z, width, height, depth))
  }

  /// Density at a world position.
  pub fn sample_world(&self, world: Vec3) -> f32 {
    let mut density = -world.y;
    for octave in &self.octaves {
      density += octave.contribution(world);
    }
    density += hard_floor_term(
      world.y,
      self.hard_floor,
      self.hard_floor_ramp,
      self.hard_floor_magnitude,
    );
    density
  }

  /// Evaluate every lattice point into a new grid.
  ///
  /// X-slabs are filled in parallel; each cell is independent, so the result
  /// matches a serial fill bit for bit.
  #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "density::fill"))]
  pub fn fill(&self, width: usize, height: usize, depth: usize) -> VoxelGrid {
    let mut data = vec![0.0f32; width * height * depth];
    data
      .par_chunks_exact_mut(height * depth)
      .enumerate()
      .for_each(|(x, slab)| {
        for y in 0..height {
          for z in 0..depth {
            slab[y * depth + z] = self.sample(x, y, z, width, height, depth);
          }
        }
      });
    VoxelGrid::from_vec(width, height, depth, data)
  }
}

/// `index / (extent - 1)`, zero for single-point axes.
#[inline]
fn normalize(index: usize, extent: usize) -> f32 {
  if extent > 1 {
    index as f32 / (extent as f32 - 1.0)
  } else {
    0.0
  }
}

#[cfg(test)]
#[path = "density_test.rs"]
mod density_test;
