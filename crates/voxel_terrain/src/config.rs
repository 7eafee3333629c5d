//! Generation configuration: grid sizing, octave stack, shaping and output.
//!
//! Every field has a default so partial TOML files deserialize. Call
//! [`TerrainConfig::validate`] (the pipeline does) before using a config.

use serde::{Deserialize, Serialize};
use terrain_noise::NoiseKind;

use crate::error::TerrainError;

/// Smallest supported lattice points per unit of `size`.
pub const MIN_RESOLUTION: u32 = 8;

/// Largest supported lattice points per unit of `size`.
pub const MAX_RESOLUTION: u32 = 64;

/// Resolution at which one lattice step equals one world unit.
pub const DEFAULT_REFERENCE_RESOLUTION: f32 = 32.0;

/// Default chunk block size (10 000 triangles).
pub const DEFAULT_MAX_VERTICES_PER_CHUNK: usize = 30_000;

/// Isosurface extraction strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarchingMode {
  /// Cube cells, one vertex per surface cell. Faster, fewer vertices.
  #[default]
  #[serde(alias = "CUBES")]
  Cubes,
  /// Six tetrahedra per cube cell. Slower, follows the surface more closely.
  #[serde(alias = "TETRAHEDRA", alias = "TETRAHEDRON")]
  Tetrahedra,
}

/// Index width of the consuming mesh format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexFormat {
  U16,
  #[default]
  U32,
}

impl IndexFormat {
  /// Number of distinct vertices one mesh can address.
  pub const fn capacity(self) -> usize {
    match self {
      IndexFormat::U16 => 1 << 16,
      IndexFormat::U32 => u32::MAX as usize,
    }
  }
}

/// One layer of the fractal density sum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseOctave {
  /// Disabled octaves are skipped entirely.
  pub enabled: bool,
  pub seed: i32,
  pub kind: NoiseKind,
  pub frequency: f32,
  pub amplitude: f32,
  /// Quantization step count per unit: `round(x * terrace) / terrace`.
  pub terrace: f32,
  /// Exponent applied to the amplitude-scaled sample.
  pub redistribution: f32,
}

impl Default for NoiseOctave {
  fn default() -> Self {
    Self {
      enabled: true,
      seed: 0,
      kind: NoiseKind::default(),
      frequency: 1.0,
      amplitude: 1.0,
      terrace: 0.5,
      redistribution: 1.0,
    }
  }
}

impl NoiseOctave {
  pub fn new(kind: NoiseKind) -> Self {
    Self {
      kind,
      ..Self::default()
    }
  }

  pub fn with_seed(mut self, seed: i32) -> Self {
    self.seed = seed;
    self
  }

  pub fn with_frequency(mut self, frequency: f32) -> Self {
    self.frequency = frequency;
    self
  }

  pub fn with_amplitude(mut self, amplitude: f32) -> Self {
    self.amplitude = amplitude;
    self
  }

  pub fn with_terrace(mut self, terrace: f32) -> Self {
    self.terrace = terrace;
    self
  }

  pub fn with_redistribution(mut self, redistribution: f32) -> Self {
    self.redistribution = redistribution;
    self
  }

  pub fn with_enabled(mut self, enabled: bool) -> Self {
    self.enabled = enabled;
    self
  }

  /// Octave with its kind given by name, as written in config files.
  pub fn named(kind: &str) -> Result<Self, TerrainError> {
    Ok(Self::new(kind.parse()?))
  }

  /// Reject shaping parameters that would turn densities into NaN or
  /// infinity. `index` is this octave's position in the list.
  ///
  /// A zero raw sample raised to a negative exponent is infinite, and
  /// Perlin noise is exactly zero on integer coordinates, so the
  /// redistribution exponent must be finite and non-negative.
  pub fn check(&self, index: usize) -> Result<(), TerrainError> {
    if self.terrace == 0.0 {
      return Err(TerrainError::ZeroTerrace { octave: index });
    }
    if !self.terrace.is_finite() {
      return Err(TerrainError::NonFiniteTerrace {
        octave: index,
        terrace: self.terrace,
      });
    }
    if !(self.redistribution.is_finite() && self.redistribution >= 0.0) {
      return Err(TerrainError::InvalidRedistribution {
        octave: index,
        redistribution: self.redistribution,
      });
    }
    Ok(())
  }
}

/// Full configuration for one generation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
  /// Lattice points per unit of `size`, in `[8, 64]`.
  pub resolution: u32,
  /// Terrain extent in units; the grid is `resolution * size` per axis.
  pub size: [u32; 3],
  pub mode: MarchingMode,
  /// Vertical shift of the normalized `v` coordinate before scaling by `size.y`.
  pub base_height: f32,
  /// World height below which density is forced positive.
  pub hard_floor: f32,
  /// Ramp sharpness of the hard floor.
  pub hard_floor_ramp: f32,
  /// Density added at full hard-floor saturation.
  pub hard_floor_magnitude: f32,
  /// Per-octave frequency multiplier (`lacunarity^i`).
  pub lacunarity: f32,
  /// Per-octave amplitude multiplier (`persistence^i`).
  pub persistence: f32,
  pub octaves: Vec<NoiseOctave>,
  /// Emit gradient normals; otherwise chunks carry none.
  pub smooth_normals: bool,
  /// Negate gradients so normals point from solid towards empty space.
  pub flip_normals: bool,
  pub world_offset: [f32; 3],
  /// Isosurface threshold handed to the polygonizer.
  pub iso_level: f32,
  /// Numerator of the density factor `reference_resolution / resolution`.
  pub reference_resolution: f32,
  pub index_format: IndexFormat,
  /// Block size used when splitting; must be divisible by 3.
  pub max_vertices_per_chunk: usize,
}

impl Default for TerrainConfig {
  fn default() -> Self {
    Self {
      resolution: 32,
      size: [1, 1, 1],
      mode: MarchingMode::default(),
      base_height: 0.0,
      hard_floor: -13.0,
      hard_floor_ramp: 3.0,
      hard_floor_magnitude: 40.0,
      lacunarity: 2.0,
      persistence: 0.5,
      octaves: Vec::new(),
      smooth_normals: false,
      flip_normals: true,
      world_offset: [0.0; 3],
      iso_level: 0.0,
      reference_resolution: DEFAULT_REFERENCE_RESOLUTION,
      index_format: IndexFormat::default(),
      max_vertices_per_chunk: DEFAULT_MAX_VERTICES_PER_CHUNK,
    }
  }
}

impl TerrainConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_resolution(mut self, resolution: u32) -> Self {
    self.resolution = resolution;
    self
  }

  pub fn with_size(mut self, size: [u32; 3]) -> Self {
    self.size = size;
    self
  }

  pub fn with_mode(mut self, mode: MarchingMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn with_base_height(mut self, base_height: f32) -> Self {
    self.base_height = base_height;
    self
  }

  pub fn with_hard_floor(mut self, floor: f32, ramp: f32, magnitude: f32) -> Self {
    self.hard_floor = floor;
    self.hard_floor_ramp = ramp;
    self.hard_floor_magnitude = magnitude;
    self
  }

  pub fn with_falloff(mut self, lacunarity: f32, persistence: f32) -> Self {
    self.lacunarity = lacunarity;
    self.persistence = persistence;
    self
  }

  pub fn with_octave(mut self, octave: NoiseOctave) -> Self {
    self.octaves.push(octave);
    self
  }

  pub fn with_smooth_normals(mut self, smooth: bool) -> Self {
    self.smooth_normals = smooth;
    self
  }

  pub fn with_world_offset(mut self, offset: [f32; 3]) -> Self {
    self.world_offset = offset;
    self
  }

  pub fn with_reference_resolution(mut self, reference: f32) -> Self {
    self.reference_resolution = reference;
    self
  }

  pub fn with_index_format(mut self, format: IndexFormat, max_vertices_per_chunk: usize) -> Self {
    self.index_format = format;
    self.max_vertices_per_chunk = max_vertices_per_chunk;
    self
  }

  /// Lattice dimensions `(width, height, depth)`.
  pub fn grid_dimensions(&self) -> (usize, usize, usize) {
    let r = self.resolution as usize;
    (
      r * self.size[0] as usize,
      r * self.size[1] as usize,
      r * self.size[2] as usize,
    )
  }

  /// Scale from lattice units to world units.
  ///
  /// Inversely proportional to resolution so the terrain footprint stays
  /// fixed while detail increases.
  pub fn density_factor(&self) -> f32 {
    self.reference_resolution / self.resolution as f32
  }

  /// Check everything that would otherwise corrupt the grid or the chunks.
  pub fn validate(&self) -> Result<(), TerrainError> {
    for (axis, size) in ['x', 'y', 'z'].into_iter().zip(self.size) {
      if size == 0 || self.resolution == 0 {
        return Err(TerrainError::EmptyAxis {
          axis,
          resolution: self.resolution,
          size,
        });
      }
    }

    if !(MIN_RESOLUTION..=MAX_RESOLUTION).contains(&self.resolution) {
      return Err(TerrainError::ResolutionOutOfRange {
        resolution: self.resolution,
        min: MIN_RESOLUTION,
        max: MAX_RESOLUTION,
      });
    }

    for (index, octave) in self.octaves.iter().enumerate() {
      if octave.enabled {
        octave.check(index)?;
      }
    }

    if !(self.reference_resolution.is_finite() && self.reference_resolution > 0.0) {
      return Err(TerrainError::InvalidReferenceResolution(
        self.reference_resolution,
      ));
    }

    let capacity = self.index_format.capacity();
    let chunk = self.max_vertices_per_chunk;
    if chunk == 0 || chunk % 3 != 0 || chunk > capacity {
      return Err(TerrainError::InvalidChunkSize {
        max_vertices: chunk,
        capacity,
      });
    }

    Ok(())
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
