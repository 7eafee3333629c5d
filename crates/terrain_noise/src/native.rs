//! FastNoiseLite-backed [`NoiseSource`].

use fastnoise_lite::{CellularReturnType, FastNoiseLite, NoiseType};

use crate::kind::{NoiseFamily, NoiseKind};
use crate::NoiseSource;

/// A configured FastNoiseLite generator for one octave.
///
/// Built once per octave before a generation pass and only read afterwards.
pub struct FastNoiseSource {
  inner: FastNoiseLite,
  kind: NoiseKind,
}

impl FastNoiseSource {
  /// Configure a generator for `kind`.
  ///
  /// `base_frequency` multiplies every incoming coordinate; the density field
  /// applies its own per-octave frequency on top, so this is normally `1.0`.
  pub fn new(kind: NoiseKind, seed: i32, base_frequency: f32) -> Self {
    let mut inner = FastNoiseLite::with_seed(seed);
    inner.set_frequency(Some(base_frequency));

    match kind.family() {
      NoiseFamily::Perlin | NoiseFamily::PerlinBuiltin => {
        inner.set_noise_type(Some(NoiseType::Perlin));
      }
      NoiseFamily::Simplex => {
        inner.set_noise_type(Some(NoiseType::OpenSimplex2));
      }
      NoiseFamily::Value => {
        inner.set_noise_type(Some(NoiseType::Value));
      }
      NoiseFamily::Voronoi => {
        inner.set_noise_type(Some(NoiseType::Cellular));
        inner.set_cellular_return_type(Some(CellularReturnType::CellValue));
      }
      NoiseFamily::Worley => {
        inner.set_noise_type(Some(NoiseType::Cellular));
        inner.set_cellular_return_type(Some(CellularReturnType::Distance));
      }
    }

    Self { inner, kind }
  }

  pub fn kind(&self) -> NoiseKind {
    self.kind
  }

  #[inline]
  fn finish(&self, value: f32) -> f32 {
    if self.kind.family() == NoiseFamily::PerlinBuiltin {
      (value * 0.5 + 0.5).clamp(0.0, 1.0)
    } else {
      value
    }
  }
}

impl NoiseSource for FastNoiseSource {
  #[inline]
  fn sample_2d(&self, x: f32, y: f32) -> f32 {
    self.finish(self.inner.get_noise_2d(x, y))
  }

  #[inline]
  fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32 {
    self.finish(self.inner.get_noise_3d(x, y, z))
  }
}
