//! Noise primitives for layered density-field terrain.
//!
//! This crate provides the per-octave noise capability consumed by the
//! density field. Each octave picks a [`NoiseKind`]; the kind is resolved once
//! into an opaque [`NoiseSource`] handle, so the per-cell hot path never
//! re-dispatches on the enum.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │ NoiseKind ──create_source(kind, seed, freq)──► NoiseSource │
//! │                                                            │
//! │   Perlin   ─► FastNoiseLite Perlin                         │
//! │   Simplex  ─► FastNoiseLite OpenSimplex2                   │
//! │   Value    ─► FastNoiseLite Value                          │
//! │   Voronoi  ─► FastNoiseLite Cellular (cell value)          │
//! │   Worley   ─► FastNoiseLite Cellular (distance)            │
//! │   Builtin  ─► Perlin remapped to [0, 1]                    │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//! ```ignore
//! use terrain_noise::{create_source, NoiseKind};
//!
//! let source = create_source(NoiseKind::Simplex3D, 1337, 1.0);
//! let n = source.sample_3d(0.5, 1.25, -3.0);
//! ```

mod kind;
mod native;

pub use kind::{Dimensionality, NoiseFamily, NoiseKind, ParseNoiseKindError};
pub use native::FastNoiseSource;

/// Scalar noise sampled at 2D or 3D coordinates.
///
/// Output range depends on the noise family (conventionally about `[-1, 1]`,
/// `[0, 1]` for the builtin Perlin variant). Implementations must be pure and
/// read-only once constructed so one instance can be shared across threads
/// for a whole generation pass.
pub trait NoiseSource: Send + Sync {
  /// Sample the horizontal plane.
  fn sample_2d(&self, x: f32, y: f32) -> f32;

  /// Sample a 3D position.
  fn sample_3d(&self, x: f32, y: f32, z: f32) -> f32;
}

/// Build the noise source for `kind`, scaled by `base_frequency`.
pub fn create_source(kind: NoiseKind, seed: i32, base_frequency: f32) -> Box<dyn NoiseSource> {
  Box::new(FastNoiseSource::new(kind, seed, base_frequency))
}
