//! Error taxonomy for terrain generation.
//!
//! Only configuration problems surface as errors. Degenerate gradients are
//! recovered per vertex and chunk splitting is internal, so neither appears
//! here.

use terrain_noise::ParseNoiseKindError;
use thiserror::Error;

/// Fatal problems that abort a generation call before any chunk is emitted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TerrainError {
  #[error("resolution {resolution} is outside the supported range [{min}, {max}]")]
  ResolutionOutOfRange { resolution: u32, min: u32, max: u32 },

  #[error("grid axis `{axis}` has zero length (resolution {resolution} × size {size})")]
  EmptyAxis { axis: char, resolution: u32, size: u32 },

  #[error("octave {octave} has a zero terrace step")]
  ZeroTerrace { octave: usize },

  #[error("octave {octave} has a non-finite terrace step ({terrace})")]
  NonFiniteTerrace { octave: usize, terrace: f32 },

  #[error(
    "octave {octave} has redistribution exponent {redistribution}, expected a finite value >= 0"
  )]
  InvalidRedistribution { octave: usize, redistribution: f32 },

  #[error(transparent)]
  UnknownNoiseKind(#[from] ParseNoiseKindError),

  #[error(
    "chunk size {max_vertices} must be non-zero, divisible by 3 and at most {capacity} vertices"
  )]
  InvalidChunkSize { max_vertices: usize, capacity: usize },

  #[error("reference resolution must be positive and finite, got {0}")]
  InvalidReferenceResolution(f32),

  #[error("generation cancelled")]
  Cancelled,
}
