//! End-to-end generation: config → density grid → raw mesh → chunks.
//!
//! ```text
//! validate ─► resolve octaves ─► fill grid ─► polygonize ─► assemble
//!                                   │             │
//!                               cancel?       cancel?
//! ```
//!
//! Configuration errors abort before any work is done. The optional cancel
//! flag is polled between phases only, so an uncancelled run is identical to
//! [`generate`].

use std::sync::atomic::{AtomicBool, Ordering};

use web_time::Instant;

use crate::assembler::MeshAssembler;
use crate::config::TerrainConfig;
use crate::density::DensityField;
use crate::error::TerrainError;
use crate::polygonizer::{self, Polygonizer};
use crate::types::{MeshChunk, RawMesh};

/// Counts and phase timings from one generation call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationStats {
  pub grid_dimensions: (usize, usize, usize),
  /// Vertices produced by the polygonizer, before chunking.
  pub raw_vertex_count: usize,
  pub triangle_count: usize,
  pub chunk_count: usize,
  /// Density fill time in microseconds.
  pub fill_us: u64,
  pub polygonize_us: u64,
  pub assemble_us: u64,
}

impl GenerationStats {
  pub fn total_us(&self) -> u64 {
    self.fill_us + self.polygonize_us + self.assemble_us
  }
}

/// Generate chunks with the polygonizer selected by `config.mode`.
pub fn generate(config: &TerrainConfig) -> Result<Vec<MeshChunk>, TerrainError> {
  generate_timed(config).map(|(chunks, _)| chunks)
}

/// Generate chunks and report phase timings.
pub fn generate_timed(
  config: &TerrainConfig,
) -> Result<(Vec<MeshChunk>, GenerationStats), TerrainError> {
  let polygonizer = polygonizer::for_mode(config.mode);
  run(config, polygonizer.as_ref(), None)
}

/// Generate with an explicit polygonizer and an optional cancel flag.
///
/// Returns [`TerrainError::Cancelled`] if `cancel` is set when a phase
/// boundary is reached.
pub fn generate_with(
  config: &TerrainConfig,
  polygonizer: &dyn Polygonizer,
  cancel: Option<&AtomicBool>,
) -> Result<Vec<MeshChunk>, TerrainError> {
  run(config, polygonizer, cancel).map(|(chunks, _)| chunks)
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::generate"))]
fn run(
  config: &TerrainConfig,
  polygonizer: &dyn Polygonizer,
  cancel: Option<&AtomicBool>,
) -> Result<(Vec<MeshChunk>, GenerationStats), TerrainError> {
  config.validate()?;
  let field = DensityField::from_config(config)?;
  let (w, h, d) = config.grid_dimensions();
  let mut stats = GenerationStats {
    grid_dimensions: (w, h, d),
    ..Default::default()
  };

  check_cancelled(cancel)?;
  let start = Instant::now();
  let grid = field.fill(w, h, d);
  stats.fill_us = start.elapsed().as_micros() as u64;
  log::debug!("density fill {}×{}×{} in {}µs", w, h, d, stats.fill_us);

  check_cancelled(cancel)?;
  let start = Instant::now();
  let raw = if grid.is_homogeneous(config.iso_level) {
    log::debug!("density field has no iso crossing, skipping polygonizer");
    RawMesh::new()
  } else {
    polygonizer.polygonize(&grid, config.iso_level)
  };
  stats.polygonize_us = start.elapsed().as_micros() as u64;
  stats.raw_vertex_count = raw.vertices.len();
  stats.triangle_count = raw.triangle_count();
  log::debug!(
    "polygonized {} vertices, {} triangles in {}µs",
    stats.raw_vertex_count,
    stats.triangle_count,
    stats.polygonize_us
  );

  check_cancelled(cancel)?;
  let start = Instant::now();
  let chunks = MeshAssembler::new(config).assemble(&raw, &grid);
  stats.assemble_us = start.elapsed().as_micros() as u64;
  stats.chunk_count = chunks.len();
  log::debug!("assembled {} chunks in {}µs", stats.chunk_count, stats.assemble_us);

  Ok((chunks, stats))
}

fn check_cancelled(cancel: Option<&AtomicBool>) -> Result<(), TerrainError> {
  match cancel {
    Some(flag) if flag.load(Ordering::Relaxed) => Err(TerrainError::Cancelled),
    _ => Ok(()),
  }
}

/// Owns the currently attached chunk set.
///
/// Each successful [`regenerate`](Self::regenerate) drops the previous set
/// before attaching the new one. A failed call leaves it untouched.
#[derive(Debug, Default)]
pub struct TerrainGenerator {
  chunks: Vec<MeshChunk>,
  stats: Option<GenerationStats>,
}

impl TerrainGenerator {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn chunks(&self) -> &[MeshChunk] {
    &self.chunks
  }

  /// Stats of the last successful generation.
  pub fn last_stats(&self) -> Option<&GenerationStats> {
    self.stats.as_ref()
  }

  pub fn regenerate(&mut self, config: &TerrainConfig) -> Result<&[MeshChunk], TerrainError> {
    let (chunks, stats) = generate_timed(config)?;
    self.chunks = chunks;
    self.stats = Some(stats);
    Ok(&self.chunks)
  }

  /// Detach and return the current chunk set.
  pub fn take_chunks(&mut self) -> Vec<MeshChunk> {
    self.stats = None;
    std::mem::take(&mut self.chunks)
  }
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;
