//! Terrain chunk baker.
//!
//! Generates terrain from a TOML configuration and writes each chunk as a
//! Wavefront OBJ file:
//!
//! ```text
//! bake_terrain --config terrain.toml --output baked/ [--prefix terrain]
//!
//! baked/terrain_0.obj
//! baked/terrain_1.obj   (only when the mesh exceeds the index capacity)
//! ```
//!
//! Set `RUST_LOG=debug` for per-phase timings.

mod config;
mod obj;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use voxel_terrain::MinMaxAABB;

/// Bakes procedural terrain into OBJ chunks.
#[derive(Parser, Debug)]
#[command(name = "bake_terrain")]
#[command(about = "Generates voxel terrain and writes OBJ mesh chunks")]
struct Args {
	/// Path to terrain configuration TOML file.
	#[arg(short, long)]
	config: PathBuf,

	/// Directory receiving the baked chunks.
	#[arg(short, long)]
	output: PathBuf,

	/// File name prefix for chunks.
	#[arg(short, long, default_value = "terrain")]
	prefix: String,
}

fn main() -> Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	log::info!("Loading config from: {}", args.config.display());
	let config = config::load(&args.config)?;

	let (w, h, d) = config.grid_dimensions();
	log::info!(
		"Generating {}×{}×{} grid ({:?}, {} octave(s))",
		w,
		h,
		d,
		config.mode,
		config.octaves.iter().filter(|o| o.enabled).count()
	);

	let (chunks, stats) = voxel_terrain::generate_timed(&config).context("Terrain generation failed")?;
	log::info!(
		"{} vertices, {} triangles, {} chunk(s) in {}µs (fill {}µs, polygonize {}µs, assemble {}µs)",
		stats.raw_vertex_count,
		stats.triangle_count,
		stats.chunk_count,
		stats.total_us(),
		stats.fill_us,
		stats.polygonize_us,
		stats.assemble_us
	);

	if chunks.is_empty() {
		log::warn!("Density field has no surface; no chunks written");
	} else {
		let bounds = chunks
			.iter()
			.fold(MinMaxAABB::EMPTY, |acc, c| acc.union(&c.placed_bounds()));
		log::info!("Surface bounds: {:?} .. {:?}", bounds.min, bounds.max);
	}

	let written = obj::write_all(&args.output, &args.prefix, &chunks)?;
	for path in &written {
		log::info!("  ✓ {}", path.display());
	}
	log::info!("Done! Output written to: {}", args.output.display());

	Ok(())
}
