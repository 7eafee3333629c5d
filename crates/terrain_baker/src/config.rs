//! Loading terrain settings from TOML.
//!
//! The file maps directly onto [`TerrainConfig`]; omitted keys keep their
//! defaults and octaves are given as `[[octaves]]` tables.

use anyhow::{Context, Result};
use std::path::Path;
use voxel_terrain::TerrainConfig;

/// Load and validate a terrain configuration file.
pub fn load(path: &Path) -> Result<TerrainConfig> {
	let content = std::fs::read_to_string(path)
		.with_context(|| format!("Failed to read config file: {}", path.display()))?;
	parse(&content).with_context(|| format!("Invalid config: {}", path.display()))
}

/// Parse and validate TOML text.
pub fn parse(content: &str) -> Result<TerrainConfig> {
	let config: TerrainConfig =
		toml::from_str(content).with_context(|| "Failed to parse config TOML")?;
	config.validate()?;
	Ok(config)
}
