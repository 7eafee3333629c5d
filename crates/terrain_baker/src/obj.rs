//! Wavefront OBJ export for baked chunks.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use voxel_terrain::MeshChunk;

/// Write one chunk as OBJ text.
///
/// Vertices are translated by the chunk's `local_offset`. Faces are
/// 1-based and reference `vn` entries when the chunk carries normals.
pub fn write_chunk<W: Write>(chunk: &MeshChunk, out: &mut W) -> std::io::Result<()> {
	let [ox, oy, oz] = chunk.local_offset;
	for v in &chunk.vertices {
		writeln!(out, "v {} {} {}", v[0] + ox, v[1] + oy, v[2] + oz)?;
	}
	for n in &chunk.normals {
		writeln!(out, "vn {} {} {}", n[0], n[1], n[2])?;
	}

	let with_normals = chunk.has_normals();
	for tri in chunk.indices.chunks_exact(3) {
		let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
		if with_normals {
			writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}")?;
		} else {
			writeln!(out, "f {a} {b} {c}")?;
		}
	}
	Ok(())
}

/// Path of chunk `index` for `prefix`.
pub fn chunk_path(dir: &Path, prefix: &str, index: usize) -> PathBuf {
	dir.join(format!("{prefix}_{index}.obj"))
}

/// Delete `<prefix>_<n>.obj` files left by an earlier bake.
pub fn remove_previous(dir: &Path, prefix: &str) -> Result<usize> {
	let mut removed = 0;
	let entries = std::fs::read_dir(dir)
		.with_context(|| format!("Failed to list output dir: {}", dir.display()))?;

	for entry in entries {
		let path = entry?.path();
		if !is_baked_chunk(&path, prefix) {
			continue;
		}
		std::fs::remove_file(&path)
			.with_context(|| format!("Failed to remove: {}", path.display()))?;
		removed += 1;
	}
	Ok(removed)
}

fn is_baked_chunk(path: &Path, prefix: &str) -> bool {
	if path.extension().and_then(|e| e.to_str()) != Some("obj") {
		return false;
	}
	let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
		return false;
	};
	match stem.strip_prefix(prefix).and_then(|rest| rest.strip_prefix('_')) {
		Some(n) => !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()),
		None => false,
	}
}

/// Replace any previous bake in `dir` with `chunks`.
pub fn write_all(dir: &Path, prefix: &str, chunks: &[MeshChunk]) -> Result<Vec<PathBuf>> {
	std::fs::create_dir_all(dir)
		.with_context(|| format!("Failed to create output dir: {}", dir.display()))?;

	let removed = remove_previous(dir, prefix)?;
	if removed > 0 {
		log::info!("Removed {} previously baked chunk(s)", removed);
	}

	let mut written = Vec::with_capacity(chunks.len());
	for (index, chunk) in chunks.iter().enumerate() {
		let path = chunk_path(dir, prefix, index);
		let file =
			File::create(&path).with_context(|| format!("Failed to create: {}", path.display()))?;
		let mut out = BufWriter::new(file);
		write_chunk(chunk, &mut out)
			.and_then(|_| out.flush())
			.with_context(|| format!("Failed to write: {}", path.display()))?;
		written.push(path);
	}
	Ok(written)
}
