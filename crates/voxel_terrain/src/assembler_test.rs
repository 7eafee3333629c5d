use super::*;
use crate::test_utils::{ground_grid, plain_config};
use crate::voxel_grid::FALLBACK_NORMAL;

/// `triangles` disjoint triangles, one vertex per index.
fn soup(triangles: usize) -> RawMesh {
  let vertices: Vec<[f32; 3]> = (0..triangles * 3)
    .map(|i| [i as f32 * 0.01, (i % 7) as f32 * 0.5, (i % 5) as f32])
    .collect();
  let indices = (0..vertices.len() as u32).collect();
  RawMesh { vertices, indices }
}

fn splitting(capacity: usize, block: usize) -> MeshAssembler {
  MeshAssembler {
    density_factor: 1.0,
    smooth_normals: false,
    flip_normals: true,
    capacity,
    max_vertices_per_chunk: block,
  }
}

#[test]
fn test_empty_mesh_yields_no_chunks() {
  let grid = ground_grid(8, 8, 8, 3.5);
  let chunks = assemble(&RawMesh::new(), &grid, &plain_config(8));
  assert!(chunks.is_empty());
}

#[test]
fn test_single_chunk_when_within_capacity() {
  let grid = ground_grid(16, 16, 16, 3.5);
  let raw = soup(4);
  let chunks = assemble(&raw, &grid, &plain_config(16));

  assert_eq!(chunks.len(), 1);
  assert_eq!(chunks[0].indices, raw.indices);
  assert_eq!(chunks[0].local_offset, [-8.0, -8.0, -8.0]);
  assert!(!chunks[0].has_normals());
}

#[test]
fn test_vertices_scale_by_density_factor() {
  let grid = ground_grid(16, 16, 16, 3.5);
  let raw = soup(2);
  // 32 / 16
  let chunks = assemble(&raw, &grid, &plain_config(16));

  for (scaled, original) in chunks[0].vertices.iter().zip(&raw.vertices) {
    for axis in 0..3 {
      assert!((scaled[axis] - original[axis] * 2.0).abs() < 1e-6);
    }
  }
}

#[test]
fn test_doubling_resolution_halves_coordinates() {
  let grid = ground_grid(16, 16, 16, 3.5);
  let raw = soup(6);
  let coarse = assemble(&raw, &grid, &plain_config(16));
  let fine = assemble(&raw, &grid, &plain_config(32));

  for (c, f) in coarse[0].vertices.iter().zip(&fine[0].vertices) {
    assert_eq!([c[0] * 0.5, c[1] * 0.5, c[2] * 0.5], *f);
  }
  let (cb, fb) = (coarse[0].bounds, fine[0].bounds);
  assert_eq!(cb.extent().map(|e| e * 0.5), fb.extent());
}

#[test]
fn test_chunk_bounds_cover_own_vertices() {
  let grid = VoxelGrid::new(8, 8, 8);
  let raw = soup(10);
  let whole = splitting(usize::MAX, 9).assemble(&raw, &grid);
  assert_eq!(whole[0].bounds, MinMaxAABB::from_points(&raw.vertices));

  let chunks = splitting(20, 9).assemble(&raw, &grid);
  let mut union = MinMaxAABB::EMPTY;
  for chunk in &chunks {
    assert_eq!(chunk.bounds, MinMaxAABB::from_points(&chunk.vertices));
    union = union.union(&chunk.bounds);
  }
  assert_eq!(union, whole[0].bounds);
}

#[test]
fn test_local_offset_uses_lattice_dimensions() {
  let grid = VoxelGrid::new(8, 16, 24);
  assert_eq!(MeshAssembler::local_offset(&grid), [-4.0, -8.0, -12.0]);
}

#[test]
fn test_smooth_normals_point_away_from_solid() {
  let grid = ground_grid(8, 8, 8, 3.5);
  let raw = RawMesh {
    vertices: vec![[1.0, 3.5, 1.0], [4.0, 3.5, 2.0], [2.0, 3.5, 6.0]],
    indices: vec![0, 1, 2],
  };
  let config = plain_config(8).with_smooth_normals(true);
  let chunks = assemble(&raw, &grid, &config);

  assert_eq!(chunks[0].normals.len(), 3);
  for n in &chunks[0].normals {
    assert!((n[1] - 1.0).abs() < 1e-5, "normal {n:?}");
  }

  let mut unflipped = config;
  unflipped.flip_normals = false;
  for n in &assemble(&raw, &grid, &unflipped)[0].normals {
    assert!((n[1] + 1.0).abs() < 1e-5, "normal {n:?}");
  }
}

#[test]
fn test_normals_use_unscaled_positions() {
  // Solid only in the lower-x half, so the gradient depends on where we sample.
  let grid = VoxelGrid::from_fn(8, 8, 8, |x, _, _| 3.5 - x as f32);
  let raw = RawMesh {
    vertices: vec![[3.5, 1.0, 1.0], [3.5, 2.0, 1.0], [3.5, 1.0, 2.0]],
    indices: vec![0, 1, 2],
  };
  let mut assembler = MeshAssembler::new(&plain_config(8).with_smooth_normals(true));
  assembler.density_factor = 4.0;

  for n in &assembler.assemble(&raw, &grid)[0].normals {
    assert!((n[0] - 1.0).abs() < 1e-5, "normal {n:?}");
  }
}

#[test]
fn test_flat_field_falls_back_to_fixed_normal() {
  let grid = VoxelGrid::new(8, 8, 8);
  let raw = soup(1);
  let mut assembler = MeshAssembler::new(&plain_config(8).with_smooth_normals(true));
  assembler.flip_normals = false;

  for n in &assembler.assemble(&raw, &grid)[0].normals {
    assert_eq!(*n, FALLBACK_NORMAL);
  }
}

#[test]
fn test_split_chunk_count_is_ceil_of_blocks() {
  let grid = VoxelGrid::new(8, 8, 8);
  for (triangles, block, expected) in [(10, 9, 4), (10, 6, 5), (12, 9, 4), (7, 3, 7)] {
    let raw = soup(triangles);
    let chunks = splitting(raw.vertices.len() - 1, block).assemble(&raw, &grid);
    assert_eq!(chunks.len(), expected, "{triangles} triangles, block {block}");
  }
}

#[test]
fn test_split_soup_concatenates_back_to_original() {
  let grid = VoxelGrid::new(8, 8, 8);
  let raw = soup(10);
  let chunks = splitting(20, 9).assemble(&raw, &grid);

  let joined: Vec<[f32; 3]> = chunks.iter().flat_map(|c| c.vertices.iter().copied()).collect();
  assert_eq!(joined, raw.vertices);

  for chunk in &chunks {
    assert!(chunk.vertex_count() <= 9);
    assert_eq!(chunk.local_offset, [-4.0, -4.0, -4.0]);
    for &i in &chunk.indices {
      assert!((i as usize) < chunk.vertex_count());
    }
  }
}

#[test]
fn test_split_carries_normals_with_vertices() {
  let grid = ground_grid(8, 8, 8, 3.5);
  let raw = soup(5);
  let mut assembler = splitting(10, 6);
  assembler.smooth_normals = true;

  for chunk in assembler.assemble(&raw, &grid) {
    assert_eq!(chunk.normals.len(), chunk.vertices.len());
  }
}

#[test]
fn test_split_indexed_mesh_preserves_triangles() {
  // Fan around a shared centre vertex.
  let mut vertices = vec![[0.0, 0.0, 0.0]];
  let mut indices = Vec::new();
  for i in 0..12u32 {
    let a = i as f32 * std::f32::consts::TAU / 12.0;
    vertices.push([a.cos(), 0.0, a.sin()]);
    indices.extend_from_slice(&[0, 1 + i, 1 + (i + 1) % 12]);
  }
  let raw = RawMesh { vertices, indices };
  let grid = VoxelGrid::new(8, 8, 8);
  let chunks = splitting(8, 9).assemble(&raw, &grid);

  assert_eq!(chunks.len(), 4);
  let rebuilt: Vec<[f32; 3]> = chunks
    .iter()
    .flat_map(|c| c.indices.iter().map(move |&i| c.vertices[i as usize]))
    .collect();
  let expected: Vec<[f32; 3]> = raw.indices.iter().map(|&i| raw.vertices[i as usize]).collect();
  assert_eq!(rebuilt, expected);

  for chunk in &chunks {
    // Centre plus the four rim vertices touched by three fan triangles.
    assert_eq!(chunk.vertex_count(), 5);
  }
}
