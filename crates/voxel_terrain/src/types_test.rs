use super::*;

#[test]
fn test_aabb_from_points() {
  let aabb = MinMaxAABB::from_points(&[[1.0, 2.0, 3.0], [-1.0, -2.0, -3.0], [0.5, 0.0, 0.0]]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert_eq!(aabb.extent(), [2.0, 4.0, 6.0]);
  assert!(!aabb.is_empty());
}

#[test]
fn test_empty_aabb() {
  let aabb = MinMaxAABB::from_points(&Vec::<[f32; 3]>::new());
  assert!(aabb.is_empty());
  assert_eq!(aabb, MinMaxAABB::default());
  assert_eq!(aabb.extent(), [0.0; 3]);

  let point = MinMaxAABB::from_points(&[[1.0, 1.0, 1.0]]);
  assert_eq!(aabb.union(&point), point);
}

#[test]
fn test_aabb_union_and_translation() {
  let a = MinMaxAABB::from_points(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]);
  let b = MinMaxAABB::from_points(&[[2.0, -1.0, 0.5]]);

  let both = a.union(&b);
  assert_eq!(both.min, [0.0, -1.0, 0.0]);
  assert_eq!(both.max, [2.0, 1.0, 1.0]);

  let moved = a.translated([-0.5, 2.0, 0.0]);
  assert_eq!(moved.min, [-0.5, 2.0, 0.0]);
  assert_eq!(moved.max, [0.5, 3.0, 1.0]);
}

#[test]
fn test_raw_mesh_unindexed_detection() {
  let soup = RawMesh {
    vertices: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
    indices: vec![0, 1, 2],
  };
  assert!(soup.is_unindexed());
  assert_eq!(soup.triangle_count(), 1);

  let shared = RawMesh {
    vertices: vec![[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
    indices: vec![0, 1, 2, 2, 1, 3],
  };
  assert!(!shared.is_unindexed());
}

#[test]
fn test_empty_raw_mesh() {
  let mesh = RawMesh::new();
  assert!(mesh.is_empty());
  assert!(mesh.is_unindexed());
  assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_chunk_counts() {
  let chunk = MeshChunk {
    vertices: vec![[0.0; 3]; 6],
    normals: Vec::new(),
    indices: (0..6).collect(),
    local_offset: [-4.0, 0.0, 2.0],
    bounds: MinMaxAABB::from_points(&[[0.0; 3], [1.0, 2.0, 3.0]]),
  };
  assert_eq!(chunk.vertex_count(), 6);
  assert_eq!(chunk.triangle_count(), 2);
  assert!(!chunk.has_normals());
  assert_eq!(chunk.placed_bounds().min, [-4.0, 0.0, 2.0]);
  assert_eq!(chunk.placed_bounds().max, [-3.0, 2.0, 5.0]);
}
