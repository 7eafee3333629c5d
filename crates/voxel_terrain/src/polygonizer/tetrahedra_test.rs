use super::*;
use crate::test_utils::{face_normal, ground_grid, sphere_grid};

#[test]
fn test_uniform_grids_produce_nothing() {
  for value in [-1.0, 1.0] {
    let grid = VoxelGrid::from_fn(6, 6, 6, |_, _, _| value);
    assert!(MarchingTetrahedra.polygonize(&grid, 0.0).is_empty());
  }
}

#[test]
fn test_output_is_unindexed_soup() {
  let grid = sphere_grid(12, 4.0);
  let mesh = MarchingTetrahedra.polygonize(&grid, 0.0);

  assert!(!mesh.is_empty());
  assert!(mesh.is_unindexed());
  assert_eq!(mesh.vertices.len() % 3, 0);
}

#[test]
fn test_single_inside_corner_yields_one_triangle_per_touching_tet() {
  // Only the origin corner is solid; all six tetrahedra contain it.
  let grid = VoxelGrid::from_fn(2, 2, 2, |x, y, z| if x + y + z == 0 { 1.0 } else { -1.0 });
  let mesh = MarchingTetrahedra.polygonize(&grid, 0.0);

  assert_eq!(mesh.triangle_count(), 6);
  for t in 0..mesh.triangle_count() {
    let n = face_normal(&mesh.vertices, &mesh.indices, t);
    // Faces point away from the solid corner.
    assert!(n.dot(glam::Vec3::ONE) > 0.0, "triangle {t} normal {n:?}");
  }
}

#[test]
fn test_opposite_corner_touches_all_tets() {
  let grid = VoxelGrid::from_fn(2, 2, 2, |x, y, z| if x + y + z == 3 { 1.0 } else { -1.0 });
  let mesh = MarchingTetrahedra.polygonize(&grid, 0.0);

  assert_eq!(mesh.triangle_count(), 6);
  for t in 0..mesh.triangle_count() {
    assert!(face_normal(&mesh.vertices, &mesh.indices, t).dot(glam::Vec3::ONE) < 0.0);
  }
}

#[test]
fn test_ground_faces_point_up() {
  let grid = ground_grid(5, 5, 5, 2.5);
  let mesh = MarchingTetrahedra.polygonize(&grid, 0.0);

  assert!(mesh.triangle_count() > 0);
  for t in 0..mesh.triangle_count() {
    let n = face_normal(&mesh.vertices, &mesh.indices, t);
    if n.length_squared() > 1e-10 {
      assert!(n.y > 0.0, "triangle {t} normal {n:?}");
    }
  }
}

#[test]
fn test_vertices_stay_in_lattice() {
  let grid = sphere_grid(10, 6.0);
  let mesh = MarchingTetrahedra.polygonize(&grid, 0.0);

  for v in &mesh.vertices {
    assert!(v.iter().all(|&c| (0.0..=9.0).contains(&c)), "vertex {v:?}");
  }
}
