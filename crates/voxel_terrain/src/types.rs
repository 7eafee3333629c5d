//! Mesh data passed between the polygonizer, the assembler and the host.

/// Axis-aligned bounds of a vertex set.
///
/// An empty set has inverted (`+inf` / `-inf`) extents and reports
/// `is_empty`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  pub const EMPTY: Self = Self {
    min: [f32::INFINITY; 3],
    max: [f32::NEG_INFINITY; 3],
  };

  /// Tightest bounds around `points`.
  pub fn from_points<'a>(points: impl IntoIterator<Item = &'a [f32; 3]>) -> Self {
    points.into_iter().fold(Self::EMPTY, |mut acc, p| {
      for axis in 0..3 {
        acc.min[axis] = acc.min[axis].min(p[axis]);
        acc.max[axis] = acc.max[axis].max(p[axis]);
      }
      acc
    })
  }

  pub fn is_empty(&self) -> bool {
    (0..3).any(|axis| self.min[axis] > self.max[axis])
  }

  /// Smallest bounds containing both.
  pub fn union(&self, other: &Self) -> Self {
    Self {
      min: std::array::from_fn(|axis| self.min[axis].min(other.min[axis])),
      max: std::array::from_fn(|axis| self.max[axis].max(other.max[axis])),
    }
  }

  /// Bounds shifted by `offset`, e.g. a chunk's `local_offset`.
  pub fn translated(&self, offset: [f32; 3]) -> Self {
    Self {
      min: std::array::from_fn(|axis| self.min[axis] + offset[axis]),
      max: std::array::from_fn(|axis| self.max[axis] + offset[axis]),
    }
  }

  /// Size per axis; zero for an empty box.
  pub fn extent(&self) -> [f32; 3] {
    if self.is_empty() {
      return [0.0; 3];
    }
    std::array::from_fn(|axis| self.max[axis] - self.min[axis])
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::EMPTY
  }
}

/// Polygonizer output in lattice units (`[0, dim - 1]` per axis).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawMesh {
  pub vertices: Vec<[f32; 3]>,
  /// Triangle list, 3 indices per triangle.
  pub indices: Vec<u32>,
}

impl RawMesh {
  pub fn new() -> Self {
    Self::default()
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  /// True when every index equals its own position (one vertex per index).
  pub fn is_unindexed(&self) -> bool {
    self.indices.len() == self.vertices.len()
      && self.indices.iter().enumerate().all(|(i, &idx)| idx as usize == i)
  }
}

/// One self-contained, renderable piece of the generated surface.
///
/// Indices always address this chunk's own `vertices`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshChunk {
  pub vertices: Vec<[f32; 3]>,
  /// Parallel to `vertices`; empty when smooth normals are disabled and the
  /// consumer should derive face normals itself.
  pub normals: Vec<[f32; 3]>,
  pub indices: Vec<u32>,
  /// Translation placing the chunk in its parent frame.
  pub local_offset: [f32; 3],
  /// Bounds of `vertices`, before `local_offset` is applied.
  pub bounds: MinMaxAABB,
}

impl MeshChunk {
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.indices.len() / 3
  }

  pub fn has_normals(&self) -> bool {
    !self.normals.is_empty()
  }

  /// Bounds in the parent frame.
  pub fn placed_bounds(&self) -> MinMaxAABB {
    self.bounds.translated(self.local_offset)
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
