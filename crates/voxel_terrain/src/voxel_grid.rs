//! Dense scalar lattice holding one density value per grid point.
//!
//! # Memory Layout
//!
//! ```text
//! index = (x * height + y) * depth + z
//!
//! X is the major axis, Z the minor (contiguous) axis.
//! ```
//!
//! Direct access through [`VoxelGrid::get`] / [`VoxelGrid::set`] is bounds
//! checked and panics on misuse. Only the gradient estimator clamps, since it
//! is queried at fractional positions that legitimately touch the boundary.

use glam::Vec3;

/// Normal returned when the gradient vanishes.
pub const FALLBACK_NORMAL: [f32; 3] = [0.0, 1.0, 0.0];

/// Dense `width × height × depth` buffer of densities.
#[derive(Clone, PartialEq)]
pub struct VoxelGrid {
  width: usize,
  height: usize,
  depth: usize,
  data: Vec<f32>,
}

impl std::fmt::Debug for VoxelGrid {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "VoxelGrid({}×{}×{})", self.width, self.height, self.depth)
  }
}

impl VoxelGrid {
  /// Zero-filled grid.
  ///
  /// # Panics
  /// If any dimension is zero.
  pub fn new(width: usize, height: usize, depth: usize) -> Self {
    assert!(
      width > 0 && height > 0 && depth > 0,
      "voxel grid dimensions must be non-zero, got {}×{}×{}",
      width,
      height,
      depth
    );
    Self {
      width,
      height,
      depth,
      data: vec![0.0; width * height * depth],
    }
  }

  /// Grid filled from `f(x, y, z)`.
  pub fn from_fn(
    width: usize,
    height: usize,
    depth: usize,
    mut f: impl FnMut(usize, usize, usize) -> f32,
  ) -> Self {
    let mut grid = Self::new(width, height, depth);
    for x in 0..width {
      for y in 0..height {
        for z in 0..depth {
          let idx = grid.index(x, y, z);
          grid.data[idx] = f(x, y, z);
        }
      }
    }
    grid
  }

  /// Wrap an existing buffer laid out as documented at module level.
  ///
  /// # Panics
  /// If `data.len()` does not match the dimensions.
  pub fn from_vec(width: usize, height: usize, depth: usize, data: Vec<f32>) -> Self {
    assert_eq!(
      data.len(),
      width * height * depth,
      "buffer length does not match {}×{}×{}",
      width,
      height,
      depth
    );
    assert!(width > 0 && height > 0 && depth > 0);
    Self {
      width,
      height,
      depth,
      data,
    }
  }

  #[inline]
  pub fn width(&self) -> usize {
    self.width
  }

  #[inline]
  pub fn height(&self) -> usize {
    self.height
  }

  #[inline]
  pub fn depth(&self) -> usize {
    self.depth
  }

  /// `(width, height, depth)`.
  #[inline]
  pub fn dimensions(&self) -> (usize, usize, usize) {
    (self.width, self.height, self.depth)
  }

  /// Total number of lattice points.
  #[inline]
  pub fn len(&self) -> usize {
    self.data.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.data.is_empty()
  }

  #[inline(always)]
  fn index(&self, x: usize, y: usize, z: usize) -> usize {
    (x * self.height + y) * self.depth + z
  }

  #[inline]
  fn check_bounds(&self, x: usize, y: usize, z: usize) {
    assert!(
      x < self.width && y < self.height && z < self.depth,
      "voxel ({}, {}, {}) out of bounds for {}×{}×{} grid",
      x,
      y,
      z,
      self.width,
      self.height,
      self.depth
    );
  }

  /// Density at a lattice point.
  ///
  /// # Panics
  /// If the coordinate is outside the grid.
  #[inline]
  pub fn get(&self, x: usize, y: usize, z: usize) -> f32 {
    self.check_bounds(x, y, z);
    self.data[self.index(x, y, z)]
  }

  /// # Panics
  /// If the coordinate is outside the grid.
  #[inline]
  pub fn set(&mut self, x: usize, y: usize, z: usize, value: f32) {
    self.check_bounds(x, y, z);
    let idx = self.index(x, y, z);
    self.data[idx] = value;
  }

  /// Raw buffer in layout order.
  pub fn as_slice(&self) -> &[f32] {
    &self.data
  }

  /// Trilinear sample at fractional lattice coordinates, clamped to the grid.
  pub fn sample_clamped(&self, fx: f32, fy: f32, fz: f32) -> f32 {
    let (x0, x1, tx) = clamp_axis(fx, self.width);
    let (y0, y1, ty) = clamp_axis(fy, self.height);
    let (z0, z1, tz) = clamp_axis(fz, self.depth);

    let c000 = self.data[self.index(x0, y0, z0)];
    let c100 = self.data[self.index(x1, y0, z0)];
    let c010 = self.data[self.index(x0, y1, z0)];
    let c110 = self.data[self.index(x1, y1, z0)];
    let c001 = self.data[self.index(x0, y0, z1)];
    let c101 = self.data[self.index(x1, y0, z1)];
    let c011 = self.data[self.index(x0, y1, z1)];
    let c111 = self.data[self.index(x1, y1, z1)];

    let c00 = lerp(c000, c100, tx);
    let c10 = lerp(c010, c110, tx);
    let c01 = lerp(c001, c101, tx);
    let c11 = lerp(c011, c111, tx);

    lerp(lerp(c00, c10, ty), lerp(c01, c11, ty), tz)
  }

  /// Normalized density gradient at normalized coordinates `(u, v, w)`.
  ///
  /// `(0, 0, 0)` maps to the first lattice point and `(1, 1, 1)` to the
  /// last. Differences are taken half a lattice step either side, clamped
  /// into the grid, so boundary queries become one-sided. A vanishing
  /// gradient yields [`FALLBACK_NORMAL`].
  pub fn gradient(&self, u: f32, v: f32, w: f32) -> [f32; 3] {
    let p = [
      u * (self.width - 1) as f32,
      v * (self.height - 1) as f32,
      w * (self.depth - 1) as f32,
    ];
    let extents = [self.width, self.height, self.depth];

    let mut g = [0.0f32; 3];
    for axis in 0..3 {
      let max = (extents[axis] - 1) as f32;
      let lo = (p[axis] - 0.5).clamp(0.0, max);
      let hi = (p[axis] + 0.5).clamp(0.0, max);
      let span = hi - lo;
      if !(span > 0.0) {
        continue;
      }
      let mut a = p;
      let mut b = p;
      a[axis] = lo;
      b[axis] = hi;
      let ahead = self.sample_clamped(b[0], b[1], b[2]);
      let behind = self.sample_clamped(a[0], a[1], a[2]);
      g[axis] = (ahead - behind) / span;
    }

    let gradient = Vec3::from_array(g);
    let len_sq = gradient.length_squared();
    if !(len_sq > 1e-12 && len_sq.is_finite()) {
      return FALLBACK_NORMAL;
    }
    (gradient * len_sq.sqrt().recip()).to_array()
  }

  /// True if no sample lies on the opposite side of `iso` from the first.
  pub fn is_homogeneous(&self, iso: f32) -> bool {
    let first_inside = self.data[0] > iso;
    self.data.iter().all(|&d| (d > iso) == first_inside)
  }
}

/// Split a fractional coordinate into clamped neighbor indices and weight.
#[inline]
fn clamp_axis(f: f32, extent: usize) -> (usize, usize, f32) {
  let max = (extent - 1) as f32;
  let f = if f.is_finite() { f.clamp(0.0, max) } else { 0.0 };
  let i0 = f.floor() as usize;
  let i1 = (i0 + 1).min(extent - 1);
  (i0, i1, f - i0 as f32)
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
  a + (b - a) * t
}

#[cfg(test)]
#[path = "voxel_grid_test.rs"]
mod voxel_grid_test;
