//! Noise kind selection and its derived dimensionality.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Authoring-time noise selection for one octave.
///
/// The suffix fixes the dimensionality: 2D kinds only ever see the horizontal
/// `(x, z)` plane of a sample position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NoiseKind {
  Perlin2D,
  /// Engine-style built-in 2D Perlin with output in `[0, 1]`.
  Perlin2DBuiltin,
  Voronoi2D,
  Simplex2D,
  Value2D,
  Worley2D,
  Perlin3D,
  Voronoi3D,
  Simplex3D,
  Value3D,
  Worley3D,
}

/// Noise family, i.e. the kind without its dimensionality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NoiseFamily {
  Perlin,
  PerlinBuiltin,
  Voronoi,
  Simplex,
  Value,
  Worley,
}

/// Number of coordinates a noise kind consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimensionality {
  TwoD,
  ThreeD,
}

/// Returned when a noise kind name is not recognized.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized noise kind `{0}`")]
pub struct ParseNoiseKindError(pub String);

impl NoiseKind {
  /// Derived from the kind; never stored separately.
  pub const fn dimensionality(self) -> Dimensionality {
    match self {
      NoiseKind::Perlin2D
      | NoiseKind::Perlin2DBuiltin
      | NoiseKind::Voronoi2D
      | NoiseKind::Simplex2D
      | NoiseKind::Value2D
      | NoiseKind::Worley2D => Dimensionality::TwoD,
      NoiseKind::Perlin3D
      | NoiseKind::Voronoi3D
      | NoiseKind::Simplex3D
      | NoiseKind::Value3D
      | NoiseKind::Worley3D => Dimensionality::ThreeD,
    }
  }

  pub const fn family(self) -> NoiseFamily {
    match self {
      NoiseKind::Perlin2D | NoiseKind::Perlin3D => NoiseFamily::Perlin,
      NoiseKind::Perlin2DBuiltin => NoiseFamily::PerlinBuiltin,
      NoiseKind::Voronoi2D | NoiseKind::Voronoi3D => NoiseFamily::Voronoi,
      NoiseKind::Simplex2D | NoiseKind::Simplex3D => NoiseFamily::Simplex,
      NoiseKind::Value2D | NoiseKind::Value3D => NoiseFamily::Value,
      NoiseKind::Worley2D | NoiseKind::Worley3D => NoiseFamily::Worley,
    }
  }

  /// Canonical snake_case name used in config files.
  pub const fn name(self) -> &'static str {
    match self {
      NoiseKind::Perlin2D => "perlin_2d",
      NoiseKind::Perlin2DBuiltin => "perlin_2d_builtin",
      NoiseKind::Voronoi2D => "voronoi_2d",
      NoiseKind::Simplex2D => "simplex_2d",
      NoiseKind::Value2D => "value_2d",
      NoiseKind::Worley2D => "worley_2d",
      NoiseKind::Perlin3D => "perlin_3d",
      NoiseKind::Voronoi3D => "voronoi_3d",
      NoiseKind::Simplex3D => "simplex_3d",
      NoiseKind::Value3D => "value_3d",
      NoiseKind::Worley3D => "worley_3d",
    }
  }
}

impl Default for NoiseKind {
  fn default() -> Self {
    NoiseKind::Perlin3D
  }
}

impl fmt::Display for NoiseKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for NoiseKind {
  type Err = ParseNoiseKindError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let kind = match s.trim().to_ascii_lowercase().as_str() {
      "perlin_2d" | "perlin2d" => NoiseKind::Perlin2D,
      "perlin_2d_builtin" | "perlin2dunity" | "perlin_builtin" => NoiseKind::Perlin2DBuiltin,
      "voronoi_2d" | "voronoi2d" => NoiseKind::Voronoi2D,
      "simplex_2d" | "simplex2d" => NoiseKind::Simplex2D,
      "value_2d" | "value2d" => NoiseKind::Value2D,
      "worley_2d" | "worley2d" => NoiseKind::Worley2D,
      "perlin_3d" | "perlin3d" => NoiseKind::Perlin3D,
      "voronoi_3d" | "voronoi3d" => NoiseKind::Voronoi3D,
      "simplex_3d" | "simplex3d" => NoiseKind::Simplex3D,
      "value_3d" | "value3d" => NoiseKind::Value3D,
      "worley_3d" | "worley3d" => NoiseKind::Worley3D,
      _ => return Err(ParseNoiseKindError(s.to_string())),
    };
    Ok(kind)
  }
}

impl TryFrom<String> for NoiseKind {
  type Error = ParseNoiseKindError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<NoiseKind> for String {
  fn from(kind: NoiseKind) -> Self {
    kind.name().to_string()
  }
}

#[cfg(test)]
#[path = "kind_test.rs"]
mod kind_test;
