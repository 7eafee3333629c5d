//! Benchmarks for the density fill, both polygonizers and full generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use voxel_terrain::{
  generate, DensityField, MarchingMode, MarchingTetrahedra, NoiseKind, NoiseOctave, Polygonizer,
  SurfaceNets, TerrainConfig, VoxelGrid,
};

fn terrain_config(resolution: u32) -> TerrainConfig {
  TerrainConfig::new()
    .with_resolution(resolution)
    .with_base_height(-0.5)
    .with_octave(
      NoiseOctave::new(NoiseKind::Simplex3D)
        .with_seed(1337)
        .with_frequency(2.0)
        .with_amplitude(0.3),
    )
    .with_octave(
      NoiseOctave::new(NoiseKind::Perlin2D)
        .with_seed(7)
        .with_frequency(1.0)
        .with_amplitude(0.2)
        .with_terrace(8.0),
    )
}

/// Sphere SDF, positive inside.
fn sphere_grid(size: usize, radius: f32) -> VoxelGrid {
  let c = (size - 1) as f32 * 0.5;
  VoxelGrid::from_fn(size, size, size, |x, y, z| {
    let d = [x as f32 - c, y as f32 - c, z as f32 - c];
    radius - (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
  })
}

fn bench_density_fill(c: &mut Criterion) {
  let mut group = c.benchmark_group("density_fill");
  for resolution in [16u32, 32, 64] {
    let config = terrain_config(resolution);
    let field = match DensityField::from_config(&config) {
      Ok(field) => field,
      Err(e) => panic!("bench config invalid: {e}"),
    };
    let (w, h, d) = config.grid_dimensions();
    group.bench_with_input(BenchmarkId::from_parameter(resolution), &resolution, |b, _| {
      b.iter(|| black_box(field.fill(w, h, d)))
    });
  }
  group.finish();
}

fn bench_polygonizers(c: &mut Criterion) {
  let grid = sphere_grid(32, 12.0);
  let strategies: [(&str, &dyn Polygonizer); 2] =
    [("surface_nets", &SurfaceNets), ("tetrahedra", &MarchingTetrahedra)];

  let mut group = c.benchmark_group("polygonize (32³ sphere)");
  for (name, polygonizer) in strategies {
    group.bench_function(name, |b| {
      b.iter(|| black_box(polygonizer.polygonize(black_box(&grid), 0.0)))
    });
  }
  group.finish();
}

fn bench_generate(c: &mut Criterion) {
  let mut group = c.benchmark_group("generate");
  group.sample_size(20);
  for mode in [MarchingMode::Cubes, MarchingMode::Tetrahedra] {
    let config = terrain_config(32).with_mode(mode).with_smooth_normals(true);
    group.bench_function(format!("{mode:?} (32³)"), |b| {
      b.iter(|| black_box(generate(black_box(&config))))
    });
  }
  group.finish();
}

criterion_group!(benches, bench_density_fill, bench_polygonizers, bench_generate);
criterion_main!(benches);
