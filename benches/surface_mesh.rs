use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scene_kit::mesh::Mesh;
use scene_kit::SurfaceFunction;

/// Benchmark: build the grapher's 20x20 surface mesh, normals included
fn bench_surface_build_default(c: &mut Criterion) {
    c.bench_function("surface_build_20x20", |b| {
        b.iter(|| {
            black_box(Mesh::surface(
                black_box(SurfaceFunction::HyperbolicParaboloid),
                2.0,
                2.0,
                20,
                20,
            ))
        })
    });
}

/// Benchmark: surface build cost as grid resolution grows
fn bench_surface_build_resolutions(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_build_resolution");
    for segments in [10u32, 20, 40, 80, 160] {
        group.bench_with_input(
            BenchmarkId::from_parameter(segments),
            &segments,
            |b, &segments| {
                b.iter(|| {
                    black_box(Mesh::surface(
                        SurfaceFunction::SinWave,
                        2.0,
                        2.0,
                        segments,
                        segments,
                    ))
                })
            },
        );
    }
    group.finish();
}

/// Benchmark: each surface function at the default resolution
fn bench_surface_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("surface_functions");
    for function in SurfaceFunction::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(function.tag()),
            &function,
            |b, &function| b.iter(|| black_box(Mesh::surface(function, 2.0, 2.0, 20, 20))),
        );
    }
    group.finish();
}

/// Benchmark: normal recomputation alone on a prebuilt mesh
fn bench_recompute_normals(c: &mut Criterion) {
    let mesh = Mesh::surface(SurfaceFunction::Saddle, 2.0, 2.0, 40, 40);

    c.bench_function("recompute_normals_40x40", |b| {
        b.iter_batched(
            || mesh.clone(),
            |mut mesh| {
                mesh.compute_vertex_normals();
                black_box(mesh)
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

/// Benchmark: interleaving vertex data for GPU upload
fn bench_vertex_data(c: &mut Criterion) {
    let mesh = Mesh::surface(SurfaceFunction::Cone, 2.0, 2.0, 40, 40);

    c.bench_function("vertex_data_40x40", |b| {
        b.iter(|| black_box(mesh.vertex_data()))
    });
}

criterion_group!(
    benches,
    bench_surface_build_default,
    bench_surface_build_resolutions,
    bench_surface_functions,
    bench_recompute_normals,
    bench_vertex_data,
);
criterion_main!(benches);
