//! Benchmarks for mvx-rs operations.
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use mvx_math::{Flatten, Mat4, Vec3, Vec4, flatten_slice, transform};

/// Benchmark the per-frame model-view chain.
fn bench_model_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_view");

    group.bench_function("rotate_chain", |b| {
        b.iter(|| {
            transform::rotate(black_box(25.0), Vec3::X).unwrap()
                * transform::rotate(black_box(130.0), Vec3::Y).unwrap()
                * transform::rotate(black_box(-40.0), Vec3::Z).unwrap()
        })
    });

    group.bench_function("look_at", |b| {
        b.iter(|| {
            transform::look_at(
                black_box(Vec3::new(2.0, 1.0, 2.0)),
                Vec3::ZERO,
                Vec3::Y,
            )
        })
    });

    group.bench_function("perspective", |b| {
        b.iter(|| transform::perspective(black_box(45.0), 1.0, 0.1, 100.0).unwrap())
    });

    group.finish();
}

/// Benchmark mat4 algebra.
fn bench_mat4(c: &mut Criterion) {
    let mut group = c.benchmark_group("mat4");

    let m = transform::rotate(33.0, Vec3::new(1.0, 2.0, 3.0)).unwrap()
        * transform::scale(2.0, 3.0, 0.5)
        * transform::translate(1.0, -2.0, 4.0);

    group.bench_function("mul_mat", |b| b.iter(|| black_box(m) * black_box(m)));

    group.bench_function("inverse", |b| b.iter(|| black_box(m).inverse()));

    group.bench_function("determinant", |b| b.iter(|| black_box(m).determinant()));

    group.bench_function("normal_matrix", |b| b.iter(|| black_box(m).normal_matrix()));

    group.finish();
}

/// Benchmark attribute-buffer flattening at different vertex counts.
fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");

    for size in [36, 360, 3600].iter() {
        let positions: Vec<Vec4> = (0..*size)
            .map(|i| Vec4::new(i as f32, 0.5, -0.5, 1.0))
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("positions", size), &positions, |b, p| {
            b.iter(|| flatten_slice(black_box(p)))
        });
    }

    group.bench_function("mat4_uniform", |b| {
        b.iter(|| black_box(Mat4::IDENTITY).flatten())
    });

    group.finish();
}

criterion_group!(benches, bench_model_view, bench_mat4, bench_flatten);
criterion_main!(benches);
