use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use polyshape::{build, Bound, PolygonShape, ShapeParameters};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let bound = Bound::new(512.0, 384.0);

    for vertex_count in [5usize, 32, 256] {
        let sharp = ShapeParameters::star(vertex_count).unwrap();
        group.bench_with_input(
            BenchmarkId::new("sharp_star", vertex_count),
            &sharp,
            |b, params| b.iter(|| build(black_box(params), black_box(bound))),
        );

        let rounded = ShapeParameters::new(vertex_count, 0.3, true, None).unwrap();
        group.bench_with_input(
            BenchmarkId::new("rounded_star", vertex_count),
            &rounded,
            |b, params| b.iter(|| build(black_box(params), black_box(bound))),
        );
    }
    group.finish();
}

/// A host resizing on every frame and reading the new outline.
fn bench_resize(c: &mut Criterion) {
    let params = ShapeParameters::new(8, 0.25, false, None).unwrap();
    let mut shape = PolygonShape::new(params, (300.0, 300.0));

    c.bench_function("resize_and_read", |b| {
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            let size = 300.0 + (frame % 4) as f32;
            shape.on_resize(size, size);
            black_box(shape.outline().len())
        })
    });
}

criterion_group!(benches, bench_build, bench_resize);
criterion_main!(benches);
