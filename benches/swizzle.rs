use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ocl_swizzle::prm::{Float4, Int16};
use ocl_swizzle::Pattern;

fn bench_static(c: &mut Criterion) {
    let mut group = c.benchmark_group("static_swizzle");

    let v = Float4::new(1.0, 2.0, 3.0, 4.0);
    let w = Int16::from_array([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]);

    group.bench_function("read_wzyx", |bencher| {
        bencher.iter(|| black_box(&v).wzyx().get())
    });

    group.bench_function("add_assign_wzyx", |bencher| {
        bencher.iter(|| {
            let mut v = black_box(v);
            let mut wzyx = v.wzyx_mut();
            wzyx += black_box(Float4::splat(1.0));
            v
        })
    });

    group.bench_function("reswizzle_hi_odd", |bencher| {
        bencher.iter(|| black_box(&w).hi().odd().get())
    });

    group.finish();
}

fn bench_pattern(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_swizzle");

    let v = Float4::new(1.0, 2.0, 3.0, 4.0);
    let pat: Pattern = "wzyx".parse().unwrap();

    group.bench_function("parse", |bencher| {
        bencher.iter(|| Pattern::parse(black_box("s0f1e2d3")))
    });

    group.bench_function("gather", |bencher| {
        bencher.iter(|| black_box(&pat).gather(black_box(&v)))
    });

    group.finish();
}

criterion_group!(benches, bench_static, bench_pattern);
criterion_main!(benches);
