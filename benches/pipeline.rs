//! Benchmarks for the nine-patch pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ninepatch::engine::{build, project, resolve, scan};
use ninepatch::{Bitmap, Colour, NinePatchImage};

/// A square bitmap with a stretch tick every `step` pixels on the top and
/// left edges and a content run on the right and bottom edges.
fn striped(side: u32, step: u32) -> Bitmap {
    let mut bmp = Bitmap::filled(side, side, Colour::WHITE).unwrap();
    for i in 1..side - 1 {
        let tick = if (i / step) % 2 == 1 {
            Colour::BLACK
        } else {
            Colour::TRANSPARENT
        };
        bmp.set(i, 0, tick);
        bmp.set(0, i, tick);
        let content = if i > side / 4 && i < side * 3 / 4 {
            Colour::RED
        } else {
            Colour::TRANSPARENT
        };
        bmp.set(side - 1, i, content);
        bmp.set(i, side - 1, content);
    }
    bmp
}

fn bench_scanning(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanning");

    let small = striped(16, 4);
    let large = striped(1024, 16);

    group.bench_function("scan_16", |b| b.iter(|| scan(black_box(&small))));
    group.bench_function("scan_1024", |b| b.iter(|| scan(black_box(&large))));

    group.finish();
}

fn bench_building(c: &mut Criterion) {
    let mut group = c.benchmark_group("building");

    let small = striped(16, 4);
    let small_ticks = scan(&small);
    let large = striped(1024, 16);
    let large_ticks = scan(&large);

    group.bench_function("build_16", |b| {
        b.iter(|| build(black_box(&small), &small_ticks.top, &small_ticks.left))
    });

    group.bench_function("build_1024", |b| {
        b.iter(|| build(black_box(&large), &large_ticks.top, &large_ticks.left))
    });

    group.bench_function("resolve_1024", |b| {
        b.iter(|| {
            resolve(
                black_box(&large_ticks.right),
                black_box(&large_ticks.bottom),
                large.width(),
                large.height(),
            )
        })
    });

    group.finish();
}

fn bench_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("projection");

    let large = striped(1024, 16);
    let ticks = scan(&large);
    let grid = build(&large, &ticks.top, &ticks.left);

    group.bench_function("project_grow", |b| {
        b.iter(|| project(black_box(&grid), 4096, 4096))
    });

    group.bench_function("project_shrink", |b| {
        b.iter(|| project(black_box(&grid), 256, 256))
    });

    group.finish();
}

fn bench_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");

    let base = striped(256, 8);

    group.bench_function("edit_and_refresh", |b| {
        let mut image = NinePatchImage::new(base.clone());
        let mut on = false;
        b.iter(|| {
            on = !on;
            let colour = if on { Colour::BLACK } else { Colour::TRANSPARENT };
            image.set_patch(3, 0, colour).unwrap();
            black_box(image.chunk_grid().col_count())
        })
    });

    group.bench_function("cached_projection", |b| {
        let mut image = NinePatchImage::new(base.clone());
        b.iter(|| black_box(image.projections(512, 512).size()))
    });

    group.bench_function("chunk_table", |b| {
        let mut image = NinePatchImage::new(base.clone());
        b.iter(|| image.chunk_table().unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scanning,
    bench_building,
    bench_projection,
    bench_facade
);
criterion_main!(benches);
