// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect};
use understory_reorder::{ItemRegistry, ReorderEngine};

/// Engine over `len` items, measured as a vertical 100px strip, with a live
/// drag session on the first item.
fn dragging_engine(len: usize) -> ReorderEngine<usize> {
    let mut engine = ReorderEngine::new(0..len, |_: &[usize]| {});
    for (index, binding) in engine.bindings().into_iter().enumerate() {
        let top = 100.0 * index as f64;
        engine.on_mounted(binding.key, Rect::new(0.0, top, 100.0, top + 100.0));
    }
    let pressed = engine.bindings()[0].key;
    engine.on_press(pressed, Point::new(50.0, 50.0));
    engine
}

fn bench_pointer_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/pointer_move");

    // The hover scan is a linear pass over stored rects; the interesting
    // cases are a hit on the far end of the strip and a clean miss.
    for len in [8usize, 32, 128] {
        group.throughput(Throughput::Elements(len as u64));

        let hit = Point::new(50.0, 100.0 * (len as f64 - 1.0) + 50.0);
        group.bench_with_input(BenchmarkId::new("hit_last", len), &hit, |b, hit| {
            b.iter_batched(
                || dragging_engine(len),
                |mut engine| {
                    black_box(engine.on_pointer_move(*hit, 0));
                },
                BatchSize::SmallInput,
            );
        });

        let miss = Point::new(250.0, 50.0);
        group.bench_with_input(BenchmarkId::new("miss", len), &miss, |b, miss| {
            b.iter_batched(
                || dragging_engine(len),
                |mut engine| {
                    black_box(engine.on_pointer_move(*miss, 0));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_registry_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/registry");

    for len in [8usize, 32, 128] {
        let registry = ItemRegistry::from_values(0..len);
        let last = registry.items()[len - 1].key;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(
            BenchmarkId::new("index_of_last", len),
            &registry,
            |b, registry| {
                b.iter(|| black_box(registry.index_of(black_box(last))));
            },
        );
    }

    group.finish();
}

fn bench_bindings(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/bindings");

    for len in [8usize, 32, 128] {
        let engine = ReorderEngine::new(0..len, |_: &[usize]| {});
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("snapshot", len), &engine, |b, engine| {
            b.iter(|| black_box(engine.bindings()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pointer_move,
    bench_registry_lookup,
    bench_bindings
);
criterion_main!(benches);
