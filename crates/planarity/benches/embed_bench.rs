//! Criterion benchmarks for embedding construction and face tracing.
//! Focus sizes: n in {16, 64, 256, 1024} nodes, plus square grids and stars.
//! Star timings should grow linearly with the leaf count.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planarity::api::{break_bidirection, make_bidirected};
use planarity::api::{create_embedding, random_planar, Embedding, ReplayToken, SampleCfg};
use planarity::fixtures::{grid, star};

fn bench_embed(c: &mut Criterion) {
    let mut group = c.benchmark_group("embedding");
    for &n in &[16usize, 64, 256, 1024] {
        let cfg = SampleCfg {
            nodes: n,
            drop_prob: 0.2,
        };
        let g = random_planar(cfg, ReplayToken::new(7, n as u64));
        group.bench_with_input(BenchmarkId::new("create_embedding", n), &g, |b, g| {
            b.iter(|| create_embedding(g).unwrap())
        });

        // Rotation already fixed: only the face walk.
        let rotated = create_embedding(&g).unwrap().map(Embedding::into_graph);
        if let Some(rotated) = rotated {
            group.bench_with_input(BenchmarkId::new("from_rotation", n), &rotated, |b, r| {
                b.iter_batched(
                    || r.clone(),
                    |r| Embedding::from_rotation(r).unwrap(),
                    BatchSize::SmallInput,
                )
            });
        }
    }
    for &side in &[8usize, 32] {
        let g = grid(side, side);
        group.bench_with_input(BenchmarkId::new("grid", side), &g, |b, g| {
            b.iter(|| create_embedding(g).unwrap())
        });
    }
    group.finish();
}

fn bench_star(c: &mut Criterion) {
    let mut group = c.benchmark_group("star");
    for &leaves in &[1_000usize, 2_000, 4_000, 8_000] {
        let g = star(leaves);
        group.bench_with_input(BenchmarkId::new("check_invariants", leaves), &g, |b, g| {
            b.iter(|| g.check_invariants().unwrap())
        });
        group.bench_with_input(BenchmarkId::new("from_rotation", leaves), &g, |b, g| {
            b.iter_batched(
                || g.clone(),
                |g| Embedding::from_rotation(g).unwrap(),
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("bidirection", leaves), &g, |b, g| {
            b.iter_batched(
                || g.clone(),
                |mut h| {
                    make_bidirected(&mut h);
                    break_bidirection(&mut h)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_embed, bench_star);
criterion_main!(benches);
