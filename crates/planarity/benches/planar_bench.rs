//! Criterion benchmarks for the planarity test.
//! Focus sizes: n in {16, 64, 256, 1024} nodes.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p planarity

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use planarity::api::{gnm, is_planar, make_biconnected, make_bidirected, random_planar};
use planarity::api::{ReplayToken, SampleCfg};

fn bench_planar(c: &mut Criterion) {
    let mut group = c.benchmark_group("planarity");
    for &n in &[16usize, 64, 256, 1024] {
        let cfg = SampleCfg {
            nodes: n,
            drop_prob: 0.3,
        };
        let planar = random_planar(cfg, ReplayToken::new(42, n as u64));
        group.bench_with_input(BenchmarkId::new("is_planar/planar", n), &planar, |b, g| {
            b.iter(|| is_planar(g).unwrap())
        });

        // Dense enough to pass the edge bound now and then, sparse enough to
        // reach the strong test.
        let sparse = gnm(n, 2 * n, ReplayToken::new(43, n as u64));
        group.bench_with_input(BenchmarkId::new("is_planar/gnm_2n", n), &sparse, |b, g| {
            b.iter(|| is_planar(g).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("make_biconnected", n), &planar, |b, g| {
            b.iter_batched(
                || {
                    let mut h = g.clone();
                    make_bidirected(&mut h);
                    h
                },
                |mut h| make_biconnected(&mut h).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_planar);
criterion_main!(benches);
