//! Push-Relabel Benchmarks
//!
//! Solves random networks of increasing size and pixel grid networks resembling image
//! segmentation instances.
//!
//! Run: cargo bench --bench push_relabel

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use preflow::{gens::*, prelude::*};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

fn bench_random_networks(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_relabel/random");
    let rng = &mut Pcg64Mcg::seed_from_u64(42);

    for n in [100 as NumNodes, 1_000, 10_000] {
        let edges = RandomNetwork::new()
            .nodes(n)
            .edges(8 * n)
            .max_capacity(1_000u64)
            .generate(rng);

        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_with_input(BenchmarkId::new("nodes", n), &edges, |b, edges| {
            b.iter(|| {
                PushRelabel::<u64>::new(n, edges.iter())
                    .map(|mut solver| solver.max_flow())
            });
        });
    }

    group.finish();
}

fn bench_grid_networks(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_relabel/grid");
    let rng = &mut Pcg64Mcg::seed_from_u64(7);

    for side in [16u32, 64, 128] {
        let Some(grid) = GridNetwork::new(side, side) else {
            continue;
        };

        // smooth neighbourhoods and noisy terminal preferences
        let intensity: Vec<u32> = (0..grid.number_of_pixels())
            .map(|_| rng.random_range(0..256))
            .collect();
        let level = |u: Node| intensity[u as usize - 1];
        let edges = grid.edges(
            |u, v| 256 - level(u).abs_diff(level(v)),
            |u| level(u),
            |u| 255 - level(u),
        );

        group.throughput(Throughput::Elements(grid.number_of_pixels() as u64));
        group.bench_with_input(BenchmarkId::new("side", side), &edges, |b, edges| {
            b.iter(|| {
                PushRelabel::<u32>::new(grid.number_of_nodes(), edges.iter())
                    .map(|mut solver| solver.min_cut().len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_random_networks, bench_grid_networks);
criterion_main!(benches);
