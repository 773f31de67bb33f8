//! Benchmarks for loading and combining random sparse matrices

use coomat::{read_general, to_general_string, CooMatrix};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random matrix with roughly `per_row` entries in each row
fn random_matrix(size: usize, per_row: usize, seed: u64) -> CooMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let triplets: Vec<_> = (0..size)
        .flat_map(|row| (0..per_row).map(move |_| row))
        .map(|row| (row, rng.gen_range(0..size), rng.gen_range(-10.0..10.0)))
        .collect();
    CooMatrix::from_triplets(size, triplets)
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for size in [1_000, 10_000, 100_000] {
        let a = random_matrix(size, 4, 1);
        let b = random_matrix(size, 4, 2);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);
    for size in [100, 400, 1_000] {
        let a = random_matrix(size, 3, 3);
        let b = random_matrix(size, 3, 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bench, _| {
            bench.iter(|| black_box(&a).multiply(black_box(&b)))
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let text = to_general_string(&random_matrix(50_000, 4, 5));
    c.bench_function("read_general_200k_lines", |bench| {
        bench.iter(|| read_general(black_box(text.as_bytes())))
    });
}

criterion_group!(benches, bench_add, bench_multiply, bench_load);
criterion_main!(benches);
