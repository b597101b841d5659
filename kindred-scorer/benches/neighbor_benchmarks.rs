//! Criterion benchmarks for neighbour selection and scoring.
//!
//! Measures `top_k_neighbors` and the full `recommend` pipeline across
//! matrix sizes comparable to the MovieLens 100K dataset to track
//! performance and detect regressions.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package kindred-scorer
//! ```

#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use kindred_core::{Rating, UserItemMatrix};
use kindred_scorer::{DEFAULT_K_NEIGHBORS, DEFAULT_TOP_N, recommend, top_k_neighbors};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fixed seed so every run benchmarks the same matrix.
const BENCHMARK_SEED: u64 = 0x5eed_cafe;

/// User counts to benchmark.
const USER_COUNTS: &[u32] = &[100, 250, 500];

/// Item pool comparable to the reference dataset.
const ITEM_POOL: u32 = 1_700;

/// Ratings issued per user.
const RATINGS_PER_USER: usize = 100;

/// Generate a deterministic synthetic rating set.
fn generate_ratings(users: u32) -> Vec<Rating> {
    let mut rng = StdRng::seed_from_u64(BENCHMARK_SEED);
    let mut ratings = Vec::with_capacity(users as usize * RATINGS_PER_USER);
    for user in 1..=users {
        for _ in 0..RATINGS_PER_USER {
            let item = rng.gen_range(1..=ITEM_POOL);
            let value = rng.gen_range(1..=5_u8);
            if let Ok(rating) = Rating::new(user, item, value, 0) {
                ratings.push(rating);
            }
        }
    }
    ratings
}

fn bench_top_k_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k_neighbors");
    for &users in USER_COUNTS {
        let matrix = UserItemMatrix::from_ratings(&generate_ratings(users));
        group.throughput(Throughput::Elements(u64::from(users)));
        group.bench_with_input(BenchmarkId::from_parameter(users), &matrix, |b, matrix| {
            b.iter(|| top_k_neighbors(matrix, 1, DEFAULT_K_NEIGHBORS));
        });
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    for &users in USER_COUNTS {
        let matrix = UserItemMatrix::from_ratings(&generate_ratings(users));
        group.bench_with_input(BenchmarkId::from_parameter(users), &matrix, |b, matrix| {
            b.iter(|| recommend(matrix, 1, DEFAULT_TOP_N, DEFAULT_K_NEIGHBORS));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_top_k_neighbors, bench_recommend);
criterion_main!(benches);
