use criterion::{Criterion, criterion_group, criterion_main};
use math::{
    CollatzCache, find_factor, largest_prime_factor, largest_prime_factor_descending, nth_prime,
    primes_below, rho_polynomial,
};
use std::hint::black_box;

const TARGET: u64 = 600_851_475_143;

fn factor_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("largest_prime_factor_600851475143");
    group.bench_function("trial_division", |b| {
        b.iter(|| largest_prime_factor(black_box(TARGET)))
    });
    group.sample_size(10);
    group.bench_function("prev_prime_descent", |b| {
        b.iter(|| largest_prime_factor_descending(black_box(TARGET)))
    });
    group.finish();

    let mut group = c.benchmark_group("pollard_rho");
    group.bench_function("first_factor", |b| {
        b.iter(|| find_factor(black_box(TARGET), rho_polynomial(TARGET, 1)))
    });
    group.finish();
}

fn prime_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("nth_prime_10001");
    group.bench_function("iterator", |b| b.iter(|| nth_prime(black_box(10_001))));
    group.bench_function("sieve", |b| {
        b.iter(|| primes_below(black_box(110_000))[10_000])
    });
    group.finish();

    let mut group = c.benchmark_group("primes_below_n_2000000");
    group.sample_size(10);
    group.bench_function("sequential", |b| b.iter(|| primes_below(black_box(2_000_000))));
    group.finish();
}

fn collatz_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("collatz_lengths_below_100000");
    group.sample_size(10);
    group.bench_function("cached", |b| {
        b.iter(|| {
            let mut cache = CollatzCache::new();
            (1..100_000u64).filter_map(|n| cache.length(n)).max()
        })
    });
    group.finish();
}

criterion_group!(benches, factor_benchmarks, prime_benchmarks, collatz_benchmarks);
criterion_main!(benches);
