//! Benchmarks for the Miller-Rabin oracle.
//!
//! Run with:
//! ```bash
//! cargo bench --bench oracle
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use num_bigint::BigUint;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use truncprimes::oracle::{MillerRabin, PrimalityTest};

/// Odd numbers with exactly `digits` decimal digits, reproducible across runs.
fn random_odd(seed: u64, digits: u32, count: usize) -> Vec<BigUint> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let low = BigUint::from(10u32).pow(digits - 1);
    (0..count)
        .map(|_| {
            let mut n = low.clone();
            for k in 0..digits - 1 {
                n += BigUint::from(rng.random_range(0..10u32)) * BigUint::from(10u32).pow(k);
            }
            n.set_bit(0, true);
            n
        })
        .collect()
}

fn bench_probable_primes(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle/prime");

    let primes: Vec<(&str, BigUint)> = vec![
        ("8 digits", BigUint::from(73939133u32)),
        ("24 digits", "357686312646216567629137".parse().unwrap()),
        ("27 digits", (BigUint::from(1u32) << 89u32) - 1u32),
    ];

    for (name, p) in primes {
        group.bench_with_input(BenchmarkId::new("seeded", name), &p, |b, p| {
            let mut mr = MillerRabin::new(ChaCha8Rng::seed_from_u64(42));
            b.iter(|| mr.is_probable_prime(p));
        });
    }

    group.finish();
}

fn bench_random_odd(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle/random_odd");

    for digits in [8, 16, 24, 32] {
        let numbers = random_odd(digits as u64, digits, 1000);
        group.throughput(Throughput::Elements(numbers.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(digits), &numbers, |b, numbers| {
            let mut mr = MillerRabin::new(ChaCha8Rng::seed_from_u64(42));
            b.iter(|| numbers.iter().filter(|n| mr.is_probable_prime(n)).count());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_probable_primes, bench_random_odd);

criterion_main!(benches);
