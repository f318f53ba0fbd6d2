//! Benchmarks for cc_classifier performance testing.
//!
//! Run with: cargo bench

use cc_classifier::{
    batch::{tally, validate_batch, BatchValidator},
    digits, luhn, parse_account_number,
    stream::ValidateExt,
    validate, AccountNumber,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

// Test card numbers
const VISA_16: u64 = 4003600000000014;
const VISA_13: u64 = 4222222222222;
const MASTERCARD: u64 = 5555555555554444;
const AMEX: u64 = 378282246310005;
const INVALID: u64 = 1234567890123456;

/// Benchmark single number classification
fn bench_single_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_validation");

    group.bench_function("visa_16", |b| b.iter(|| validate(black_box(VISA_16))));
    group.bench_function("visa_13", |b| b.iter(|| validate(black_box(VISA_13))));
    group.bench_function("mastercard", |b| b.iter(|| validate(black_box(MASTERCARD))));
    group.bench_function("amex_15", |b| b.iter(|| validate(black_box(AMEX))));
    group.bench_function("invalid_checksum", |b| {
        b.iter(|| validate(black_box(INVALID)))
    });

    group.finish();
}

/// Benchmark the arithmetic building blocks
fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("luhn_checksum", |b| {
        b.iter(|| luhn::checksum(black_box(VISA_16)))
    });

    group.bench_function("check_digit", |b| {
        b.iter(|| luhn::check_digit(black_box(VISA_16 / 10)))
    });

    group.bench_function("digit_count", |b| {
        b.iter(|| digits::count(black_box(VISA_16)))
    });

    group.bench_function("parse_formatted", |b| {
        b.iter(|| parse_account_number(black_box("4003 6000 0000 0014")))
    });

    group.finish();
}

/// Benchmark batch validation with various sizes
fn bench_batch_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_validation");

    for size in [10, 100, 1000, 10000].iter() {
        let numbers: Vec<u64> = (0..*size)
            .map(|i| match i % 4 {
                0 => VISA_16,
                1 => MASTERCARD,
                2 => AMEX,
                _ => INVALID,
            })
            .collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("validate_batch", size), &numbers, |b, numbers| {
            b.iter(|| validate_batch(black_box(numbers)))
        });

        group.bench_with_input(BenchmarkId::new("tally", size), &numbers, |b, numbers| {
            b.iter(|| tally(black_box(numbers)))
        });

        group.bench_with_input(
            BenchmarkId::new("batch_validator", size),
            &numbers,
            |b, numbers| {
                let mut batch = BatchValidator::new();
                b.iter(|| batch.validate_all(black_box(numbers)))
            },
        );

        group.bench_with_input(BenchmarkId::new("stream", size), &numbers, |b, numbers| {
            b.iter(|| {
                numbers
                    .iter()
                    .copied()
                    .validate_numbers()
                    .filter(|c| c.is_valid())
                    .count()
            })
        });
    }

    group.finish();
}

/// Benchmark account number display helpers
fn bench_account_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("account_operations");

    let account = AccountNumber::new(VISA_16);

    group.bench_function("last_four", |b| b.iter(|| black_box(&account).last_four()));
    group.bench_function("masked", |b| b.iter(|| black_box(&account).masked()));

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_parallel(c: &mut Criterion) {
    use cc_classifier::batch::{tally_parallel, validate_batch_parallel};

    let mut group = c.benchmark_group("parallel");

    for size in [1000, 10000, 100000].iter() {
        let numbers: Vec<u64> = (0..*size).map(|_| VISA_16).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(
            BenchmarkId::new("validate_parallel", size),
            &numbers,
            |b, numbers| b.iter(|| validate_batch_parallel(black_box(numbers))),
        );

        group.bench_with_input(
            BenchmarkId::new("tally_parallel", size),
            &numbers,
            |b, numbers| b.iter(|| tally_parallel(black_box(numbers))),
        );
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_parallel(_c: &mut Criterion) {
    // Parallel benchmarks disabled - enable 'parallel' feature
}

criterion_group!(
    benches,
    bench_single_validation,
    bench_primitives,
    bench_batch_validation,
    bench_account_operations,
    bench_parallel,
);

criterion_main!(benches);
