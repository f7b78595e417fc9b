//! Performance benchmarks for the field validators.
//!
//! Validators run on focus loss and once per field on submit. The CPF
//! check digit fold is the only rule doing arithmetic; the rest are single
//! scans over short strings.
//!
//! # Run Benchmarks
//!
//! ```sh
//! # Run all validation benchmarks
//! cargo bench --bench validation_bench
//!
//! # Run a specific group
//! cargo bench --bench validation_bench -- national_id
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use cadastro_validation::{
    validate_birth_date_on, validate_email, validate_national_id, validate_phone,
    validate_postal_code,
};
use chrono::NaiveDate;

/// Benchmark CPF validation across its rejection tiers: length check,
/// repeated-digit check, checksum mismatch and the full valid path.
fn bench_national_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("national_id");
    group.throughput(Throughput::Elements(1));

    let scenarios = vec![
        ("valid", "529.982.247-25"),
        ("wrong_checksum", "529.982.247-26"),
        ("repeated_digits", "111.111.111-11"),
        ("too_short", "529.982"),
    ];

    for (name, cpf) in scenarios {
        group.bench_function(name, |b| {
            b.iter(|| black_box(validate_national_id(black_box(cpf))));
        });
    }

    group.finish();
}

/// Benchmark the scan-only validators.
fn bench_scan_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_rules");
    group.throughput(Throughput::Elements(1));

    group.bench_with_input(
        BenchmarkId::new("postal_code", "valid"),
        &"01310-100",
        |b, &text| {
            b.iter(|| black_box(validate_postal_code(black_box(text))));
        },
    );
    group.bench_with_input(
        BenchmarkId::new("email", "typical"),
        &"maria@empresa.com.br",
        |b, &text| {
            b.iter(|| black_box(validate_email(black_box(text))));
        },
    );
    group.bench_with_input(
        BenchmarkId::new("phone", "masked"),
        &"(11) 98765-4321",
        |b, &text| {
            b.iter(|| black_box(validate_phone(black_box(text))));
        },
    );

    group.finish();
}

/// Benchmark birth-date validation, which parses and round-trips a
/// calendar date before the age gate.
fn bench_birth_date(c: &mut Criterion) {
    let mut group = c.benchmark_group("birth_date");
    group.throughput(Throughput::Elements(1));

    let today = NaiveDate::from_ymd_opt(2020, 6, 15).expect("fixed bench date");

    let scenarios = vec![
        ("valid_adult", "29/02/2000"),
        ("invalid_calendar", "31/04/2020"),
        ("under_age", "01/01/2010"),
    ];

    for (name, date) in scenarios {
        group.bench_function(name, |b| {
            b.iter(|| black_box(validate_birth_date_on(black_box(date), black_box(today))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_national_id, bench_scan_rules, bench_birth_date);
criterion_main!(benches);
