//! Performance benchmarks for the validation rule engines.
//!
//! These benchmarks measure single-value validation throughput:
//! - Phone and name validation (pure, synchronous)
//! - Email validation with a fixed reachability answer (async)
//! - A small bulk batch end to end

use criterion::{criterion_group, criterion_main, Criterion};
use contact_validator::{
    BulkValidator, ContactPair, EmailValidator, NameValidator, PhoneValidator,
    StaticMailReachability,
};
use std::sync::Arc;
use tokio::runtime::Runtime;

fn bench_phone_validation(c: &mut Criterion) {
    let validator = PhoneValidator::new();

    c.bench_function("phone_validate_formatted", |b| {
        b.iter(|| validator.validate("+27 72 338 9999"));
    });

    c.bench_function("phone_validate_invalid", |b| {
        b.iter(|| validator.validate("not a number"));
    });
}

fn bench_name_validation(c: &mut Criterion) {
    let validator = NameValidator::new();

    c.bench_function("name_validate", |b| {
        b.iter(|| validator.validate("Johan van Rensburg"));
    });
}

fn bench_email_validation(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let validator = EmailValidator::new(Arc::new(StaticMailReachability::new(true)));

    c.bench_function("email_validate", |b| {
        b.to_async(&rt)
            .iter(|| async { validator.validate("someone@gmail.com").await });
    });
}

fn bench_bulk_validation(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let validator = BulkValidator::new(Arc::new(StaticMailReachability::new(true)));

    let contacts: Vec<ContactPair> = (0..100)
        .map(|i| ContactPair::new(format!("user{}@gmail.com", i), "0821234567"))
        .collect();

    c.bench_function("bulk_validate_100", |b| {
        b.to_async(&rt)
            .iter(|| async { validator.validate_contacts(&contacts).await });
    });
}

criterion_group!(
    benches,
    bench_phone_validation,
    bench_name_validation,
    bench_email_validation,
    bench_bulk_validation
);
criterion_main!(benches);
