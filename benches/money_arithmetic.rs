//! Benchmarks for money arithmetic, quantization and formatting.

#![allow(clippy::unwrap_used, missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;
use shop_money::money::type_for;
use std::hint::black_box;

fn bench_arithmetic(c: &mut Criterion) {
    let eur = type_for("EUR").unwrap();
    let a = eur.construct("1234.5678").unwrap();
    let b = eur.construct("0.99").unwrap();

    let mut group = c.benchmark_group("arithmetic");
    group.bench_function("add", |bench| {
        bench.iter(|| black_box(&a).checked_add(black_box(&b)))
    });
    group.bench_function("mul_decimal", |bench| {
        bench.iter(|| black_box(&a).checked_mul(black_box(Decimal::new(15, 1))))
    });
    group.bench_function("sum_100", |bench| {
        let values = vec![b.clone(); 100];
        bench.iter(|| eur.sum(black_box(&values)))
    });
    group.finish();
}

fn bench_conversion(c: &mut Criterion) {
    let eur = type_for("EUR").unwrap();
    let a = eur.construct("1234.5678").unwrap();

    let mut group = c.benchmark_group("conversion");
    group.bench_function("as_integer", |bench| {
        bench.iter(|| black_box(&a).as_integer())
    });
    group.bench_function("format", |bench| bench.iter(|| black_box(&a).format()));
    group.bench_function("type_for_cached", |bench| {
        bench.iter(|| type_for(black_box("EUR")))
    });
    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_conversion);
criterion_main!(benches);
