use std::hint::black_box;

use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use roll_engine::{get_target_date, resolve_pattern, Pattern};

fn bench_resolve(c: &mut Criterion) {
    let reference = NaiveDate::from_ymd_opt(2024, 11, 20).unwrap();

    c.bench_function("parse_and_resolve_nth_weekday", |b| {
        b.iter(|| get_target_date(black_box(reference), black_box("-2/3/2"), 1))
    });

    c.bench_function("parse_and_resolve_month_edge", |b| {
        b.iter(|| get_target_date(black_box(reference), black_box("1L"), 2))
    });

    let parsed = Pattern::parse(1, "-2/3/2").unwrap();
    c.bench_function("resolve_preparsed", |b| {
        b.iter(|| resolve_pattern(black_box(reference), black_box(&parsed)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
