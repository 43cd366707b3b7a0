use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fysika_core::{normalize_unit, parse_numeric_input};

fn bench_numeric_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric_parsing");

    group.bench_function("plain_integer", |b| {
        b.iter(|| parse_numeric_input(black_box("1234")))
    });

    group.bench_function("comma_decimal", |b| {
        b.iter(|| parse_numeric_input(black_box("1 234,875")))
    });

    group.bench_function("scientific", |b| {
        b.iter(|| parse_numeric_input(black_box("6.626e-34")))
    });

    group.bench_function("garbage", |b| {
        b.iter(|| parse_numeric_input(black_box("not a number at all")))
    });

    group.finish();
}

fn bench_unit_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("unit_normalization");

    group.bench_function("synonym_hit", |b| {
        b.iter(|| normalize_unit(black_box("Newtons")))
    });

    group.bench_function("already_canonical", |b| {
        b.iter(|| normalize_unit(black_box("m/s²")))
    });

    group.bench_function("unknown_unit", |b| {
        b.iter(|| normalize_unit(black_box("Furlongs/Fortnight")))
    });

    group.finish();
}

criterion_group!(benches, bench_numeric_parsing, bench_unit_normalization);
criterion_main!(benches);
