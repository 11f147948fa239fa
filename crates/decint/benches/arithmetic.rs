//! Criterion benchmarks across the schoolbook/transform threshold.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use decint::Unsigned;

/// Deterministic digit strings, top digit non-zero.
fn digits(count: usize, mut state: u64) -> String {
    let mut out = String::with_capacity(count);
    out.push('9');
    for _ in 1..count {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        out.push(char::from(b'0' + (state >> 60) as u8 % 10));
    }
    out
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for &size in &[256usize, 2048, 16_384, 131_072] {
        let a: Unsigned = digits(size, 1).parse().unwrap();
        let b: Unsigned = digits(size, 2).parse().unwrap();
        group.bench_function(format!("{size}_digits"), |bencher| {
            bencher.iter(|| black_box(&a) * black_box(&b));
        });
    }
    group.finish();
}

fn bench_divmod(c: &mut Criterion) {
    let mut group = c.benchmark_group("divmod");
    for &(dividend, divisor) in &[(2048usize, 512usize), (16_384, 4096), (131_072, 32_768)] {
        let a: Unsigned = digits(dividend, 3).parse().unwrap();
        let b: Unsigned = digits(divisor, 4).parse().unwrap();
        group.bench_function(format!("{dividend}_by_{divisor}"), |bencher| {
            bencher.iter(|| black_box(&a).divmod(black_box(&b)).unwrap());
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let text = digits(100_000, 5);
    let value: Unsigned = text.parse().unwrap();
    c.bench_function("parse_100k_digits", |bencher| {
        bencher.iter(|| text.parse::<Unsigned>().unwrap());
    });
    c.bench_function("emit_100k_digits", |bencher| {
        bencher.iter(|| black_box(&value).to_decimal());
    });
}

criterion_group!(benches, bench_mul, bench_divmod, bench_text);
criterion_main!(benches);
