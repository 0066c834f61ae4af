use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rational_types::Rational;

fn criterion_benchmark(c: &mut Criterion) {
    let small = (Rational::new(3i64, 7), Rational::new(-5i64, 11));
    let big = (Rational::new(-65_799_040i64, 325_053_649), Rational::new(883_691_245i64, 294_904_546));
    let huge = (Rational::new(i64::MAX, i64::MAX - 1), Rational::new(i64::MAX - 1, i64::MAX - 2));

    c.bench_function("rational new", |b| b.iter(|| Rational::new(black_box(81i64), black_box(54))));
    c.bench_function("rational add small", |b| b.iter(|| black_box(small.0) + black_box(small.1)));
    c.bench_function("rational add big", |b| b.iter(|| black_box(big.0) + black_box(big.1)));
    c.bench_function("rational mul big", |b| b.iter(|| black_box(big.0) * black_box(big.1)));
    c.bench_function("rational div big", |b| b.iter(|| black_box(big.0) / black_box(big.1)));
    c.bench_function("rational cmp fast", |b| b.iter(|| black_box(big.0) < black_box(big.1)));
    c.bench_function("rational cmp full width", |b| b.iter(|| black_box(huge.0) < black_box(huge.1)));
    c.bench_function("rational limit denominator", |b| b.iter(|| black_box(big.0).limit_denominator(10_000_000)));
    c.bench_function("rational parse", |b| b.iter(|| black_box("-65799040/325053649").parse::<Rational<i64>>()));
    c.bench_function("rational format", |b| b.iter(|| black_box(big.0).to_string()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
