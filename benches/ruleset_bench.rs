//! Rule engine benchmarks.
//!
//! - FizzBuzz over growing ranges
//! - Raw `process_many` dispatch with many non-matching rules

use std::cell::Cell;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rule_fizzbuzz::{fizz_buzz_range, FizzBuzzConfig, RuleSet};

fn bench_fizz_buzz(c: &mut Criterion) {
    let mut group = c.benchmark_group("fizz_buzz_range");
    for end in [100_i64, 1_000, 10_000] {
        let config = FizzBuzzConfig::default().with_end(end);
        group.throughput(Throughput::Elements(end as u64));
        group.bench_with_input(BenchmarkId::from_parameter(end), &config, |b, config| {
            b.iter(|| fizz_buzz_range(black_box(config)))
        });
    }
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_many");
    for rule_count in [1_i64, 4, 16] {
        let hits = Cell::new(0u64);
        let mut rules: RuleSet<'_, i64> = RuleSet::new();
        for divisor in 0..rule_count {
            let modulus = 1_000 + divisor;
            rules.add(move |x: &i64| x % modulus == 0, |_: &i64| hits.set(hits.get() + 1));
        }
        rules.add_default(|_: &i64| ());

        group.throughput(Throughput::Elements(1_000));
        group.bench_function(BenchmarkId::from_parameter(rule_count), |b| {
            b.iter(|| rules.process_many(black_box(0..1_000_i64)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fizz_buzz, bench_dispatch);
criterion_main!(benches);
