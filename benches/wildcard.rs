// std imports
use std::alloc::System;

// third-party imports
use criterion::{Criterion, criterion_group, criterion_main};
use stats_alloc::{INSTRUMENTED_SYSTEM, Region, StatsAlloc};
use wildmatch::WildMatch;

// local imports
use wildcards::{Matcher, matches};

#[global_allocator]
static GLOBAL: &StatsAlloc<System> = &INSTRUMENTED_SYSTEM;

fn benchmark(c: &mut Criterion) {
    let mut c = c.benchmark_group("wildcard");

    let mut c1 = None;
    let mut n1 = 0;
    c.bench_function("short-match", |b| {
        let reg = Region::new(&GLOBAL);
        b.iter(|| {
            assert_eq!(matches("_TEST", "_*"), true);
            n1 += 1;
        });
        c1 = Some(reg.change());
    });
    println!("allocations at 1 ({:?} iterations): {:#?}", n1, c1);

    let mut c2 = None;
    let mut n2 = 0;
    c.bench_function("long-match", |b| {
        let reg = Region::new(&GLOBAL);
        b.iter(|| {
            assert_eq!(matches("_TEST_SOME_VERY_VERY_LONG_NAME", "_*"), true);
            n2 += 1;
        });
        c2 = Some(reg.change());
    });
    println!("allocations at 2 ({:?} iterations): {:#?}", n2, c2);

    c.bench_function("short-non-match", |b| {
        b.iter(|| {
            assert_eq!(matches("TEST", "_*"), false);
        });
    });
    c.bench_function("long-non-match", |b| {
        b.iter(|| {
            assert_eq!(matches("TEST_SOME_VERY_VERY_LONG_NAME", "_*"), false);
        });
    });

    let matcher = Matcher::new("_*");
    c.bench_function("matcher-short-match", |b| {
        b.iter(|| {
            assert_eq!(matcher.matches("_TEST"), true);
        });
    });
    c.bench_function("matcher-long-match", |b| {
        b.iter(|| {
            assert_eq!(matcher.matches("_TEST_SOME_VERY_VERY_LONG_NAME"), true);
        });
    });

    let pattern = WildMatch::new("_*");
    c.bench_function("wildmatch-short-match", |b| {
        b.iter(|| {
            assert_eq!(pattern.matches("_TEST"), true);
        });
    });
    c.bench_function("wildmatch-long-match", |b| {
        b.iter(|| {
            assert_eq!(pattern.matches("_TEST_SOME_VERY_VERY_LONG_NAME"), true);
        });
    });

    c.bench_function("pathological-non-match", |b| {
        let sequence = "a".repeat(64);
        let pattern = format!("{}b", "*".repeat(32));
        b.iter(|| {
            assert_eq!(matches(&sequence, &pattern), false);
        });
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
