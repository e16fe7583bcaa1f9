//! Benchmarks for the split entry point.

use criterion::{criterion_group, criterion_main, Criterion};
use parsekit_splitter::{Pattern, Splitter};
use std::hint::black_box;

fn quoted_subject() -> String {
    let mut subject = String::new();
    for i in 0..200 {
        subject.push_str("word ");
        subject.push_str(&format!("'quoted {i}' "));
        subject.push_str(r"escaped \' quote ");
    }
    subject
}

fn bench_literal_split(c: &mut Criterion) {
    let subject = quoted_subject();
    let splitter = Splitter::new(Pattern::new("'", false).unwrap());
    c.bench_function("literal_split", |b| {
        b.iter(|| splitter.split(black_box(&subject)))
    });
}

fn bench_regex_split(c: &mut Criterion) {
    let subject = quoted_subject();
    let splitter = Splitter::new(Pattern::new("'+", true).unwrap());
    c.bench_function("regex_split", |b| {
        b.iter(|| splitter.split(black_box(&subject)))
    });
}

fn bench_escape_heavy_split(c: &mut Criterion) {
    // Every separator occurrence is escaped, so the scan takes the
    // skip-and-reconsider path throughout.
    let subject = r"\' ".repeat(500);
    let splitter = Splitter::new(Pattern::new("'", false).unwrap());
    c.bench_function("escape_heavy_split", |b| {
        b.iter(|| splitter.split(black_box(&subject)))
    });
}

criterion_group!(
    benches,
    bench_literal_split,
    bench_regex_split,
    bench_escape_heavy_split
);
criterion_main!(benches);
