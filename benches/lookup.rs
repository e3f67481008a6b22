//! Index construction and lookup benchmarks.
//!
//! Run with: `cargo bench`
//! Save baseline: `cargo bench -- --save-baseline main`
//! Compare: `cargo bench -- --baseline main`

use criterion::{criterion_group, criterion_main, Criterion};
use std::io::Cursor;
use wordpos::index::build::build_from_reader;
use wordpos::index::IndexConfig;

/// Deterministic pseudo-word source, roughly English-shaped
fn synthetic_source(words: usize) -> String {
    let syllables = [
        "ka", "to", "ri", "mu", "sen", "bel", "or", "da", "lin", "vec", "sto", "pre",
    ];
    let mut out = String::new();
    let mut state: u64 = 0x9e3779b97f4a7c15;
    for i in 0..words {
        let len = 1 + (i % 4);
        for _ in 0..len {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            out.push_str(syllables[(state >> 33) as usize % syllables.len()]);
        }
        out.push(if i % 13 == 0 { '\n' } else { ' ' });
    }
    out
}

fn bench_build(c: &mut Criterion) {
    let source = synthetic_source(100_000);
    let config = IndexConfig::default();

    let mut group = c.benchmark_group("build");
    group.bench_function("100k_words", |b| {
        b.iter(|| build_from_reader(Cursor::new(source.as_bytes()), &config).unwrap())
    });
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let source = synthetic_source(100_000);
    let config = IndexConfig::default();
    let index = build_from_reader(Cursor::new(source.as_bytes()), &config).unwrap();

    let hits = ["k", "ka", "kat", "s", "sen", "be"];
    let misses = ["z", "zz", "qqq", "xxxx", "wwwww"];
    let too_long = ["kakakaka", "senbelori"];

    let mut group = c.benchmark_group("lookup");
    group.bench_function("hits", |b| {
        b.iter(|| {
            for key in &hits {
                std::hint::black_box(index.lookup(key));
            }
        })
    });
    group.bench_function("misses", |b| {
        b.iter(|| {
            for key in &misses {
                std::hint::black_box(index.lookup(key));
            }
        })
    });
    group.bench_function("length_exceeded", |b| {
        b.iter(|| {
            for key in &too_long {
                std::hint::black_box(index.lookup(key));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_lookup);
criterion_main!(benches);
