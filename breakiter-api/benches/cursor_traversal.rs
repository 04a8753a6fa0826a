//! Benchmarks for text adoption and full cursor traversal
//!
//! Run with: cargo bench --bench cursor_traversal

use breakiter_api::{create, BreakIteratorOptions, DONE};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base_sentence = "This is a test sentence with some reasonable length. ";
    let repeat_count = size / base_sentence.len() + 1;

    let mut text = base_sentence.repeat(repeat_count);
    text.truncate(size);
    text
}

/// Adoption cost per granularity and text size
fn bench_adopt_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("adopt_text");

    for kind in ["character", "word", "sentence"] {
        for size in [1024, 10_240, 102_400] {
            let text = generate_text(size);
            let mut iter = create("en", BreakIteratorOptions::with_type(kind)).unwrap();

            group.throughput(Throughput::Bytes(size as u64));
            group.bench_with_input(BenchmarkId::new(kind, size), &text, |b, text| {
                b.iter(|| iter.adopt_text(black_box(text.as_str())).unwrap());
            });
        }
    }

    group.finish();
}

/// Walking every boundary once the text is adopted
fn bench_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    let text = generate_text(102_400);

    for kind in ["character", "word", "sentence"] {
        let mut iter = create("en", BreakIteratorOptions::with_type(kind)).unwrap();
        iter.adopt_text(text.as_str()).unwrap();

        group.throughput(Throughput::Elements(iter.len() as u64 + 1));
        group.bench_function(kind, |b| {
            b.iter(|| {
                let mut last = iter.first();
                while iter.next() != DONE {
                    last = iter.current();
                }
                black_box(last)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_adopt_text, bench_traversal);
criterion_main!(benches);
