// Criterion benchmarks for the translation engine.
//
// Run:
//   cargo bench -p piglatin

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// A paragraph with a mix of capitalized words, contractions, digits, and
/// punctuation, repeated to a few kilobytes of input.
fn paragraph() -> String {
    let base = "How do you say ... in Pig Latin?! I don't know! \
                Call the police; there are 42 plants near the toilet. ";
    base.repeat(64)
}

fn bench_translate_word(c: &mut Criterion) {
    c.bench_function("translate_word", |b| {
        b.iter(|| piglatin::translate_word(black_box("plants")))
    });
}

fn bench_translate_paragraph(c: &mut Criterion) {
    let text = paragraph();
    c.bench_function("translate_paragraph", |b| {
        b.iter(|| piglatin::translate(black_box(&text)))
    });
}

fn bench_segment_paragraph(c: &mut Criterion) {
    let text = paragraph();
    c.bench_function("segment_paragraph", |b| {
        b.iter(|| piglatin::segment(black_box(&text)))
    });
}

criterion_group!(
    benches,
    bench_translate_word,
    bench_translate_paragraph,
    bench_segment_paragraph
);
criterion_main!(benches);
