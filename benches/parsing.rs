//! Benchmarks for description parsing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use portfoliodb::{parse_description, parse_description_with, ParseOptions};

/// A description with front matter, shared content and `languages` blocks of
/// `paragraphs` paragraphs each.
fn generate_description(languages: &[&str], paragraphs: usize) -> String {
    let mut source = String::from("---\ntags: [web, design]\nmade with: [rust]\n---\n\n");
    source.push_str("*[HTML]: Hyper Text Markup Language\n\n");
    source.push_str("![Cover \"Cover image\"](cover.png)\n\n");

    for lang in languages {
        source.push_str(&format!(":: {}\n\n# Project in {}\n\n", lang, lang));
        for i in 0..paragraphs {
            source.push_str(&format!(
                "(paragraph)\nParagraph {} with **emphasis** and a footnote[{}].\n\n",
                i, i + 1
            ));
        }
        source.push_str("[Source code](https://example.com/code)\n\n");
        for i in 0..paragraphs {
            source.push_str(&format!("[{}]: Note number {}\n\n", i + 1, i + 1));
        }
        source.push('\n');
    }

    source
}

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");

    let small = "# Tiny\n\nOne paragraph.\n";
    let single = generate_description(&["en"], 20);
    let multi = generate_description(&["en", "fr", "de", "es"], 50);

    group.bench_function("parse_small", |b| {
        b.iter(|| parse_description(black_box(small)))
    });

    group.bench_function("parse_single_language", |b| {
        b.iter(|| parse_description(black_box(&single)))
    });

    group.bench_function("parse_multi_language", |b| {
        b.iter(|| parse_description(black_box(&multi)))
    });

    let parallel = ParseOptions {
        parallel: true,
        ..ParseOptions::default()
    };
    group.bench_function("parse_multi_language_parallel", |b| {
        b.iter(|| parse_description_with(black_box(&multi), &parallel))
    });

    group.finish();
}

criterion_group!(benches, bench_parsing);
criterion_main!(benches);
