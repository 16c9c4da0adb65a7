//! Performance benchmarks for paramharvest components.
//!
//! These benchmarks measure the normalization and body-extraction hot
//! paths to ensure the tool stays fast on the large responses the CDX
//! index can return for popular domains.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use paramharvest::extract::{ExtensionFilter, extract_from_body, normalize_url};

const SAMPLE_URL: &str = "https://shop.example.com/catalog/search?q=widgets&page=3&sort=price&dir=asc";

/// Generate an archive body with `lines` records, a mix of parameterized
/// URLs, asset URLs, and encoded records.
fn generate_body(lines: usize) -> String {
    let mut body = String::with_capacity(lines * 64);
    for i in 0..lines {
        match i % 4 {
            0 => body.push_str(&format!("https://example.com/item?id={i}&ref=home\n")),
            1 => body.push_str(&format!("https://example.com/assets/img{i}.png?v={i}\n")),
            2 => body.push_str(&format!(
                "https%3A%2F%2Fexample.com%2Fsearch%3Fq%3Dterm{i}\n"
            )),
            _ => body.push_str(&format!("https://example.com/static/page{i}\n")),
        }
    }
    body
}

fn bench_normalize_url(c: &mut Criterion) {
    let filter = ExtensionFilter::from_cli_list("png,svg,css,js");

    c.bench_function("normalize_single_url", |b| {
        b.iter(|| normalize_url(black_box(SAMPLE_URL), &filter, "FUZZ"))
    });

    c.bench_function("normalize_filtered_asset", |b| {
        b.iter(|| normalize_url(black_box("https://example.com/app.js?v=9"), &filter, "FUZZ"))
    });
}

fn bench_extract_from_body(c: &mut Criterion) {
    let filter = ExtensionFilter::from_cli_list("png,svg,css,js");
    let mut group = c.benchmark_group("extract_from_body");

    for size in [100usize, 1_000, 10_000] {
        let body = generate_body(size);
        group.throughput(Throughput::Bytes(body.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &body, |b, body| {
            b.iter(|| extract_from_body(black_box(body), &filter, "FUZZ"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize_url, bench_extract_from_body);
criterion_main!(benches);
