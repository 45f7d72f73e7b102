//! Benchmarks for content-stream operator parsing.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pdf_oxide::content::parser::parse_content_stream;

/// Builds a synthetic page content stream with `lines` text-showing lines,
/// each preceded by a font/position reset, approximating a dense text page.
fn synthetic_content_stream(lines: u32) -> Vec<u8> {
    let mut out = String::new();
    out.push_str("q 1 0 0 1 0 0 cm Q\nBT\n/F1 10 Tf\n12 TL\n72 750 Td\n");
    for i in 0..lines {
        out.push_str(&format!(
            "(Line number {i} of the benchmark fixture text) Tj\nT*\n"
        ));
    }
    out.push_str("ET\n");
    out.into_bytes()
}

fn bench_content_stream_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_stream_parse");
    for &lines in &[32u32, 256, 2048] {
        let data = synthetic_content_stream(lines);
        group.bench_function(format!("lines_{lines}"), |b| {
            b.iter(|| {
                let ops = parse_content_stream(&data).unwrap();
                black_box(ops.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_content_stream_parse);
criterion_main!(benches);
