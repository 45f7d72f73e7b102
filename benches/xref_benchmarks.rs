//! Benchmarks for classical xref table parsing and cycle detection.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use pdf_oxide::xref::parse_xref;
use std::io::Cursor;

/// Builds a synthetic classical xref section with `count` in-use entries
/// followed by a trailer pointing at a catalog object.
fn classical_xref(count: u32) -> Vec<u8> {
    let mut out = format!("xref\n0 {}\n", count + 1);
    out.push_str("0000000000 65535 f \n");
    for i in 0..count {
        out.push_str(&format!("{:010} 00000 n \n", 1000 + i * 37));
    }
    out.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\n",
        count + 1
    ));
    out.into_bytes()
}

fn bench_classical_xref_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("xref_parse");
    for &count in &[16u32, 256, 4096] {
        let data = classical_xref(count);
        group.bench_function(format!("entries_{count}"), |b| {
            b.iter(|| {
                let mut cursor = Cursor::new(data.clone());
                let table = parse_xref(&mut cursor, 0).unwrap();
                black_box(table.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classical_xref_parse);
criterion_main!(benches);
