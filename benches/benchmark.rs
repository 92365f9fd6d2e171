//! Performance benchmarks for rs-imagesearch.
//!
//! Run with: `cargo bench`
//!
//! Pages are synthetic: a decoy data block followed by the HTML-escaped
//! result block with a configurable number of entries, every tenth entry
//! with a null details slot.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_imagesearch::{extract, locator, Options};
use serde_json::{json, Value};

fn entry(n: usize) -> Value {
    if n % 10 == 9 {
        return json!([[{ "444383007": [null, null] }]]);
    }
    let host = format!("host{n}.example");
    let mut source = vec![Value::Null; 18];
    source[2] = json!(format!("https://{host}/articles/{n}?a=1&b=2"));
    source[17] = json!(host);

    let mut fields = vec![Value::Null; 10];
    fields[3] = json!([format!("https://{host}/images/{n}.jpg"), 800, 600]);
    fields[9] = json!({ "2003": source });

    json!([[{ "444383007": [null, fields] }]])
}

fn page(entries: usize) -> String {
    let entries: Vec<Value> = (0..entries).map(entry).collect();
    let mut root = vec![Value::Null; 57];
    root[56] = json!([null, [[[null, [entries]]]]]);

    // Escape the way the page embeds the block inside markup.
    let data = Value::Array(root).to_string().replace('&', "&amp;").replace('"', "&quot;");
    format!(
        "<!doctype html><html><head><script>AF_initDataCallback({{key: 'ds:0', data:[1,2], sideChannel: {{}}}});</script></head>\
         <body><div id=\"islrg\"></div><script>AF_initDataCallback({{key: 'ds:1', hash: '2', data:{data}, sideChannel: {{}}}});</script></body></html>"
    )
}

fn bench_extract_default(c: &mut Criterion) {
    let html = page(100);
    c.bench_function("extract_default", |b| {
        b.iter(|| extract(black_box(&html), 0));
    });
}

fn bench_locate(c: &mut Criterion) {
    let html = page(100);
    let options = Options::default();
    c.bench_function("locate", |b| {
        b.iter(|| locator::locate(black_box(&html), black_box(&options)));
    });
}

/// Extraction over pages of increasing result counts
fn bench_page_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_sizes");

    for entries in [10usize, 100, 1000] {
        let html = page(entries);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract", entries), &html, |b, html| {
            b.iter(|| extract(black_box(html), 0));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_default,
    bench_locate,
    bench_page_sizes
);
criterion_main!(benches);
