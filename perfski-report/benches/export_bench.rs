//! Criterion benchmarks for CSV export and import.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use perfski_core::generate;
use perfski_report::{export_csv, import_csv};

fn bench_export(c: &mut Criterion) {
    let records = generate(10_000, 42);
    c.bench_function("export_csv_10k", |b| b.iter(|| export_csv(black_box(&records))));
}

fn bench_import(c: &mut Criterion) {
    let csv = export_csv(&generate(10_000, 42)).unwrap_or_default();
    c.bench_function("import_csv_10k", |b| b.iter(|| import_csv(black_box(&csv))));
}

criterion_group!(benches, bench_export, bench_import);
criterion_main!(benches);
