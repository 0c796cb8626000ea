// Rust guideline compliant 2026-02-06

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fsmviz_core::{read_edges, spring_layout, AutomatonGraph, EdgeRecord};
use std::io::Write;
use tempfile::TempDir;

fn build_records(count: usize) -> Vec<EdgeRecord> {
    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let source = format!("q{}", i % 50);
        let destination = format!("q{}", (i * 7 + 1) % 50);
        records.push(EdgeRecord::new(source, destination, "a", i.to_string()));
    }
    records
}

fn write_edge_file(count: usize) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("edges.txt");
    let mut file = std::fs::File::create(&path).expect("Failed to create edges file");
    for record in build_records(count) {
        writeln!(
            file,
            "{} {} {} {}",
            record.source, record.destination, record.label1, record.label2
        )
        .expect("Failed to write edge line");
    }
    (temp_dir, path)
}

fn bench_read_edges(c: &mut Criterion) {
    let (_temp_dir, path) = write_edge_file(1000);
    c.bench_function("read_edges_1000", |b| {
        b.iter(|| black_box(read_edges(&path)))
    });
}

fn bench_from_records(c: &mut Criterion) {
    let records = build_records(1000);
    c.bench_function("from_records_1000", |b| {
        b.iter(|| black_box(AutomatonGraph::from_records(&records)))
    });
}

fn bench_spring_layout(c: &mut Criterion) {
    let graph = AutomatonGraph::from_records(&build_records(500));
    c.bench_function("spring_layout_50_nodes", |b| {
        b.iter(|| black_box(spring_layout(&graph, 50, 42)))
    });
}

criterion_group!(
    benches,
    bench_read_edges,
    bench_from_records,
    bench_spring_layout
);
criterion_main!(benches);
