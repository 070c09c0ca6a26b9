//! Performance benchmarks for nova-state operations.
//!
//! Run with: cargo bench --package nova-state

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nova_state::{reset_state, resolve, Path, ResetPaths};
use serde_json::{json, Value};

/// Generate a flat document with N fields
fn generate_flat_doc(num_fields: usize) -> Value {
    let mut obj = serde_json::Map::new();
    for i in 0..num_fields {
        obj.insert(format!("field_{}", i), json!(i));
    }
    Value::Object(obj)
}

/// Generate a deeply nested document
fn generate_nested_doc(depth: usize) -> Value {
    let mut current = json!({"value": 42});
    for i in (0..depth).rev() {
        let mut obj = serde_json::Map::new();
        obj.insert(format!("level_{}", i), current);
        current = Value::Object(obj);
    }
    current
}

/// Path that overshoots a nested document by `overshoot` missing segments.
fn overshooting_path(depth: usize, overshoot: usize) -> Path {
    let mut path = Path::root();
    for i in 0..depth {
        path.push(format!("level_{}", i));
    }
    for i in 0..overshoot {
        path.push(format!("missing_{}", i));
    }
    path
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for depth in [4, 16, 64] {
        let doc = generate_nested_doc(depth);
        let path = overshooting_path(depth, depth);
        group.bench_with_input(BenchmarkId::new("overshoot", depth), &path, |b, path| {
            b.iter(|| resolve(black_box(&doc), black_box(path)))
        });
    }
    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    let mut group = c.benchmark_group("reset_state");
    for size in [10, 100, 1000] {
        let initial = generate_flat_doc(size);
        let mut current = initial.clone();
        current["extra"] = json!(true);
        let paths = ResetPaths::from_strs((0..size).step_by(2).map(|i| format!("field_{}", i)));

        group.bench_with_input(BenchmarkId::new("flat", size), &paths, |b, paths| {
            b.iter(|| reset_state(black_box(&initial), black_box(&current), paths))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_resolve, bench_reset);
criterion_main!(benches);
