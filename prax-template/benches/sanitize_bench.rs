//! Benchmarks for template rendering.

use chrono::{TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use prax_template::{Part, Template, Value};
use std::hint::black_box;

/// A template of `n` slots followed by a closing literal.
fn slot_template(n: usize) -> Template {
    std::iter::repeat_n(Part::Slot, n)
        .chain([Part::Literal(";".into())])
        .collect()
}

fn bench_scalar_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_scalar");
    let template = slot_template(1);
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();

    let cases = [
        ("int", Value::Int(42)),
        ("float", Value::Float(2.5)),
        ("bool", Value::Bool(true)),
        ("bytes", Value::Bytes(b"hello world".to_vec())),
        ("null", Value::Null),
        ("timestamp", Value::from(at)),
    ];

    for (name, value) in cases {
        let args = [value];
        group.bench_function(name, |b| {
            b.iter(|| black_box(template.sanitize(black_box(&args))))
        });
    }

    group.finish();
}

fn bench_template_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_size");

    for size in [4usize, 16, 64, 256] {
        let template = slot_template(size);
        let args: Vec<Value> = (0..size as i64).map(Value::Int).collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &args, |b, args| {
            b.iter(|| black_box(template.sanitize(black_box(args))))
        });
    }

    group.finish();
}

fn bench_arg_refs(c: &mut Criterion) {
    let mut group = c.benchmark_group("sanitize_arg_ref");

    let template: Template = (0..32)
        .map(Part::ArgRef)
        .chain([Part::Literal(String::new())])
        .collect();
    let args: Vec<Value> = (0..32).map(|i| Value::from(format!("col_{i}, "))).collect();

    group.bench_function("text_32", |b| {
        b.iter(|| black_box(template.sanitize(black_box(&args))))
    });

    group.bench_function("arity_mismatch", |b| {
        b.iter(|| black_box(template.sanitize(black_box(&args[..31]))))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_kinds, bench_template_size, bench_arg_refs);
criterion_main!(benches);
