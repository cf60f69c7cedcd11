//! Benchmarks for namespace duplication and property evaluation
//!
//! These cover the paths hit once per command build:
//! - Duplicating the prototype namespace
//! - Evaluating arithmetic on integer and decimal operands
//! - Counting elements of long delimited lists

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use propex_engine::{Operator, Property, PropertyMaps};

/// Benchmark prototype duplication
fn bench_duplicate(c: &mut Criterion) {
    let template = PropertyMaps::template();

    c.bench_function("namespace_duplicate", |b| {
        b.iter(|| black_box(template).duplicate());
    });
}

/// Benchmark arithmetic with and without decimal promotion
fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let cases = [
        ("integer_add", Operator::Add, "123456789", "987654321"),
        ("decimal_add", Operator::Add, "30", "1.23"),
        ("exact_div", Operator::Div, "1024", "8"),
        ("repeating_div", Operator::Div, "1", "3"),
    ];

    for (label, op, op1, op2) in cases {
        let mut property = Property::new(op);
        property.set_attribute("op1", op1);
        property.set_attribute("op2", op2);

        group.bench_function(label, |b| {
            b.iter(|| black_box(&property).current());
        });
    }

    group.finish();
}

/// Benchmark list counting on growing inputs
fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count");

    for size in &[10, 100, 1000] {
        let list = vec!["element"; *size].join(" ");
        let mut property = Property::new(Operator::Count);
        property.set_attribute("list", list);
        property.set_attribute("sep", " ");

        group.bench_with_input(BenchmarkId::from_parameter(size), &property, |b, p| {
            b.iter(|| black_box(p).current());
        });
    }

    group.finish();
}

// Allow missing docs for criterion-generated code
#[allow(missing_docs)]
#[allow(clippy::wildcard_imports)]
mod bench_groups {
    use super::*;

    criterion_group!(benches, bench_duplicate, bench_arithmetic, bench_count);
}

criterion_main!(bench_groups::benches);
