//! Performance benchmarks for structgen-codegen.
//!
//! Compares one-shot conversion (fresh generator per call) against a reused
//! generator, across source files with growing struct counts.
//!
//! Run with: cargo bench --package structgen-codegen

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::fmt::Write as _;
use std::hint::black_box;
use structgen_codegen::{CodeGenerator, generate_code};

// ============================================================================
// Test Data Generators
// ============================================================================

/// Creates a source file with `count` structs of five fields each.
fn create_source(count: usize) -> String {
    let mut source = String::from("package bench\n");
    for i in 0..count {
        let _ = write!(
            source,
            "\ntype Record{i} struct {{\n\tID int64\n\tName string\n\tTags []string\n\tAttrs map[string]any\n\tupdatedAt int64\n}}\n"
        );
    }
    source
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for count in [1, 10, 100] {
        let source = create_source(count);
        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(BenchmarkId::new("one_shot", count), &source, |b, source| {
            b.iter(|| generate_code(black_box(source.as_bytes())));
        });

        let generator = CodeGenerator::new().unwrap();
        group.bench_with_input(BenchmarkId::new("reused", count), &source, |b, source| {
            b.iter(|| generator.generate(black_box(source.as_bytes())).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
