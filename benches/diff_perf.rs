//! Criterion benchmarks for the diff engine, the hot path of every
//! diff-backed scorer.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use skillscan::diff::diff;

fn synthetic_file(lines: usize, seed: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!("line {} of file {seed} with some payload\n", i));
    }
    text
}

fn edited_copy(original: &str, every: usize) -> String {
    original
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i % every == 0 {
                format!("edited {line}")
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
        + "\n"
}

fn diff_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");

    for lines in [100usize, 1_000, 5_000] {
        let previous = synthetic_file(lines, 1);
        let current = edited_copy(&previous, 10);
        group.throughput(Throughput::Elements(lines as u64));
        group.bench_with_input(
            BenchmarkId::new("sparse_edit", lines),
            &(previous, current),
            |b, (previous, current)| {
                b.iter(|| diff(black_box(previous), black_box(current)));
            },
        );
    }

    let previous = synthetic_file(1_000, 1);
    let current = synthetic_file(1_000, 2);
    group.bench_function("fully_rewritten_1000", |b| {
        b.iter(|| diff(black_box(&previous), black_box(&current)));
    });

    let unchanged = synthetic_file(5_000, 1);
    group.bench_function("identical_5000", |b| {
        b.iter(|| diff(black_box(&unchanged), black_box(&unchanged)));
    });

    group.finish();
}

criterion_group!(benches, diff_benchmarks);
criterion_main!(benches);
