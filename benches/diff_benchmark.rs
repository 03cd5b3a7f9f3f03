//! Line diff benchmark: measure comparison performance.
//!
//! The live comparison recomputes on every keystroke, so the positional
//! diff must stay well under a frame at typical buffer sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use snapdiff::compare::{diff_lines, diff_lines_aligned};

/// Create a buffer of `count` distinct lines for benchmarking.
fn create_test_lines(count: usize, seed: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("let value_{} = compute({}, {});", i, i * 7 + seed, seed))
        .collect()
}

fn diff_identical_buffers(c: &mut Criterion) {
    let left = create_test_lines(500, 0);
    let right = left.clone();

    c.bench_function("diff_500_identical", |b| {
        b.iter(|| diff_lines(black_box(&left), black_box(&right)))
    });
}

fn diff_single_line_change(c: &mut Criterion) {
    let left = create_test_lines(500, 0);
    let mut right = left.clone();
    right[250] = String::from("changed");

    c.bench_function("diff_500_single_change", |b| {
        b.iter(|| diff_lines(black_box(&left), black_box(&right)))
    });
}

fn diff_every_line_changed(c: &mut Criterion) {
    let left = create_test_lines(500, 0);
    let right = create_test_lines(500, 1); // Different seed = different content

    c.bench_function("diff_500_full_change", |b| {
        b.iter(|| diff_lines(black_box(&left), black_box(&right)))
    });
}

fn diff_unequal_lengths(c: &mut Criterion) {
    let left = create_test_lines(500, 0);
    let right = create_test_lines(350, 0);

    c.bench_function("diff_500_vs_350", |b| {
        b.iter(|| diff_lines(black_box(&left), black_box(&right)))
    });
}

fn diff_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_by_size");

    for count in [50, 200, 500, 2000] {
        let left = create_test_lines(count, 0);
        let right = create_test_lines(count, 1);

        group.bench_with_input(
            BenchmarkId::new("full_change", count),
            &(left, right),
            |b, (l, r)| b.iter(|| diff_lines(black_box(l), black_box(r))),
        );
    }

    group.finish();
}

fn aligned_diff_with_insertion(c: &mut Criterion) {
    let left = create_test_lines(200, 0);
    let mut right = left.clone();
    right.insert(100, String::from("inserted line"));

    c.bench_function("aligned_200_insertion", |b| {
        b.iter(|| diff_lines_aligned(black_box(&left), black_box(&right)))
    });
}

criterion_group!(
    benches,
    diff_identical_buffers,
    diff_single_line_change,
    diff_every_line_changed,
    diff_unequal_lengths,
    diff_by_size,
    aligned_diff_with_insertion,
);
criterion_main!(benches);
