//! Benchmarks for gap-buffer line operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill::GapLine;

fn bench_sequential_insert(c: &mut Criterion) {
    c.bench_function("gap_insert_append_1k", |b| {
        b.iter(|| {
            let mut line = GapLine::empty();
            for i in 0..1000u32 {
                line.insert(black_box(b'a' + (i % 26) as u8));
            }
            line
        });
    });
}

fn bench_insert_at_start(c: &mut Criterion) {
    c.bench_function("gap_insert_at_start_1k", |b| {
        b.iter(|| {
            let mut line = GapLine::empty();
            for i in 0..1000u32 {
                line.set_cursor(0);
                line.insert(black_box(b'a' + (i % 26) as u8));
            }
            line
        });
    });
}

fn bench_cursor_relocation(c: &mut Criterion) {
    let content = vec![b'x'; 4096];
    c.bench_function("gap_cursor_far_jumps", |b| {
        b.iter_with_setup(
            || GapLine::from_bytes(&content),
            |mut line| {
                // Alternate between the two ends of the line.
                for _ in 0..64 {
                    line.set_cursor(black_box(0));
                    line.set_cursor(black_box(4096));
                }
                line
            },
        );
    });
}

fn bench_edit_at_stable_cursor(c: &mut Criterion) {
    let content = vec![b'x'; 4096];
    c.bench_function("gap_insert_delete_stable_cursor", |b| {
        b.iter_with_setup(
            || {
                let mut line = GapLine::from_bytes(&content);
                line.set_cursor(2048);
                line
            },
            |mut line| {
                for _ in 0..256 {
                    line.insert(black_box(b'y'));
                    line.set_cursor(2048);
                    line.delete_forward();
                }
                line
            },
        );
    });
}

fn bench_save_flatten(c: &mut Criterion) {
    let mut line = GapLine::from_bytes(&vec![b'x'; 4096]);
    line.set_cursor(1000);
    c.bench_function("gap_to_vec_4k", |b| {
        b.iter(|| black_box(&line).to_vec());
    });
}

criterion_group!(
    benches,
    bench_sequential_insert,
    bench_insert_at_start,
    bench_cursor_relocation,
    bench_edit_at_stable_cursor,
    bench_save_flatten
);
criterion_main!(benches);
