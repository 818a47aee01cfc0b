//! Benchmarks for differential frame presentation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quill::Screen;
use std::io;

fn presented_screen(width: u16, height: u16) -> Screen {
    let mut screen = Screen::new(width, height);
    screen.clear();
    screen.present(&mut io::sink()).unwrap();
    screen
}

fn bench_full_repaint(c: &mut Criterion) {
    c.bench_function("diff_full_repaint_80x24", |b| {
        b.iter_with_setup(
            || Screen::new(80, 24),
            |mut screen| {
                screen.clear();
                for y in 0..24 {
                    for x in 0..80 {
                        screen.put(x, y, b'a' + ((x + y) % 26) as u8);
                    }
                }
                screen.present(&mut io::sink()).unwrap()
            },
        );
    });
}

fn bench_no_change(c: &mut Criterion) {
    c.bench_function("diff_no_change_80x24", |b| {
        b.iter_with_setup(
            || presented_screen(80, 24),
            |mut screen| {
                screen.clear();
                screen.present(&mut io::sink()).unwrap()
            },
        );
    });
}

fn bench_single_cell_change(c: &mut Criterion) {
    c.bench_function("diff_single_cell_80x24", |b| {
        b.iter_with_setup(
            || presented_screen(80, 24),
            |mut screen| {
                screen.clear();
                screen.put(black_box(40), black_box(12), b'X');
                screen.present(&mut io::sink()).unwrap()
            },
        );
    });
}

fn bench_status_line_update(c: &mut Criterion) {
    // Typical per-keystroke frame: one row of the grid changes.
    c.bench_function("diff_one_row_80x24", |b| {
        b.iter_with_setup(
            || presented_screen(80, 24),
            |mut screen| {
                screen.clear();
                for x in 0..80 {
                    screen.put(x, 23, b'a' + (x % 26) as u8);
                }
                screen.present(&mut io::sink()).unwrap()
            },
        );
    });
}

criterion_group!(
    benches,
    bench_full_repaint,
    bench_no_change,
    bench_single_cell_change,
    bench_status_line_update
);
criterion_main!(benches);
