//! Micro-benchmarks for the per-frame board scans.
//!
//! Candidate derivation and the completion check run after every mutation
//! and are candidates for per-frame polling, so their full-board cost is
//! what matters.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench grid
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use numplace_core::{Grid, Position};

const PUZZLE: &str = "\
    53..7.... \
    6..195... \
    .98....6. \
    8...6...3 \
    4..8.3..1 \
    7...2...6 \
    .6....28. \
    ...419..5 \
    ....8..79";

const SOLUTION: &str = "\
    534678912 \
    672195348 \
    198342567 \
    859761423 \
    426853791 \
    713924856 \
    961537284 \
    287419635 \
    345286179";

fn bench_candidates_all_cells(c: &mut Criterion) {
    let grid: Grid = PUZZLE.parse().expect("valid puzzle");
    c.bench_function("candidates_all_cells", |b| {
        b.iter(|| {
            for pos in Position::ALL {
                hint::black_box(grid.candidates(pos));
            }
        });
    });
}

fn bench_is_complete(c: &mut Criterion) {
    let in_progress: Grid = PUZZLE.parse().expect("valid puzzle");
    let solved: Grid = SOLUTION.parse().expect("valid solution");

    c.bench_function("is_complete/in_progress", |b| {
        b.iter(|| hint::black_box(in_progress.is_complete()));
    });
    c.bench_function("is_complete/solved", |b| {
        b.iter(|| hint::black_box(solved.is_complete()));
    });
}

criterion_group!(benches, bench_candidates_all_cells, bench_is_complete);
criterion_main!(benches);
