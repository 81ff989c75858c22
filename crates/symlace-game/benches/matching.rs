//! Benchmarks for the pattern-match scan.
//!
//! Measures a full placement (validation, write, and the nine-block scan)
//! on a densely filled board, for both a matching and a non-matching final
//! placement.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench matching
//! ```

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use symlace_core::{Grid, Pattern, Position, Symbol};
use symlace_game::Puzzle;

fn dense_puzzle(size: u32) -> (Puzzle, Symbol) {
    let q = Symbol::new('Q').unwrap();
    let x = Symbol::new('X').unwrap();
    let patterns = vec![
        Pattern::new(q, "QQ**Q**QQ").unwrap(),
        Pattern::new(x, "X*X*X*X*X").unwrap(),
    ];
    let mut grid = Grid::new(size).unwrap();
    let n = i32::try_from(size).unwrap();
    // Checkerboard of X leaves plenty of non-matching neighborhoods
    for row in 1..=n {
        for column in 1..=n {
            if (row + column) % 2 == 0 {
                grid.cell_mut(Position::new(row, column)).unwrap().set_symbol(x);
            }
        }
    }
    (Puzzle::new(grid, vec![q, x], patterns, 0, u32::MAX), q)
}

fn bench_scan_without_match(c: &mut Criterion) {
    let (puzzle, q) = dense_puzzle(8);
    c.bench_function("scan_without_match", |b| {
        b.iter_batched(
            || puzzle.clone(),
            |mut puzzle| puzzle.place_symbol(Position::new(4, 5), q),
            BatchSize::SmallInput,
        );
    });
}

fn bench_scan_with_match(c: &mut Criterion) {
    let x = Symbol::new('X').unwrap();
    let (puzzle, _) = dense_puzzle(8);
    c.bench_function("scan_with_match", |b| {
        b.iter_batched(
            || puzzle.clone(),
            // The checkerboard already holds every X of "X*X*X*X*X" around
            // (4, 4); rewriting the center completes it
            |mut puzzle| puzzle.place_symbol(Position::new(4, 4), x),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_scan_without_match, bench_scan_with_match);
criterion_main!(benches);
