//! The puzzle engine.

use symlace_core::{Grid, Pattern, Position, Symbol, grid::NEIGHBORHOOD_OFFSETS};

/// Points awarded for completing a pattern.
pub const MATCH_BONUS: u32 = 10;

/// A puzzle session.
///
/// Owns the grid, the symbol vocabulary, the registered patterns, the
/// running score, and the countdown of placement attempts. The single
/// state-mutating operation is [`place_symbol`](Self::place_symbol); the
/// puzzle is over exactly when [`symbols_left`](Self::symbols_left) reaches
/// zero.
///
/// # Examples
///
/// ```
/// use symlace_core::{Grid, Pattern, Position, Symbol};
/// use symlace_game::{PlaceOutcome, Puzzle};
///
/// let q = Symbol::new('Q').unwrap();
/// let pattern = Pattern::new(q, "QQ**Q**QQ").unwrap();
/// let mut puzzle = Puzzle::new(Grid::new(4).unwrap(), vec![q], vec![pattern], 0, 10);
///
/// assert_eq!(puzzle.place_symbol(Position::new(2, 2), q), PlaceOutcome::Placed);
/// assert_eq!(puzzle.symbols_left(), 9);
/// assert_eq!(puzzle.score(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    allowed_symbols: Vec<Symbol>,
    patterns: Vec<Pattern>,
    score: u32,
    symbols_left: u32,
}

/// The result of a placement attempt.
///
/// Every variant represents a consumed attempt; none of them is a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum PlaceOutcome {
    /// The symbol was placed and completed a pattern.
    Matched {
        /// Points added to the score.
        points: u32,
    },
    /// The symbol was placed without completing a pattern.
    Placed,
    /// The target cell rejected the symbol (forbidden or blocked).
    Rejected,
    /// The coordinate resolved outside the grid.
    OutOfBounds,
}

impl Puzzle {
    /// Creates a puzzle from its parts.
    ///
    /// `patterns` are tested in the given order; registration order is the
    /// tie-break when several patterns could fire for one placement.
    #[must_use]
    pub fn new(
        grid: Grid,
        allowed_symbols: Vec<Symbol>,
        patterns: Vec<Pattern>,
        score: u32,
        symbols_left: u32,
    ) -> Self {
        Self {
            grid,
            allowed_symbols,
            patterns,
            score,
            symbols_left,
        }
    }

    /// Returns the board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the symbol vocabulary, in registration order.
    #[must_use]
    pub fn allowed_symbols(&self) -> &[Symbol] {
        &self.allowed_symbols
    }

    /// Returns the registered patterns, in registration order.
    #[must_use]
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    /// Returns the running score.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the number of placement attempts left.
    #[must_use]
    pub fn symbols_left(&self) -> u32 {
        self.symbols_left
    }

    /// Returns whether the placement budget is exhausted.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.symbols_left == 0
    }

    /// Attempts to place `symbol` at `pos`.
    ///
    /// Exactly one placement attempt is consumed regardless of the outcome.
    /// An out-of-range coordinate or a rejecting cell (forbidden or blocked)
    /// leaves the grid and score untouched. A successful write triggers the
    /// match scan; on a match the score grows by [`MATCH_BONUS`] and all 9
    /// cells of the matched block become forbidden for `symbol`.
    pub fn place_symbol(&mut self, pos: Position, symbol: Symbol) -> PlaceOutcome {
        self.symbols_left = self.symbols_left.saturating_sub(1);

        let Some(cell) = self.grid.cell_mut(pos) else {
            return PlaceOutcome::OutOfBounds;
        };
        if !cell.is_symbol_allowed(symbol) {
            return PlaceOutcome::Rejected;
        }
        cell.set_symbol(symbol);

        let points = self.scan_for_match(pos, symbol);
        if points > 0 {
            self.score += points;
            PlaceOutcome::Matched { points }
        } else {
            PlaceOutcome::Placed
        }
    }

    /// Scans every 3x3 block containing `pos` for a completed pattern.
    ///
    /// Block start rows are tried in descending order (`row + 2` down to
    /// `row`), start columns in ascending order (`column - 2` up to
    /// `column`). Blocks straddling an edge are skipped. The first block
    /// whose neighborhood matches any pattern (in registration order) wins:
    /// its 9 cells forbid `symbol` and the scan stops.
    fn scan_for_match(&mut self, pos: Position, symbol: Symbol) -> u32 {
        for start_row in (pos.row..=pos.row + 2).rev() {
            for start_column in pos.column - 2..=pos.column {
                let start = Position::new(start_row, start_column);
                let Some(neighborhood) = self.grid.neighborhood(start) else {
                    continue;
                };
                if self
                    .patterns
                    .iter()
                    .any(|pattern| pattern.matches(&neighborhood, symbol))
                {
                    for (row_delta, column_delta) in NEIGHBORHOOD_OFFSETS {
                        if let Some(cell) = self.grid.cell_mut(start.offset(row_delta, column_delta))
                        {
                            cell.forbid(symbol);
                        }
                    }
                    return MATCH_BONUS;
                }
            }
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use symlace_core::Cell;

    use super::*;

    fn sym(ch: char) -> Symbol {
        Symbol::new(ch).unwrap()
    }

    fn puzzle_with_pattern(size: u32, symbol: char, template: &str, symbols_left: u32) -> Puzzle {
        let symbol = sym(symbol);
        let pattern = Pattern::new(symbol, template).unwrap();
        Puzzle::new(
            Grid::new(size).unwrap(),
            vec![symbol],
            vec![pattern],
            0,
            symbols_left,
        )
    }

    #[test]
    fn test_every_attempt_consumes_one_placement() {
        let mut puzzle = puzzle_with_pattern(3, 'Q', "QQ**Q**QQ", 4);
        let q = sym('Q');

        assert_eq!(puzzle.place_symbol(Position::new(0, 0), q), PlaceOutcome::OutOfBounds);
        assert_eq!(puzzle.symbols_left(), 3);

        assert_eq!(puzzle.place_symbol(Position::new(1, 1), q), PlaceOutcome::Placed);
        assert_eq!(puzzle.symbols_left(), 2);

        // Forbid the cell, then a rejected attempt still counts
        puzzle.grid.cell_mut(Position::new(2, 2)).unwrap().forbid(q);
        assert_eq!(puzzle.place_symbol(Position::new(2, 2), q), PlaceOutcome::Rejected);
        assert_eq!(puzzle.symbols_left(), 1);
    }

    #[test]
    fn test_out_of_range_leaves_state_untouched() {
        let mut puzzle = puzzle_with_pattern(3, 'Q', "QQ**Q**QQ", 2);
        let before = puzzle.grid.clone();
        assert_eq!(
            puzzle.place_symbol(Position::new(4, 2), sym('Q')),
            PlaceOutcome::OutOfBounds
        );
        assert_eq!(puzzle.grid, before);
        assert_eq!(puzzle.score(), 0);
        assert_eq!(puzzle.symbols_left(), 1);
    }

    #[test]
    fn test_blocked_cell_rejects_placement() {
        let q = sym('Q');
        let mut cells = vec![Cell::empty(); 9];
        cells[4] = Cell::blocked();
        let grid = Grid::from_cells(3, cells).unwrap();
        let pattern = Pattern::new(q, "QQ**Q**QQ").unwrap();
        let mut puzzle = Puzzle::new(grid, vec![q], vec![pattern], 0, 1);

        assert_eq!(puzzle.place_symbol(Position::new(2, 2), q), PlaceOutcome::Rejected);
        assert!(puzzle.grid().cell(Position::new(2, 2)).unwrap().is_blocked());
        assert_eq!(puzzle.score(), 0);
        assert!(puzzle.is_finished());
    }

    #[test]
    fn test_completing_a_pattern_scores_and_finishes() {
        let q = sym('Q');
        let mut puzzle = puzzle_with_pattern(3, 'Q', "QQ**Q**QQ", 9);
        // "QQ**Q**QQ" requires Q at clockwise slots 0, 1, 4, 7, 8, which for
        // the block at (3,1) are (3,1), (3,2), (1,3), (2,1), and (2,2).
        for pos in [
            Position::new(3, 1),
            Position::new(3, 2),
            Position::new(1, 3),
            Position::new(2, 1),
        ] {
            assert_eq!(puzzle.place_symbol(pos, q), PlaceOutcome::Placed);
        }
        for _ in 0..4 {
            // Burn attempts on an out-of-range coordinate
            assert_eq!(puzzle.place_symbol(Position::new(9, 9), q), PlaceOutcome::OutOfBounds);
        }
        assert_eq!(puzzle.symbols_left(), 1);

        // The 9th attempt completes the pattern
        assert_eq!(
            puzzle.place_symbol(Position::new(2, 2), q),
            PlaceOutcome::Matched { points: MATCH_BONUS }
        );
        assert_eq!(puzzle.score(), 10);
        assert!(puzzle.is_finished());

        // Every cell of the matched block now forbids Q
        for row in 1..=3 {
            for column in 1..=3 {
                let cell = puzzle.grid().cell(Position::new(row, column)).unwrap();
                assert!(!cell.is_symbol_allowed(q));
            }
        }
    }

    #[test]
    fn test_first_block_in_scan_order_wins() {
        // An all-wildcard pattern matches every in-range block, so the
        // forbidden cells reveal which block the scan picked first.
        let q = sym('Q');
        let mut puzzle = puzzle_with_pattern(5, 'Q', "*********", 1);

        assert_eq!(
            puzzle.place_symbol(Position::new(3, 3), q),
            PlaceOutcome::Matched { points: MATCH_BONUS }
        );

        // Start row is tried descending from row + 2, start column ascending
        // from column - 2, so the winning block starts at (5, 1).
        for row in 1..=5 {
            for column in 1..=5 {
                let cell = puzzle.grid().cell(Position::new(row, column)).unwrap();
                let in_block = (3..=5).contains(&row) && (1..=3).contains(&column);
                assert_eq!(cell.is_symbol_allowed(q), !in_block, "at ({row}, {column})");
            }
        }
    }

    #[test]
    fn test_edge_placement_skips_out_of_range_blocks() {
        let q = sym('Q');
        let mut puzzle = puzzle_with_pattern(3, 'Q', "*********", 1);

        // At (1, 1) only the block starting at (3, 1) fits on the board
        assert_eq!(
            puzzle.place_symbol(Position::new(1, 1), q),
            PlaceOutcome::Matched { points: MATCH_BONUS }
        );
        assert_eq!(puzzle.score(), 10);
    }

    #[test]
    fn test_matched_cells_never_rematch_for_that_symbol() {
        let q = sym('Q');
        let mut puzzle = puzzle_with_pattern(3, 'Q', "*********", 3);

        assert!(puzzle.place_symbol(Position::new(1, 1), q).is_matched());
        // Every cell of the board is now forbidden for Q
        assert_eq!(puzzle.place_symbol(Position::new(2, 2), q), PlaceOutcome::Rejected);
        assert_eq!(puzzle.score(), 10);

        // A different symbol is still accepted
        let t = sym('T');
        assert_eq!(puzzle.place_symbol(Position::new(2, 2), t), PlaceOutcome::Placed);
    }

    proptest! {
        #[test]
        fn test_symbols_left_decrements_by_exactly_one(
            row in -5_i32..10,
            column in -5_i32..10,
            budget in 1_u32..20,
        ) {
            let mut puzzle = puzzle_with_pattern(4, 'Q', "QQ**Q**QQ", budget);
            puzzle.place_symbol(Position::new(row, column), sym('Q'));
            prop_assert_eq!(puzzle.symbols_left(), budget - 1);
        }

        #[test]
        fn test_forbidden_sets_only_grow(placements in prop::collection::vec(
            (1_i32..=4, 1_i32..=4, prop::sample::select(vec!['Q', 'X'])),
            1..20,
        )) {
            let q = sym('Q');
            let x = sym('X');
            let patterns = vec![
                Pattern::new(q, "****Q****").unwrap(),
                Pattern::new(x, "X*X*X*X*X").unwrap(),
            ];
            let budget = u32::try_from(placements.len()).unwrap();
            let mut puzzle = Puzzle::new(
                Grid::new(4).unwrap(),
                vec![q, x],
                patterns,
                0,
                budget,
            );

            let mut forbidden_counts = vec![0_usize; puzzle.grid().cell_count()];
            for (row, column, ch) in placements {
                puzzle.place_symbol(Position::new(row, column), sym(ch));
                for (i, cell) in puzzle.grid().cells().iter().enumerate() {
                    let count = cell.forbidden().count();
                    prop_assert!(count >= forbidden_counts[i]);
                    forbidden_counts[i] = count;
                }
            }
            prop_assert!(puzzle.is_finished());
        }
    }
}
