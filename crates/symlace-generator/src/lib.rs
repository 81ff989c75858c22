//! Random puzzle generation for Symlace.
//!
//! A generated puzzle uses the built-in symbol vocabulary (`Q`, `X`, `T`,
//! each with one hard-coded 3x3 pattern) on a board where each cell is
//! independently blocked with 10% probability. Generation is seeded so a
//! puzzle can be reproduced from its seed.
//!
//! # Examples
//!
//! ```
//! use symlace_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::default();
//! let generated = generator.generate();
//! let puzzle = generated.puzzle;
//!
//! assert_eq!(puzzle.grid().size(), 8);
//! assert_eq!(puzzle.symbols_left(), 38);
//! assert_eq!(puzzle.allowed_symbols().len(), 3);
//!
//! // The same seed reproduces the same board
//! let again = generator.generate_with_seed(generated.seed);
//! assert_eq!(again.puzzle, puzzle);
//! ```

use rand::{RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;
use symlace_core::{Cell, Grid, Pattern, Symbol};
use symlace_game::Puzzle;

/// Probability that a generated cell is permanently blocked.
const BLOCKED_PROBABILITY: f64 = 0.1;

/// The built-in symbol and template vocabulary of generated puzzles.
const BUILT_IN_PATTERNS: [(char, &str); 3] = [
    ('Q', "QQ**Q**QQ"),
    ('X', "X*X*X*X*X"),
    ('T', "TTT**T**T"),
];

/// A generated puzzle together with the seed that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The ready-to-play puzzle.
    pub puzzle: Puzzle,
    /// The seed that reproduces this puzzle via
    /// [`PuzzleGenerator::generate_with_seed`].
    pub seed: u64,
}

/// Generator for random puzzles.
///
/// The default configuration is an 8x8 board with a budget of 38 placements
/// (60% of the cell count).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGenerator {
    size: u32,
    symbols_left: u32,
}

impl Default for PuzzleGenerator {
    fn default() -> Self {
        Self::new(8)
    }
}

impl PuzzleGenerator {
    /// Creates a generator for `size` x `size` boards with the default
    /// placement budget of 60% of the cell count.
    #[must_use]
    pub fn new(size: u32) -> Self {
        let size = size.max(1);
        Self {
            size,
            symbols_left: size * size * 3 / 5,
        }
    }

    /// Overrides the placement budget.
    #[must_use]
    pub fn with_symbols_left(mut self, symbols_left: u32) -> Self {
        self.symbols_left = symbols_left;
        self
    }

    /// Returns the configured board size.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the configured placement budget.
    #[must_use]
    pub fn symbols_left(&self) -> u32 {
        self.symbols_left
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(rand::rng().random())
    }

    /// Generates the puzzle determined by `seed`.
    ///
    /// # Panics
    ///
    /// Never panics: the built-in vocabulary and templates are statically
    /// valid, and the generated cell count always matches the grid size.
    #[must_use]
    pub fn generate_with_seed(&self, seed: u64) -> GeneratedPuzzle {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);

        let cell_count = (self.size as usize) * (self.size as usize);
        let cells = (0..cell_count)
            .map(|_| {
                if rng.random_bool(BLOCKED_PROBABILITY) {
                    Cell::blocked()
                } else {
                    Cell::empty()
                }
            })
            .collect();
        let grid = Grid::from_cells(self.size, cells).expect("cell count matches size");

        let mut allowed_symbols = Vec::new();
        let mut patterns = Vec::new();
        for (ch, template) in BUILT_IN_PATTERNS {
            let symbol = Symbol::new(ch).expect("built-in symbol is valid");
            allowed_symbols.push(symbol);
            patterns.push(Pattern::new(symbol, template).expect("built-in template is valid"));
        }

        GeneratedPuzzle {
            puzzle: Puzzle::new(grid, allowed_symbols, patterns, 0, self.symbols_left),
            seed,
        }
    }
}
