//! Core data structures for the Symlace puzzle.
//!
//! This crate provides the board model shared by the game engine, the puzzle
//! generator, and the console front end.
//!
//! # Overview
//!
//! - [`symbol`]: the [`Symbol`] token type and the reserved sentinel glyphs
//!   ([`EMPTY_GLYPH`], [`BLOCKED_GLYPH`], [`WILDCARD_GLYPH`]).
//! - [`position`]: 1-based [`Position`] coordinates (row 1 is the bottom row).
//! - [`cell`]: a single [`Cell`], either normal (holding at most one symbol
//!   plus a growing forbidden-symbol set) or permanently blocked.
//! - [`grid`]: the owned square [`Grid`] of cells, including the canonical
//!   clockwise 3x3 [`Grid::neighborhood`] read used by pattern matching.
//! - [`pattern`]: immutable 3x3 [`Pattern`] rules matched against
//!   neighborhoods.
//!
//! # Examples
//!
//! ```
//! use symlace_core::{Grid, Pattern, Position, Symbol};
//!
//! let symbol = Symbol::new('Q').unwrap();
//! let pattern = Pattern::new(symbol, "QQ**Q**QQ").unwrap();
//!
//! let mut grid = Grid::new(3).unwrap();
//! grid.cell_mut(Position::new(3, 1)).unwrap().set_symbol(symbol);
//!
//! let neighborhood = grid.neighborhood(Position::new(3, 1)).unwrap();
//! assert_eq!(neighborhood[0], 'Q');
//! assert!(!pattern.matches(&neighborhood, symbol));
//! ```

pub mod cell;
pub mod grid;
pub mod pattern;
pub mod position;
pub mod symbol;

pub use self::{
    cell::Cell,
    grid::{Grid, GridError},
    pattern::{Pattern, PatternError},
    position::Position,
    symbol::{BLOCKED_GLYPH, EMPTY_GLYPH, Symbol, SymbolError, WILDCARD_GLYPH},
};
