//! The Symlace puzzle engine.
//!
//! This crate owns the rules of play: the placement contract, the 3x3
//! pattern-match scan, scoring, and the line-oriented puzzle definition
//! format.
//!
//! # Overview
//!
//! - [`puzzle`]: the [`Puzzle`] engine and its single state-mutating
//!   operation, [`Puzzle::place_symbol`].
//! - [`definition`]: parsing ([`FromStr`]) and serialization ([`Display`])
//!   of the textual puzzle definition format, with line-numbered
//!   [`DefinitionError`]s.
//!
//! [`FromStr`]: std::str::FromStr
//! [`Display`]: std::fmt::Display
//!
//! # Examples
//!
//! ```
//! use symlace_core::{Grid, Pattern, Position, Symbol};
//! use symlace_game::{PlaceOutcome, Puzzle};
//!
//! let q = Symbol::new('Q').unwrap();
//! let pattern = Pattern::new(q, "*********").unwrap();
//! let mut puzzle = Puzzle::new(Grid::new(3).unwrap(), vec![q], vec![pattern], 0, 2);
//!
//! // Every attempt consumes one placement, valid or not
//! assert_eq!(puzzle.place_symbol(Position::new(9, 9), q), PlaceOutcome::OutOfBounds);
//! assert_eq!(puzzle.symbols_left(), 1);
//!
//! // The all-wildcard pattern matches immediately
//! assert_eq!(
//!     puzzle.place_symbol(Position::new(1, 1), q),
//!     PlaceOutcome::Matched { points: 10 }
//! );
//! assert_eq!(puzzle.score(), 10);
//! assert!(puzzle.is_finished());
//! ```

pub mod definition;
pub mod puzzle;

pub use self::{
    definition::DefinitionError,
    puzzle::{MATCH_BONUS, PlaceOutcome, Puzzle},
};
