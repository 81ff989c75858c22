//! The textual puzzle definition format.
//!
//! A definition is line-oriented:
//!
//! ```text
//! <count_of_symbols>
//! <symbol>                     repeated count times
//! <count_of_patterns>
//! <symbol>,<9-char template>   repeated count times
//! <grid_size>
//! <cell>                       repeated size*size times, top row first
//! <initial_score>
//! <symbols_remaining>
//! ```
//!
//! A cell line is `@` for a blocked cell, otherwise the placed symbol (or
//! `-` if unplaced) optionally followed by comma-separated symbols already
//! forbidden for that cell.
//!
//! [`Puzzle`] implements [`FromStr`] for parsing and [`Display`] for
//! serialization; the two round-trip. Parse failures report the 1-based
//! line and field that failed, and no partial puzzle is ever produced.
//!
//! # Examples
//!
//! ```
//! use symlace_game::Puzzle;
//!
//! let definition = "\
//! 1
//! Q
//! 1
//! Q,QQ**Q**QQ
//! 2
//! Q,X
//! -
//! @
//! -
//! 0
//! 5
//! ";
//! let puzzle: Puzzle = definition.parse().unwrap();
//! assert_eq!(puzzle.grid().size(), 2);
//! assert_eq!(puzzle.symbols_left(), 5);
//! assert_eq!(puzzle.to_string(), definition);
//! ```

use std::{
    fmt::{self, Display, Write as _},
    str::{FromStr, Lines},
};

use symlace_core::{
    BLOCKED_GLYPH, Cell, EMPTY_GLYPH, Grid, GridError, Pattern, PatternError, Symbol, SymbolError,
};

use crate::Puzzle;

/// Errors from parsing a puzzle definition.
///
/// Each variant names the 1-based line it occurred on, so a malformed file
/// can be reported precisely instead of as an opaque load failure.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DefinitionError {
    /// The definition ended before the named field.
    #[display("line {line}: missing {expected}")]
    MissingLine {
        /// The line the field was expected on.
        line: usize,
        /// A description of the expected field.
        expected: &'static str,
    },
    /// A numeric field did not parse as a non-negative integer.
    #[display("line {line}: invalid {field}: {token:?}")]
    InvalidNumber {
        /// The line the field appeared on.
        line: usize,
        /// The name of the numeric field.
        field: &'static str,
        /// The token that failed to parse.
        token: String,
    },
    /// A symbol token was malformed or reserved.
    #[display("line {line}: {source}")]
    InvalidSymbol {
        /// The line the token appeared on.
        line: usize,
        /// The underlying symbol error.
        source: SymbolError,
    },
    /// A pattern line was missing its `symbol,template` separator.
    #[display("line {line}: pattern line must be <symbol>,<template>")]
    MalformedPattern {
        /// The line the pattern appeared on.
        line: usize,
    },
    /// A pattern template failed validation.
    #[display("line {line}: {source}")]
    InvalidPattern {
        /// The line the pattern appeared on.
        line: usize,
        /// The underlying pattern error.
        source: PatternError,
    },
    /// The declared grid size was unusable.
    #[display("line {line}: {source}")]
    InvalidGrid {
        /// The line the grid size appeared on.
        line: usize,
        /// The underlying grid error.
        source: GridError,
    },
    /// Non-blank content followed the final field.
    #[display("line {line}: unexpected trailing content")]
    TrailingContent {
        /// The first unexpected line.
        line: usize,
    },
}

struct DefinitionLines<'a> {
    lines: Lines<'a>,
    line: usize,
}

impl<'a> DefinitionLines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines(),
            line: 0,
        }
    }

    fn next(&mut self, expected: &'static str) -> Result<(usize, &'a str), DefinitionError> {
        self.line += 1;
        match self.lines.next() {
            Some(text) => Ok((self.line, text.trim())),
            None => Err(DefinitionError::MissingLine {
                line: self.line,
                expected,
            }),
        }
    }

    fn next_number(&mut self, field: &'static str) -> Result<(usize, u32), DefinitionError> {
        let (line, text) = self.next(field)?;
        let value = text.parse().map_err(|_| DefinitionError::InvalidNumber {
            line,
            field,
            token: text.to_owned(),
        })?;
        Ok((line, value))
    }

    fn next_symbol(&mut self, expected: &'static str) -> Result<Symbol, DefinitionError> {
        let (line, text) = self.next(expected)?;
        text.parse()
            .map_err(|source| DefinitionError::InvalidSymbol { line, source })
    }

    fn finish(mut self) -> Result<(), DefinitionError> {
        for text in self.lines {
            self.line += 1;
            if !text.trim().is_empty() {
                return Err(DefinitionError::TrailingContent { line: self.line });
            }
        }
        Ok(())
    }
}

fn parse_symbol(line: usize, token: &str) -> Result<Symbol, DefinitionError> {
    token
        .parse()
        .map_err(|source| DefinitionError::InvalidSymbol { line, source })
}

fn parse_pattern(line: usize, text: &str) -> Result<Pattern, DefinitionError> {
    let (symbol, template) = text
        .split_once(',')
        .ok_or(DefinitionError::MalformedPattern { line })?;
    let symbol = parse_symbol(line, symbol)?;
    Pattern::new(symbol, template).map_err(|source| DefinitionError::InvalidPattern { line, source })
}

fn parse_cell(line: usize, text: &str) -> Result<Cell, DefinitionError> {
    let mut tokens = text.split(',');
    let first = tokens.next().unwrap_or_default();
    let mut chars = first.chars();
    let mut cell = match (chars.next(), chars.next()) {
        (Some(BLOCKED_GLYPH), None) => return Ok(Cell::blocked()),
        (Some(EMPTY_GLYPH), None) => Cell::empty(),
        _ => Cell::with_symbol(parse_symbol(line, first)?),
    };
    for token in tokens {
        cell.forbid(parse_symbol(line, token)?);
    }
    Ok(cell)
}

impl FromStr for Puzzle {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = DefinitionLines::new(s);

        let (_, symbol_count) = lines.next_number("symbol count")?;
        let mut allowed_symbols = Vec::new();
        for _ in 0..symbol_count {
            allowed_symbols.push(lines.next_symbol("symbol")?);
        }

        let (_, pattern_count) = lines.next_number("pattern count")?;
        let mut patterns = Vec::new();
        for _ in 0..pattern_count {
            let (line, text) = lines.next("pattern")?;
            patterns.push(parse_pattern(line, text)?);
        }

        let (size_line, size) = lines.next_number("grid size")?;
        let cell_count = u64::from(size) * u64::from(size);
        let mut cells = Vec::new();
        for _ in 0..cell_count {
            let (line, text) = lines.next("cell")?;
            cells.push(parse_cell(line, text)?);
        }
        let grid = Grid::from_cells(size, cells).map_err(|source| DefinitionError::InvalidGrid {
            line: size_line,
            source,
        })?;

        let (_, score) = lines.next_number("initial score")?;
        let (_, symbols_left) = lines.next_number("symbols remaining")?;
        lines.finish()?;

        Ok(Self::new(grid, allowed_symbols, patterns, score, symbols_left))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.allowed_symbols().len())?;
        for symbol in self.allowed_symbols() {
            writeln!(f, "{symbol}")?;
        }
        writeln!(f, "{}", self.patterns().len())?;
        for pattern in self.patterns() {
            writeln!(f, "{pattern}")?;
        }
        writeln!(f, "{}", self.grid().size())?;
        for cell in self.grid().cells() {
            let mut line = String::new();
            line.push(cell.display_symbol());
            for symbol in cell.forbidden() {
                write!(line, ",{symbol}")?;
            }
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", self.score())?;
        writeln!(f, "{}", self.symbols_left())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use symlace_core::Position;

    use super::*;
    use crate::PlaceOutcome;

    const SAMPLE: &str = "\
2
Q
X
2
Q,QQ**Q**QQ
X,X*X*X*X*X
3
Q,X
@
-
-
X,Q
-
-,Q,X
-
Q
25
4
";

    #[test]
    fn test_parse_sample_definition() {
        let puzzle: Puzzle = SAMPLE.parse().unwrap();
        assert_eq!(puzzle.allowed_symbols().len(), 2);
        assert_eq!(puzzle.patterns().len(), 2);
        assert_eq!(puzzle.grid().size(), 3);
        assert_eq!(puzzle.score(), 25);
        assert_eq!(puzzle.symbols_left(), 4);

        let q = Symbol::new('Q').unwrap();
        let x = Symbol::new('X').unwrap();

        // Top-left cell holds Q with X forbidden
        let cell = puzzle.grid().cell(Position::new(3, 1)).unwrap();
        assert_eq!(cell.symbol(), Some(q));
        assert!(!cell.is_symbol_allowed(x));
        assert!(cell.is_symbol_allowed(q));

        assert!(puzzle.grid().cell(Position::new(3, 2)).unwrap().is_blocked());

        // Empty cell with two forbidden symbols
        let cell = puzzle.grid().cell(Position::new(1, 1)).unwrap();
        assert!(cell.is_empty());
        assert!(!cell.is_symbol_allowed(q));
        assert!(!cell.is_symbol_allowed(x));
    }

    #[test]
    fn test_round_trip_preserves_observable_state() {
        let puzzle: Puzzle = SAMPLE.parse().unwrap();
        let serialized = puzzle.to_string();
        let reloaded: Puzzle = serialized.parse().unwrap();
        assert_eq!(puzzle, reloaded);
        assert_eq!(reloaded.to_string(), serialized);
    }

    #[test]
    fn test_round_trip_after_play() {
        let mut puzzle: Puzzle = SAMPLE.parse().unwrap();
        let q = Symbol::new('Q').unwrap();
        assert!(!puzzle.place_symbol(Position::new(2, 2), q).is_out_of_bounds());

        let reloaded: Puzzle = puzzle.to_string().parse().unwrap();
        assert_eq!(puzzle, reloaded);
    }

    #[test]
    fn test_missing_line_is_reported() {
        let err = "2\nQ\n".parse::<Puzzle>().unwrap_err();
        assert_eq!(
            err,
            DefinitionError::MissingLine {
                line: 3,
                expected: "symbol",
            }
        );
    }

    #[test]
    fn test_bad_numeric_field_is_reported() {
        let err = "one\n".parse::<Puzzle>().unwrap_err();
        assert_eq!(
            err,
            DefinitionError::InvalidNumber {
                line: 1,
                field: "symbol count",
                token: "one".to_owned(),
            }
        );
    }

    #[test]
    fn test_malformed_pattern_is_reported() {
        let input = "1\nQ\n1\nQQQ**Q**QQ\n";
        let err = input.parse::<Puzzle>().unwrap_err();
        assert_eq!(err, DefinitionError::MalformedPattern { line: 4 });
    }

    #[test]
    fn test_bad_template_is_reported() {
        let input = "1\nQ\n1\nQ,QQ**Q**QX\n";
        let err = input.parse::<Puzzle>().unwrap_err();
        assert!(matches!(
            err,
            DefinitionError::InvalidPattern { line: 4, .. }
        ));
    }

    #[test]
    fn test_reserved_cell_symbol_is_reported() {
        let input = "0\n0\n1\n*\n0\n0\n";
        let err = input.parse::<Puzzle>().unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidSymbol { line: 4, .. }));
    }

    #[test]
    fn test_trailing_content_is_reported() {
        let input = "0\n0\n1\n-\n0\n0\nextra\n";
        let err = input.parse::<Puzzle>().unwrap_err();
        assert_eq!(err, DefinitionError::TrailingContent { line: 7 });
    }

    #[test]
    fn test_trailing_blank_lines_are_accepted() {
        let input = "0\n0\n1\n-\n0\n0\n\n\n";
        assert!(input.parse::<Puzzle>().is_ok());
    }

    #[test]
    fn test_loaded_puzzle_plays_out() {
        let mut puzzle: Puzzle = SAMPLE.parse().unwrap();
        let x = Symbol::new('X').unwrap();

        // Blocked cell rejects but still consumes the attempt
        assert_eq!(puzzle.place_symbol(Position::new(3, 2), x), PlaceOutcome::Rejected);
        assert_eq!(puzzle.symbols_left(), 3);
    }
}
