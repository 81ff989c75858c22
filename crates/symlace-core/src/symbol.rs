//! Puzzle symbol representation.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Glyph displayed for an empty cell.
pub const EMPTY_GLYPH: char = '-';

/// Glyph displayed for a permanently blocked cell.
pub const BLOCKED_GLYPH: char = '@';

/// Wildcard glyph in pattern templates.
pub const WILDCARD_GLYPH: char = '*';

/// A single-character puzzle symbol.
///
/// The sentinel glyphs `-`, `@` and `*`, the `,` field separator of the
/// definition format, and whitespace are reserved and can never be symbols.
///
/// # Examples
///
/// ```
/// use symlace_core::Symbol;
///
/// let q = Symbol::new('Q').unwrap();
/// assert_eq!(q.as_char(), 'Q');
/// assert_eq!(q.to_string(), "Q");
///
/// // Sentinels are rejected
/// assert!(Symbol::new('@').is_err());
///
/// // Tokens parse as symbols
/// let x: Symbol = "X".parse().unwrap();
/// assert_eq!(x.as_char(), 'X');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(char);

impl Symbol {
    /// Creates a symbol from a character.
    ///
    /// # Errors
    ///
    /// Returns [`SymbolError::Reserved`] if `ch` is a sentinel glyph, the
    /// `,` separator, or whitespace.
    pub fn new(ch: char) -> Result<Self, SymbolError> {
        if matches!(ch, EMPTY_GLYPH | BLOCKED_GLYPH | WILDCARD_GLYPH | ',') || ch.is_whitespace() {
            return Err(SymbolError::Reserved { ch });
        }
        Ok(Self(ch))
    }

    /// Returns the underlying character.
    #[must_use]
    pub fn as_char(self) -> char {
        self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Symbol {
    type Err = SymbolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(SymbolError::NotSingleChar {
                token: s.to_owned(),
            }),
        }
    }
}

/// Errors from constructing a [`Symbol`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SymbolError {
    /// The character is a sentinel glyph, separator, or whitespace.
    #[display("reserved character cannot be a symbol: {ch:?}")]
    Reserved {
        /// The rejected character.
        ch: char,
    },
    /// The token is not exactly one character long.
    #[display("symbol token must be a single character: {token:?}")]
    NotSingleChar {
        /// The rejected token.
        token: String,
    },
}
