//! Board coordinates.

use std::fmt::{self, Display};

/// A 1-based board coordinate.
///
/// Row 1 is the bottom row and column 1 is the leftmost column, matching the
/// coordinates players type at the prompt. Values outside the board are
/// representable; [`Grid`](crate::Grid) rejects them when resolving cells.
///
/// # Examples
///
/// ```
/// use symlace_core::Position;
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.offset(-1, 2), Position::new(1, 5));
/// assert_eq!(pos.to_string(), "(2, 3)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Row number, counted from the bottom of the board.
    pub row: i32,
    /// Column number, counted from the left of the board.
    pub column: i32,
}

impl Position {
    /// Creates a position from a row and column number.
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Returns this position shifted by a row and column delta.
    #[must_use]
    pub const fn offset(self, row_delta: i32, column_delta: i32) -> Self {
        Self {
            row: self.row + row_delta,
            column: self.column + column_delta,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
