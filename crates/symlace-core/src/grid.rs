//! The square board of cells.

use crate::{Cell, Position};

/// Offsets of the canonical clockwise-from-top-left 3x3 traversal, relative
/// to the block's top-left corner, as `(row_delta, column_delta)` pairs.
///
/// Pattern templates are expressed in this order.
pub const NEIGHBORHOOD_OFFSETS: [(i32, i32); 9] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (-1, 2),
    (-2, 2),
    (-2, 1),
    (-2, 0),
    (-1, 0),
    (-1, 1),
];

/// A square board of [`Cell`]s addressed by 1-based [`Position`]s.
///
/// Cells are stored as a flat sequence with the visually top row first:
/// `(row, column)` maps to index `(size - row) * size + (column - 1)`.
/// The grid is exclusively owned by the puzzle engine; coordinates outside
/// `[1, size]` resolve to `None` rather than an index.
///
/// # Examples
///
/// ```
/// use symlace_core::{Grid, Position, Symbol};
///
/// let mut grid = Grid::new(4).unwrap();
/// assert_eq!(grid.size(), 4);
/// assert_eq!(grid.cell_count(), 16);
///
/// // Row 1 is the bottom row, so (1, 1) is the first cell of the last row
/// assert_eq!(grid.index_of(Position::new(1, 1)), Some(12));
/// assert_eq!(grid.index_of(Position::new(4, 1)), Some(0));
/// assert_eq!(grid.index_of(Position::new(0, 1)), None);
/// assert_eq!(grid.index_of(Position::new(1, 5)), None);
///
/// let q = Symbol::new('Q').unwrap();
/// grid.cell_mut(Position::new(2, 3)).unwrap().set_symbol(q);
/// assert_eq!(grid.cell(Position::new(2, 3)).unwrap().symbol(), Some(q));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid of empty normal cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroSize`] if `size` is zero.
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let count = (size as usize) * (size as usize);
        Ok(Self {
            size,
            cells: vec![Cell::empty(); count],
        })
    }

    /// Creates a grid from pre-built cells, top row first.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroSize`] if `size` is zero, or
    /// [`GridError::CellCountMismatch`] if `cells` is not exactly
    /// `size * size` long.
    pub fn from_cells(size: u32, cells: Vec<Cell>) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::ZeroSize);
        }
        let expected = (size as usize) * (size as usize);
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                size,
                len: cells.len(),
            });
        }
        Ok(Self { size, cells })
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cells as a flat slice, top row first.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Maps a position to its flat index, or `None` if it lies outside the
    /// grid.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> Option<usize> {
        let n = i32::try_from(self.size).ok()?;
        if pos.row < 1 || pos.row > n || pos.column < 1 || pos.column > n {
            return None;
        }
        let index = (n - pos.row) * n + (pos.column - 1);
        usize::try_from(index).ok()
    }

    /// Returns the cell at `pos`, or `None` if out of range.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let index = self.index_of(pos)?;
        self.cells.get(index)
    }

    /// Returns the cell at `pos` mutably, or `None` if out of range.
    #[must_use]
    pub fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let index = self.index_of(pos)?;
        self.cells.get_mut(index)
    }

    /// Reads the display symbols of the 3x3 block whose top-left corner is
    /// `start`, in the canonical clockwise order.
    ///
    /// Returns `None` if any of the 9 positions falls outside the grid; a
    /// block straddling an edge can never match a pattern.
    #[must_use]
    pub fn neighborhood(&self, start: Position) -> Option<[char; 9]> {
        let mut symbols = ['\0'; 9];
        for (slot, (row_delta, column_delta)) in symbols.iter_mut().zip(NEIGHBORHOOD_OFFSETS) {
            let cell = self.cell(start.offset(row_delta, column_delta))?;
            *slot = cell.display_symbol();
        }
        Some(symbols)
    }
}

/// Errors from constructing a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The grid size was zero.
    #[display("grid size must be positive")]
    ZeroSize,
    /// The cell sequence length did not match the grid size.
    #[display("expected {size}x{size} cells, got {len}")]
    CellCountMismatch {
        /// The declared side length.
        size: u32,
        /// The actual number of cells supplied.
        len: usize,
    },
}
