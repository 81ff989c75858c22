//! ASCII board rendering.

use std::fmt::Write as _;

use symlace_core::Grid;

/// Renders the grid as a bordered character table.
///
/// Column indices above and row indices on the left (top row is row `size`,
/// bottom row is row 1) are shown only when the grid size is below 10, since
/// wider indices would break the two-characters-per-cell layout.
pub fn draw(grid: &Grid) -> String {
    let size = grid.size() as usize;
    let show_indices = grid.size() < 10;
    let rule = format!("  {}", "-".repeat(2 * size + 1));
    let mut out = String::new();

    if show_indices {
        out.push_str("  ");
        for column in 1..=size {
            let _ = write!(out, " {column}");
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{rule}");

    for (row_index, row) in grid.cells().chunks(size).enumerate() {
        if show_indices {
            let _ = write!(out, "{} ", size - row_index);
        } else {
            out.push_str("  ");
        }
        for cell in row {
            out.push('|');
            out.push(cell.display_symbol());
        }
        out.push_str("|\n");
        let _ = writeln!(out, "{rule}");
    }
    out
}
