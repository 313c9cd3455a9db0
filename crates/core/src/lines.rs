//! Line clearing
//!
//! Rows of the playable region are scanned from the bottom up. A full row is
//! removed by shifting every row above it down by one and emptying the top
//! playable row; the same index is then checked again, since new content has
//! moved into it. Only the playable columns move; the walls stay put.

use std::ops::Range;

use crate::grid::{Grid, GridError};
use crate::types::{CELL_EMPTY, CELL_OCCUPIED};

/// True if every cell of `row` within `cols` holds `CELL_OCCUPIED`.
///
/// Decorative codes do not count toward fullness. A row or column range
/// outside the grid is never full.
pub fn is_row_full(grid: &Grid, row: usize, cols: Range<usize>) -> bool {
    match grid.row(row).and_then(|cells| cells.get(cols)) {
        Some(cells) => cells.iter().all(|&c| c == CELL_OCCUPIED),
        None => false,
    }
}

/// Clear all full rows inside `rows` x `cols` and return how many were removed
pub fn clear_full_lines(
    grid: &mut Grid,
    rows: Range<usize>,
    cols: Range<usize>,
) -> Result<u32, GridError> {
    let inverted = rows.start > rows.end || cols.start > cols.end;
    if inverted || rows.end > grid.rows() || cols.end > grid.cols() {
        return Err(GridError::OutOfRange {
            top: rows.start as i32,
            left: cols.start as i32,
            bottom: rows.end as i32,
            right: cols.end as i32,
            rows: grid.rows(),
            cols: grid.cols(),
        });
    }
    if rows.is_empty() || cols.is_empty() {
        return Ok(0);
    }

    let width = grid.cols();
    let mut cleared = 0;
    let mut line = rows.end;

    while line > rows.start {
        let y = line - 1;
        if !is_row_full(grid, y, cols.clone()) {
            line -= 1;
            continue;
        }

        // Shift rows [rows.start, y) down by one, column range only.
        let cells = grid.cells_mut();
        for row in (rows.start + 1..=y).rev() {
            let src = (row - 1) * width + cols.start;
            let dst = row * width + cols.start;
            cells.copy_within(src..src + cols.len(), dst);
        }

        let top = rows.start * width;
        cells[top + cols.start..top + cols.end].fill(CELL_EMPTY);
        cleared += 1;
    }

    Ok(cleared)
}
