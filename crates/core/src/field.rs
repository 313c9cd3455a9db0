//! Play field - a grid with a permanent wall on the left, right and bottom
//!
//! Coordinates are (row, col) with row 0 at the top. The playable area is
//! rows `0..rows - wall` and columns `wall..cols - wall`; everything else is
//! wall and holds `CELL_OCCUPIED` for the field's lifetime.

use std::ops::Range;

use crate::grid::{Grid, GridError};
use crate::lines::clear_full_lines;
use crate::types::{ARRAY_DX, ARRAY_DY, CELL_OCCUPIED, SCREEN_DW};

/// Field grid plus its wall thickness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayField {
    grid: Grid,
    wall: usize,
}

impl PlayField {
    /// The standard 13x16 field: empty 10x10 playable area, wall thickness 3
    pub fn initial() -> Self {
        Self::walled(ARRAY_DY, ARRAY_DX, SCREEN_DW)
    }

    /// Empty field of the given total size with a wall of `wall` cells
    pub fn walled(rows: usize, cols: usize, wall: usize) -> Self {
        let mut grid = Grid::zeros(rows, cols);
        for y in 0..rows {
            for x in 0..cols {
                if y + wall >= rows || x < wall || x + wall >= cols {
                    grid.set(y, x, CELL_OCCUPIED);
                }
            }
        }
        Self { grid, wall }
    }

    /// Wrap an existing grid, checking that the border is solid
    pub fn from_grid(grid: Grid, wall: usize) -> Result<Self, GridError> {
        let (rows, cols) = grid.shape();
        if rows < wall || cols < 2 * wall {
            return Err(GridError::InvalidDimension {
                rows: rows as i32,
                cols: cols as i32,
            });
        }
        let field = Self { grid, wall };
        for row in 0..rows {
            for col in 0..cols {
                if field.is_wall(row, col) && field.grid.get(row, col) != Some(CELL_OCCUPIED) {
                    return Err(GridError::BrokenWall { row, col });
                }
            }
        }
        Ok(field)
    }

    fn is_wall(&self, row: usize, col: usize) -> bool {
        let (rows, cols) = self.grid.shape();
        row + self.wall >= rows || col < self.wall || col + self.wall >= cols
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn wall(&self) -> usize {
        self.wall
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Rows a piece may occupy
    pub fn playable_rows(&self) -> Range<usize> {
        0..self.grid.rows() - self.wall
    }

    /// Columns a piece may occupy
    pub fn playable_cols(&self) -> Range<usize> {
        self.wall..self.grid.cols() - self.wall
    }

    /// Lock a non-colliding overlay into the field and clear full rows.
    ///
    /// Returns the number of rows removed.
    pub fn commit(&mut self, overlay: &Grid, top: i32, left: i32) -> Result<u32, GridError> {
        self.grid.paste(overlay, top, left)?;
        let (rows, cols) = (self.playable_rows(), self.playable_cols());
        clear_full_lines(&mut self.grid, rows, cols)
    }
}

impl Default for PlayField {
    fn default() -> Self {
        Self::initial()
    }
}
