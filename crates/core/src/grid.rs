//! Grid module - the integer matrix used for the field, the pieces and overlays
//!
//! A `Grid` owns one flat `Vec<i32>` in row-major order (`row * cols + col`).
//! Every region operation validates its full bounds before touching any cell,
//! so a failed `clip` returns nothing and a failed `paste` leaves the receiver
//! untouched.
//!
//! Requested dimensions and offsets are `i32`: pieces are positioned with
//! signed offsets and a negative request has to be representable to be
//! rejected.

use std::cell::Cell;
use std::fmt;

use thiserror::Error;

/// Errors raised by grid operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid dimension {rows}x{cols}")]
    InvalidDimension { rows: i32, cols: i32 },

    #[error("invalid matrix range [{top},{left})..[{bottom},{right}) for {rows}x{cols} grid")]
    OutOfRange {
        top: i32,
        left: i32,
        bottom: i32,
        right: i32,
        rows: usize,
        cols: usize,
    },

    #[error("dimension mismatch: {left:?} vs {right:?}")]
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("source holds {actual} values, expected {expected}")]
    SourceLength { expected: usize, actual: usize },

    #[error("wall cell ({row},{col}) is not solid")]
    BrokenWall { row: usize, col: usize },

    #[error("cell ({row},{col}) overflows i32")]
    Overflow { row: usize, col: usize },
}

thread_local! {
    static CREATED: Cell<usize> = const { Cell::new(0) };
    static RELEASED: Cell<usize> = const { Cell::new(0) };
}

/// Grid allocation/release counts for the current thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridAudit {
    pub created: usize,
    pub released: usize,
}

impl GridAudit {
    /// Grids still alive on this thread
    pub fn live(&self) -> usize {
        self.created.saturating_sub(self.released)
    }

    pub fn is_balanced(&self) -> bool {
        self.created == self.released
    }
}

/// Snapshot of the per-thread grid counters.
///
/// Counters are per thread so that concurrent tests do not see each other.
pub fn audit() -> GridAudit {
    GridAudit {
        created: CREATED.with(Cell::get),
        released: RELEASED.with(Cell::get),
    }
}

fn note_created() {
    CREATED.with(|c| c.set(c.get() + 1));
}

/// Rectangular integer matrix
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<i32>,
}

impl Grid {
    /// Create a zero-filled grid, rejecting negative dimensions
    pub fn new(rows: i32, cols: i32) -> Result<Self, GridError> {
        if rows < 0 || cols < 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self::zeros(rows as usize, cols as usize))
    }

    /// Create a zero-filled grid
    pub fn zeros(rows: usize, cols: usize) -> Self {
        note_created();
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Create a grid from row-major values
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_core::Grid;
    ///
    /// let g = Grid::from_slice(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
    /// assert_eq!(g.get(1, 0), Some(4));
    /// assert!(Grid::from_slice(2, 2, &[1, 2, 3]).is_err());
    /// ```
    pub fn from_slice(rows: i32, cols: i32, values: &[i32]) -> Result<Self, GridError> {
        if rows < 0 || cols < 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        let expected = rows as usize * cols as usize;
        if values.len() != expected {
            return Err(GridError::SourceLength {
                expected,
                actual: values.len(),
            });
        }
        note_created();
        Ok(Self {
            rows: rows as usize,
            cols: cols as usize,
            cells: values.to_vec(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major cell storage
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Cell at (row, col), or None when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: i32) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> Option<&[i32]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        Some(&self.cells[start..start + self.cols])
    }

    fn row_slice(&self, row: usize) -> &[i32] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [i32] {
        let start = row * self.cols;
        &mut self.cells[start..start + self.cols]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [i32] {
        &mut self.cells
    }

    /// Check that the rectangle [top, bottom) x [left, right) lies inside the grid
    fn check_region(&self, top: i32, left: i32, bottom: i32, right: i32) -> Result<(), GridError> {
        let out = top < 0
            || left < 0
            || bottom as i64 > self.rows as i64
            || right as i64 > self.cols as i64;
        if out {
            return Err(GridError::OutOfRange {
                top,
                left,
                bottom,
                right,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Extract the sub-region [top, bottom) x [left, right) into a new grid
    pub fn clip(&self, top: i32, left: i32, bottom: i32, right: i32) -> Result<Grid, GridError> {
        if bottom < top || right < left {
            return Err(GridError::InvalidDimension {
                rows: bottom.saturating_sub(top),
                cols: right.saturating_sub(left),
            });
        }
        self.check_region(top, left, bottom, right)?;

        // In range, so both extents fit the grid.
        let (rows, cols) = ((bottom - top) as usize, (right - left) as usize);
        if rows == 0 || cols == 0 {
            return Ok(Grid::zeros(rows, cols));
        }

        let mut out = Grid::zeros(rows, cols);
        for y in 0..rows {
            let src = (top as usize + y) * self.cols + left as usize;
            out.row_mut(y).copy_from_slice(&self.cells[src..src + cols]);
        }
        Ok(out)
    }

    /// Overwrite the region at (top, left) with `source`
    pub fn paste(&mut self, source: &Grid, top: i32, left: i32) -> Result<(), GridError> {
        if source.rows == 0 || source.cols == 0 {
            return Ok(());
        }
        let bottom = top.saturating_add(source.rows as i32);
        let right = left.saturating_add(source.cols as i32);
        self.check_region(top, left, bottom, right)?;

        for y in 0..source.rows {
            let dst = (top as usize + y) * self.cols + left as usize;
            let src = source.row_slice(y);
            self.cells[dst..dst + source.cols].copy_from_slice(src);
        }
        Ok(())
    }

    /// Elementwise sum into a new grid.
    ///
    /// Fails with `Overflow` instead of wrapping.
    pub fn add(&self, other: &Grid) -> Result<Grid, GridError> {
        if self.shape() != other.shape() {
            return Err(GridError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut out = Grid::zeros(self.rows, self.cols);
        for (i, (dst, (a, b))) in out
            .cells
            .iter_mut()
            .zip(self.cells.iter().zip(other.cells.iter()))
            .enumerate()
        {
            *dst = a.checked_add(*b).ok_or_else(|| self.overflow_at(i))?;
        }
        Ok(out)
    }

    /// Sum of all cells
    pub fn sum(&self) -> i64 {
        self.cells.iter().map(|&c| c as i64).sum()
    }

    /// True if any cell exceeds `threshold`
    pub fn any_greater_than(&self, threshold: i32) -> bool {
        self.cells.iter().any(|&c| c > threshold)
    }

    /// Multiply every cell by `coef` in place.
    ///
    /// On overflow nothing is written and `Overflow` names the first cell.
    pub fn scale(&mut self, coef: i32) -> Result<(), GridError> {
        if let Some(i) = self.cells.iter().position(|c| c.checked_mul(coef).is_none()) {
            return Err(self.overflow_at(i));
        }
        for cell in &mut self.cells {
            *cell *= coef;
        }
        Ok(())
    }

    fn overflow_at(&self, index: usize) -> GridError {
        GridError::Overflow {
            row: index / self.cols,
            col: index % self.cols,
        }
    }

    /// New grid with 1 where this grid is nonzero, 0 elsewhere
    pub fn to_mask(&self) -> Grid {
        let mut out = Grid::zeros(self.rows, self.cols);
        for (dst, &src) in out.cells.iter_mut().zip(self.cells.iter()) {
            *dst = i32::from(src != 0);
        }
        out
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        note_created();
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    /// Assignment keeps this grid's identity (no new grid is counted) and
    /// reuses its buffer when it is large enough.
    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.cells.clone_from(&source.cells);
    }
}

impl Drop for Grid {
    fn drop(&mut self) {
        RELEASED.with(|c| c.set(c.get() + 1));
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid({},{})", self.rows, self.cols)?;
        for y in 0..self.rows {
            for (x, value) in self.row_slice(y).iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
