// grid.rs - Growable grid for Conway's Game of Life

use crate::error::{LifeError, Result};

pub type Row = Vec<bool>;

/// A signed grid position. May sit one step outside the grid when scanning
/// for growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    pub fn offset(self, (d_row, d_col): (isize, isize)) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row as isize, col as isize)
    }
}

/// Dense rectangular grid of cells. Always at least 1x1; only ever grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Row>,
    column_count: usize,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            cells: vec![vec![false; cols]; rows],
            column_count: cols,
        })
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// True when `coord` addresses a real cell.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.row_count()
            && (coord.col as usize) < self.column_count
    }

    /// Cell state at `coord`, treating everything outside the grid as dead.
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.contains(coord) && self.cells[coord.row as usize][coord.col as usize]
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        self.check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        self.check(row, col)?;
        self.cells[row][col] = alive;
        Ok(())
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.check(row, col)?;
        self.cells[row][col] = !self.cells[row][col];
        Ok(())
    }

    /// Inserts `row` before the existing row at `index`.
    pub fn insert_row(&mut self, index: usize, row: Row) -> Result<()> {
        if index >= self.row_count() {
            return Err(LifeError::RowIndexOutOfBounds {
                index,
                rows: self.row_count(),
            });
        }
        self.check_width(&row)?;
        self.cells.insert(index, row);
        Ok(())
    }

    pub fn append_row(&mut self, row: Row) -> Result<()> {
        self.check_width(&row)?;
        self.cells.push(row);
        Ok(())
    }

    /// Grows every row by one dead cell at column 0.
    pub fn insert_column_at_start(&mut self) {
        for row in &mut self.cells {
            row.insert(0, false);
        }
        self.column_count += 1;
    }

    /// Grows every row by one dead cell at the end.
    pub fn append_column(&mut self) {
        for row in &mut self.cells {
            row.push(false);
        }
        self.column_count += 1;
    }

    /// A dead row matching the current width.
    pub fn dead_row(&self) -> Row {
        vec![false; self.column_count]
    }

    /// Kills every cell, keeping the current dimensions.
    pub fn reinitialize(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    /// Grows `self` until it covers `other`'s shape, then copies every cell.
    /// Cells of `self` beyond `other`'s extent end up dead.
    pub fn copy_from(&mut self, other: &Grid) {
        self.grow_to(other.row_count(), other.column_count());
        let width = other.column_count();
        for (index, dst) in self.cells.iter_mut().enumerate() {
            match other.cells.get(index) {
                Some(src) => {
                    dst[..width].copy_from_slice(src);
                    dst[width..].fill(false);
                }
                None => dst.fill(false),
            }
        }
    }

    /// Appends dead rows/columns until the grid is at least `rows` x `cols`.
    pub fn grow_to(&mut self, rows: usize, cols: usize) {
        while self.column_count < cols {
            self.append_column();
        }
        while self.row_count() < rows {
            let row = self.dead_row();
            self.cells.push(row);
        }
    }

    pub fn row(&self, index: usize) -> Option<&[bool]> {
        self.cells.get(index).map(Vec::as_slice)
    }

    /// Read-only view of the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.iter().map(Vec::as_slice)
    }

    pub fn population(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    fn check(&self, row: usize, col: usize) -> Result<()> {
        if row < self.row_count() && col < self.column_count {
            Ok(())
        } else {
            Err(LifeError::OutOfBounds {
                row: row as isize,
                col: col as isize,
                rows: self.row_count(),
                cols: self.column_count,
            })
        }
    }

    fn check_width(&self, row: &Row) -> Result<()> {
        if row.len() == self.column_count {
            Ok(())
        } else {
            Err(LifeError::RowWidthMismatch {
                expected: self.column_count,
                got: row.len(),
            })
        }
    }
}
