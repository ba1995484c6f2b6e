use crate::{LifeError, Pattern, Result};
use rand::Rng;
use rayon::prelude::*;
use std::fmt;

/// State of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell as u8
    }
}

impl TryFrom<u8> for Cell {
    type Error = LifeError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            _ => Err(LifeError::Configuration(format!(
                "cell state must be 0 or 1, got {value}"
            ))),
        }
    }
}

/// Fixed-size field of cells whose opposite edges are stitched together.
///
/// Cells are addressed as `[x][y]` with `0 <= x < cols` and `0 <= y < rows`.
/// The buffer is stored column by column, so one column is a contiguous slice.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cols: usize,
    rows: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid where every cell is dead.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(LifeError::Configuration(format!(
                "grid dimensions must be positive, got {cols}x{rows}"
            )));
        }
        // a buffer may span at most `isize::MAX` bytes
        let size = cols
            .checked_mul(rows)
            .filter(|&size| size <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or_else(|| {
                LifeError::Configuration(format!("grid {cols}x{rows} does not fit in memory"))
            })?;
        Ok(Self {
            cols,
            rows,
            cells: vec![Cell::Dead; size],
        })
    }

    /// Creates a grid where each cell is independently alive with probability 1/2.
    pub fn random<R: Rng + ?Sized>(cols: usize, rows: usize, rng: &mut R) -> Result<Self> {
        let mut grid = Self::new(cols, rows)?;
        for cell in grid.cells.iter_mut() {
            *cell = Cell::from(rng.gen_bool(0.5));
        }
        Ok(grid)
    }

    /// Creates a grid with exactly the given cells alive.
    pub fn from_live_cells<I>(cols: usize, rows: usize, live: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(cols, rows)?;
        for (x, y) in live {
            grid.set(x, y, Cell::Alive)?;
        }
        Ok(grid)
    }

    /// Creates a blank grid with `pattern` stamped at its center.
    pub fn from_pattern(cols: usize, rows: usize, pattern: &Pattern) -> Result<Self> {
        let mut grid = Self::new(cols, rows)?;
        let x0 = (cols / 2).saturating_sub(pattern.width() / 2);
        let y0 = (rows / 2).saturating_sub(pattern.height() / 2);
        grid.stamp(pattern, x0, y0);
        Ok(grid)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Cell> {
        self.check_bounds(x, y)?;
        Ok(self.cell(x, y))
    }

    pub fn set(&mut self, x: usize, y: usize, state: Cell) -> Result<()> {
        self.check_bounds(x, y)?;
        let idx = self.index(x, y);
        self.cells[idx] = state;
        Ok(())
    }

    /// Sets the live cells of `pattern` with its top left corner at `(x0, y0)`.
    ///
    /// Parts of the pattern that cross an edge reappear on the opposite side.
    /// Dead cells of the pattern leave the grid untouched.
    pub fn stamp(&mut self, pattern: &Pattern, x0: usize, y0: usize) {
        for &(dx, dy) in pattern.live_cells() {
            let x = (x0 % self.cols + dx % self.cols) % self.cols;
            let y = (y0 % self.rows + dy % self.rows) % self.rows;
            let idx = self.index(x, y);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of alive cells, column by column.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let rows = self.rows;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(move |(i, _)| (i / rows, i % rows))
    }

    /// Unchecked read; callers pass coordinates that are already wrapped.
    pub(crate) fn cell(&self, x: usize, y: usize) -> Cell {
        debug_assert!(x < self.cols && y < self.rows);
        self.cells[self.index(x, y)]
    }

    /// Mutable columns of the buffer, `x`-th slice holds column `x`.
    pub(crate) fn columns_mut(&mut self) -> std::slice::ChunksExactMut<'_, Cell> {
        self.cells.chunks_exact_mut(self.rows)
    }

    /// Parallel version of [`Grid::columns_mut`].
    pub(crate) fn par_columns_mut(&mut self) -> rayon::slice::ChunksExactMut<'_, Cell> {
        self.cells.par_chunks_exact_mut(self.rows)
    }

    pub(crate) fn same_shape(&self, other: &Grid) -> bool {
        self.cols == other.cols && self.rows == other.rows
    }

    fn index(&self, x: usize, y: usize) -> usize {
        x * self.rows + y
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x < self.cols && y < self.rows {
            Ok(())
        } else {
            Err(LifeError::Index {
                x,
                y,
                cols: self.cols,
                rows: self.rows,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.rows {
            for x in 0..self.cols {
                let c = if self.cell(x, y).is_alive() { 'O' } else { '.' };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.cols, self.rows)?;
        write!(f, "{self}")
    }
}
