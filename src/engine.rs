mod rules;
#[cfg(test)]
mod tests;

pub use rules::{next_state, Transition};

use crate::{Cell, Grid, LifeError, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// How a generation is computed; both modes give identical grids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionMode {
    #[default]
    Serial,
    /// One rayon task per column.
    Parallel,
}

/// `coord + delta` modulo `len`, never negative.
fn wrap(coord: usize, delta: isize, len: usize) -> usize {
    (coord as isize + delta).rem_euclid(len as isize) as usize
}

/// Neighbour count for in-bounds coordinates.
fn count_neibs(grid: &Grid, x: usize, y: usize) -> u8 {
    let (cols, rows) = (grid.cols(), grid.rows());
    NEIGHBOUR_OFFSETS
        .iter()
        .map(|&(dx, dy)| grid.cell(wrap(x, dx, cols), wrap(y, dy, rows)) as u8)
        .sum()
}

/// Number of live cells among the 8 toroidal neighbours of `(x, y)`.
///
/// On axes of length 1 or 2 several offsets land on the same cell;
/// each offset is counted separately.
pub fn neighbour_sum(grid: &Grid, x: usize, y: usize) -> Result<u8> {
    if x >= grid.cols() || y >= grid.rows() {
        return Err(LifeError::Index {
            x,
            y,
            cols: grid.cols(),
            rows: grid.rows(),
        });
    }
    Ok(count_neibs(grid, x, y))
}

fn update_column(current: &Grid, x: usize, column: &mut [Cell]) {
    for (y, dst) in column.iter_mut().enumerate() {
        *dst = next_state(current.cell(x, y), count_neibs(current, x, y));
    }
}

/// Writes the generation following `current` into `next`, overwriting every cell.
///
/// `next` must have the same dimensions as `current`.
pub fn step_into(current: &Grid, next: &mut Grid, mode: ExecutionMode) -> Result<()> {
    if !current.same_shape(next) {
        return Err(LifeError::Configuration(format!(
            "cannot step a {}x{} grid into a {}x{} one",
            current.cols(),
            current.rows(),
            next.cols(),
            next.rows()
        )));
    }
    match mode {
        ExecutionMode::Serial => {
            for (x, column) in next.columns_mut().enumerate() {
                update_column(current, x, column);
            }
        }
        ExecutionMode::Parallel => {
            next.par_columns_mut()
                .enumerate()
                .for_each(|(x, column)| update_column(current, x, column));
        }
    }
    Ok(())
}

/// Computes the next generation as a new grid; `current` is left untouched.
pub fn step(current: &Grid) -> Grid {
    let mut next = current.clone();
    for (x, column) in next.columns_mut().enumerate() {
        update_column(current, x, column);
    }
    next
}

/// Holds the current generation and advances it.
///
/// Two buffers are kept and swapped after every step, so no allocation
/// happens while the simulation runs.
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
    seed: Option<u64>,
    mode: ExecutionMode,
}

impl Simulation {
    /// Random initial state.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn initialize(cols: usize, rows: usize, seed: Option<u64>) -> Result<Self> {
        let seed = seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = Grid::random(cols, rows, &mut rng)?;
        log::info!(
            "initialized {cols}x{rows} grid with seed {seed}, population {}",
            grid.population()
        );
        let mut simulation = Self::from_grid(grid);
        simulation.seed = Some(seed);
        Ok(simulation)
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            next: grid.clone(),
            current: grid,
            generation: 0,
            seed: None,
            mode: ExecutionMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ExecutionMode) {
        self.mode = mode;
    }

    /// Seed the initial grid was drawn from, if it was random.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn into_grid(self) -> Grid {
        self.current
    }

    pub fn cell_state(&self, x: usize, y: usize) -> Result<Cell> {
        self.current.get(x, y)
    }

    /// Advances one generation.
    pub fn step(&mut self) -> Result<()> {
        step_into(&self.current, &mut self.next, self.mode)?;
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        log::trace!(
            "generation {}: population {}",
            self.generation,
            self.current.population()
        );
        Ok(())
    }

    /// Advances `n` generations.
    pub fn advance(&mut self, n: u64) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }
}
