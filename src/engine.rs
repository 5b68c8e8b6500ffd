//! Game of Life simulation on a toroidal grid
//!
//! The engine owns the grid and knows nothing about terminals or timing.
//! Every mutation goes through `step`, `randomize`, `clear`, `set_cell` or `stamp`.

use crate::error::LifeError;
use crate::patterns::Pattern;
use log::debug;
use rand::prelude::*;

/// Probability of a cell being alive after `randomize`
const RANDOM_DENSITY: f64 = 0.5;

/// Largest grid, in cells, that `Engine::new` will allocate
pub const MAX_CELLS: u64 = 1 << 24;

/// Offsets of the 8 cells surrounding a cell
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

pub struct Engine {
    width: usize,
    height: usize,
    grid: Vec<Vec<bool>>,
    next_grid: Vec<Vec<bool>>,
    generation: u64,
}

impl Engine {
    /// Create a `width` x `height` grid filled by `randomize(seed)`
    pub fn new(width: usize, height: usize, seed: Option<u64>) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimension {
                width: width as i64,
                height: height as i64,
            });
        }
        let cells = (width as u64).checked_mul(height as u64);
        if cells.map_or(true, |n| n > MAX_CELLS) {
            return Err(LifeError::GridTooLarge {
                width: width as i64,
                height: height as i64,
                max: MAX_CELLS,
            });
        }

        let mut engine = Self {
            width,
            height,
            grid: vec![vec![false; width]; height],
            next_grid: vec![vec![false; width]; height],
            generation: 0,
        };
        engine.randomize(seed);
        Ok(engine)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of `step` calls since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Read-only view of the grid, indexed `[y][x]`
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.grid
    }

    /// Count of living cells
    pub fn population(&self) -> usize {
        self.grid
            .iter()
            .map(|row| row.iter().filter(|&&alive| alive).count())
            .sum()
    }

    pub fn get_cell(&self, x: usize, y: usize) -> Result<bool, LifeError> {
        self.check_bounds(x, y)?;
        Ok(self.grid[y][x])
    }

    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) -> Result<(), LifeError> {
        self.check_bounds(x, y)?;
        self.grid[y][x] = alive;
        Ok(())
    }

    /// Living cells among the 8 neighbors of (x, y), wrapping at the edges
    pub fn neighbors(&self, x: usize, y: usize) -> Result<u8, LifeError> {
        self.check_bounds(x, y)?;
        Ok(self.count_neighbors(x, y))
    }

    /// Advance one generation using B3/S23.
    ///
    /// The next state is computed entirely from the current grid into a back
    /// buffer, then the buffers are swapped.
    pub fn step(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let alive = self.grid[y][x];
                let neighbors = self.count_neighbors(x, y);
                self.next_grid[y][x] =
                    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
            }
        }

        std::mem::swap(&mut self.grid, &mut self.next_grid);
        self.generation += 1;
    }

    /// Refill every cell with a fair coin flip.
    ///
    /// A seed always reproduces the same grid: the generator is rebuilt from
    /// it and cells are drawn in row-major order. Without a seed the
    /// generator comes from OS entropy. The generation counter is untouched.
    pub fn randomize(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        for row in &mut self.grid {
            for cell in row.iter_mut() {
                *cell = rng.gen_bool(RANDOM_DENSITY);
            }
        }
        debug!("randomized {}x{} grid (seed: {:?})", self.width, self.height, seed);
    }

    /// Kill every cell. The generation counter is untouched.
    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(false);
        }
    }

    /// Bring the cells of `pattern` to life with its top-left corner at
    /// (x, y). Cells past an edge wrap around to the opposite side.
    pub fn stamp(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for &(dx, dy) in pattern.cells {
            let cx = (x + dx) % self.width;
            let cy = (y + dy) % self.height;
            self.grid[cy][cx] = true;
        }
        debug!("stamped {} at ({}, {})", pattern.name, x, y);
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), LifeError> {
        if x >= self.width || y >= self.height {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    #[inline]
    fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as i64;
        let h = self.height as i64;
        let mut count = 0u8;
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let nx = (x as i64 + dx).rem_euclid(w) as usize;
            let ny = (y as i64 + dy).rem_euclid(h) as usize;
            if self.grid[ny][nx] {
                count += 1;
            }
        }
        count
    }
}
