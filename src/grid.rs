// grid.rs - Automaton engine for Conway's Game of Life

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{LifeError, Result};

/// Dead cells kept on every side of the active area.
const BORDER: usize = 1;

/// Two generation buffers over a fixed `width x height` playing area.
///
/// Each buffer is padded with a permanently dead border, so the active area
/// of a buffer runs from `(1, 1)` to `(height, width)` and neighbour reads
/// never leave the allocation. The border is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    current: Vec<bool>,
    previous: Vec<bool>,
    generation: u64,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        let total = (width + 2 * BORDER) * (height + 2 * BORDER);
        Ok(Self {
            width,
            height,
            current: vec![false; total],
            previous: vec![false; total],
            generation: 0,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Steps applied since the grid was last cleared or seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn stride(&self) -> usize {
        self.width + 2 * BORDER
    }

    fn index(&self, row: usize, col: usize) -> usize {
        (row + BORDER) * self.stride() + col + BORDER
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.height && col < self.width {
            Ok(self.index(row, col))
        } else {
            Err(LifeError::OutOfRange {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// State of a cell, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.checked_index(row, col).ok().map(|idx| self.current[idx])
    }

    /// Like [`Grid::get`], with everything outside the grid reading as dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.current[idx] = alive;
        Ok(())
    }

    /// Flips one cell of the current generation and returns its new state.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        self.current[idx] = !self.current[idx];
        Ok(self.current[idx])
    }

    /// Kills every cell in both buffers.
    pub fn clear(&mut self) {
        self.current.fill(false);
        self.previous.fill(false);
        self.generation = 0;
    }

    /// Clears the grid and brings the given `(row, col)` cells to life.
    ///
    /// Coordinates are validated up front; on error the grid is untouched.
    pub fn seed(&mut self, cells: &[(usize, usize)]) -> Result<()> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.checked_index(row, col))
            .collect::<Result<Vec<_>>>()?;

        self.clear();
        for idx in indices {
            self.current[idx] = true;
        }
        Ok(())
    }

    /// Advances the grid by one generation.
    ///
    /// The current generation is first snapshotted into `previous`; every
    /// neighbour count reads the snapshot and every write goes to `current`.
    pub fn step(&mut self) {
        self.previous.copy_from_slice(&self.current);

        let stride = self.stride();
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let count = live_neighbours(&self.previous, idx, stride);

                let cell = &mut self.current[idx];
                *cell = match (*cell, count) {
                    (true, 2) | (true, 3) => true, // Survival
                    (false, 3) => true,            // Birth
                    _ => false,                    // Death or stays dead
                };
            }
        }

        self.generation += 1;
    }

    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.current.contains(&true)
    }

    /// Live cells of the current generation in row-major order.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width)
                .filter(move |&col| self.current[self.index(row, col)])
                .map(move |col| (row, col))
        })
    }

    /// Hash of the current generation, used to spot repeating states.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.current.hash(&mut hasher);
        hasher.finish()
    }
}

/// Counts live cells among the 8 neighbours of a padded-buffer index.
fn live_neighbours(cells: &[bool], idx: usize, stride: usize) -> u8 {
    let above = idx - stride;
    let below = idx + stride;
    let neighbours = [
        above - 1, above, above + 1,
        idx - 1,          idx + 1,
        below - 1, below, below + 1,
    ];

    neighbours.iter().filter(|&&n| cells[n]).count() as u8
}
