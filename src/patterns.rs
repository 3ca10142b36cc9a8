// patterns.rs - Seed patterns and random fills

use log::debug;
use rand::Rng;

use crate::error::{LifeError, Result};
use crate::grid::Grid;

/// A named set of live `(row, col)` cells, laid out for an 80x80 grid.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(11, 12), (12, 13), (13, 11), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(40, 39), (40, 40), (40, 41)],
    },
    Pattern {
        name: "Toad",
        cells: &[(39, 40), (39, 41), (39, 42), (40, 39), (40, 40), (40, 41)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(10, 10), (10, 11), (11, 10), (11, 11), (12, 12), (12, 13), (13, 12), (13, 13)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (34, 36), (34, 37), (34, 38), (34, 42), (34, 43), (34, 44),
            (36, 34), (36, 39), (36, 41), (36, 46),
            (37, 34), (37, 39), (37, 41), (37, 46),
            (38, 34), (38, 39), (38, 41), (38, 46),
            (39, 36), (39, 37), (39, 38), (39, 42), (39, 43), (39, 44),
            // Bottom half (mirrored)
            (41, 36), (41, 37), (41, 38), (41, 42), (41, 43), (41, 44),
            (42, 34), (42, 39), (42, 41), (42, 46),
            (43, 34), (43, 39), (43, 41), (43, 46),
            (44, 34), (44, 39), (44, 41), (44, 46),
            (46, 36), (46, 37), (46, 38), (46, 42), (46, 43), (46, 44),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(39, 40), (39, 41), (40, 39), (40, 40), (41, 40)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (5, 1), (5, 2), (6, 1), (6, 2),
            (5, 11), (6, 11), (7, 11), (4, 12), (8, 12), (3, 13), (9, 13),
            (3, 14), (9, 14), (6, 15), (4, 16), (8, 16), (5, 17), (6, 17),
            (7, 17), (6, 18), (3, 21), (4, 21), (5, 21), (3, 22), (4, 22),
            (5, 22), (2, 23), (6, 23), (1, 25), (2, 25), (6, 25), (7, 25),
            (3, 35), (4, 35), (3, 36), (4, 36),
        ],
    },
];

/// The pattern installed at startup.
pub const DEFAULT_PATTERN: &Pattern = &PATTERNS[0];

/// Case-insensitive lookup of a pattern's position in [`PATTERNS`].
pub fn index_of(name: &str) -> Result<usize> {
    PATTERNS
        .iter()
        .position(|pattern| pattern.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Result<&'static Pattern> {
    index_of(name).map(|index| &PATTERNS[index])
}

/// Index of the pattern after `index`, wrapping around the catalogue.
pub fn next_index(index: usize) -> usize {
    (index + 1) % PATTERNS.len()
}

/// Clears the grid and installs `pattern`.
///
/// Cells that fall outside a grid smaller than 80x80 are dropped. Returns the
/// number of cells placed.
pub fn apply_pattern(grid: &mut Grid, pattern: &Pattern) -> Result<usize> {
    let cells: Vec<_> = pattern
        .cells
        .iter()
        .copied()
        .filter(|&(row, col)| row < grid.height() && col < grid.width())
        .collect();

    let dropped = pattern.cells.len() - cells.len();
    if dropped > 0 {
        debug!("{}: {dropped} cells fall outside the grid", pattern.name);
    }

    grid.seed(&cells)?;
    Ok(cells.len())
}

/// Clears the grid, then brings each cell to life with probability `density`.
pub fn fill_random<R: Rng + ?Sized>(grid: &mut Grid, density: f64, rng: &mut R) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(LifeError::InvalidDensity(density));
    }

    grid.clear();
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            if rng.gen_bool(density) {
                grid.set_cell(row, col, true)?;
            }
        }
    }
    Ok(())
}
