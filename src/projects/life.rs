#![deny(clippy::all)]
#![forbid(unsafe_code)]

use log::{debug, warn};

use crate::auxiliary::randomizer::IndexSource;
use crate::error::{LifeError, Result};
use crate::traits_and_structs::{Cell, Grid, LifeEngine};

pub const GRID_ROWS: usize = 20;
pub const GRID_COLUMNS: usize = 20;
/// Positions drawn (with replacement) each time the grid is repopulated.
pub const REPOPULATION_COUNT: usize = 60;

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Conway's B3/S23 rules on a bounded grid, with a population floor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassicLife {
    rows: usize,
    columns: usize,
    repopulation_count: usize,
}

impl Default for ClassicLife {
    fn default() -> Self {
        Self {
            rows: GRID_ROWS,
            columns: GRID_COLUMNS,
            repopulation_count: REPOPULATION_COUNT,
        }
    }
}

impl ClassicLife {
    pub fn with_dimensions(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::Empty { rows, columns });
        }
        if rows.checked_mul(columns).is_none() {
            return Err(LifeError::TooLarge { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            ..Self::default()
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn repopulation_count(&self) -> usize {
        self.repopulation_count
    }

    fn repopulate(&self, grid: &mut Grid, source: &mut dyn IndexSource) {
        for _ in 0..self.repopulation_count {
            let row = source.next_index(grid.rows());
            let col = source.next_index(grid.columns());
            if !grid.set(row, col, Cell::ALIVE) {
                debug!("index source picked ({row}, {col}) outside the grid");
            }
        }
    }
}

impl LifeEngine for ClassicLife {
    fn create_grid(&self) -> Grid {
        Grid::from_cells(
            vec![Cell::DEAD; self.rows * self.columns],
            self.rows,
            self.columns,
        )
    }

    fn compute_next_generation(&self, current: &Grid) -> Grid {
        let mut cells = Vec::with_capacity(current.cells().len());
        for row in 0..current.rows() {
            for col in 0..current.columns() {
                let neighbors = self.count_alive_neighbors(current, row, col);
                let cell = current.get(row, col).unwrap_or_default();
                cells.push(Cell::new(self.compute_next_state(cell, neighbors)));
            }
        }
        Grid::from_cells(cells, current.rows(), current.columns())
    }

    fn count_alive_neighbors(&self, grid: &Grid, row: usize, col: usize) -> usize {
        // Coordinates past isize::MAX are off any grid that fits in memory.
        let (Ok(row), Ok(col)) = (isize::try_from(row), isize::try_from(col)) else {
            return 0;
        };
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                self.is_neighbor_alive(grid, row.wrapping_add(dr), col.wrapping_add(dc))
            })
            .count()
    }

    fn is_neighbor_alive(&self, grid: &Grid, row: isize, col: isize) -> bool {
        grid.get(row, col).is_some_and(Cell::alive)
    }

    fn compute_next_state(&self, current: Cell, alive_neighbors: usize) -> bool {
        current.next_state(alive_neighbors).alive()
    }

    fn enforce_population_floor(&self, mut grid: Grid, source: &mut dyn IndexSource) -> Grid {
        let minimum = self.minimum_alive(&grid);
        let before = self.count_alive(&grid);
        if before < minimum {
            self.repopulate(&mut grid, source);
            warn!(
                "Population low ({} < {}). Repopulated grid to {} live cells.",
                before,
                minimum,
                self.count_alive(&grid)
            );
        }
        grid
    }

    fn count_alive(&self, grid: &Grid) -> usize {
        grid.cells().iter().filter(|c| c.alive()).count()
    }

    fn minimum_alive(&self, grid: &Grid) -> usize {
        integer_sqrt(grid.rows().saturating_mul(grid.columns()))
    }
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: usize) -> usize {
    let mut r = (n as f64).sqrt() as usize;
    while !matches!(r.checked_mul(r), Some(sq) if sq <= n) {
        r -= 1;
    }
    while matches!((r + 1).checked_mul(r + 1), Some(sq) if sq <= n) {
        r += 1;
    }
    r
}
