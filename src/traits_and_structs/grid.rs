#![forbid(unsafe_code)]

use std::fmt;

use crate::error::{LifeError, Result};
use crate::traits_and_structs::cell::Cell;

/// A rectangular, non-empty generation of cells stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    pub fn new_empty(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::Empty { rows, columns });
        }
        let size = rows
            .checked_mul(columns)
            .ok_or(LifeError::TooLarge { rows, columns })?;
        Ok(Self {
            cells: vec![Cell::default(); size],
            rows,
            columns,
        })
    }

    /// Builds a grid from nested rows, rejecting empty and jagged input.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(LifeError::Empty {
                rows: rows.len(),
                columns,
            });
        }
        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != columns {
                return Err(LifeError::Jagged {
                    row,
                    expected: columns,
                    found: line.len(),
                });
            }
            cells.extend(line.iter().copied().map(Cell::from));
        }
        Ok(Self {
            cells,
            rows: rows.len(),
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns `None` for any coordinate outside the grid, negative ones included.
    pub fn get<I: std::convert::TryInto<usize>>(&self, row: I, col: I) -> Option<Cell> {
        self.grid_idx(row, col).map(|i| self.cells[i])
    }

    /// Replaces the cell at `(row, col)`. Returns false if the position is off the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.grid_idx(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.columns)
    }

    pub(crate) fn from_cells(cells: Vec<Cell>, rows: usize, columns: usize) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            cells,
            rows,
            columns,
        }
    }

    fn grid_idx<I: std::convert::TryInto<usize>>(&self, row: I, col: I) -> Option<usize> {
        if let (Ok(row), Ok(col)) = (row.try_into(), col.try_into()) {
            if row < self.rows && col < self.columns {
                Some(col + row * self.columns)
            } else {
                None
            }
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_empty_is_all_dead() {
        let grid = Grid::new_empty(4, 7).unwrap();
        assert_eq!((grid.rows(), grid.columns()), (4, 7));
        assert_eq!(grid.cells().len(), 28);
        assert!(grid.cells().iter().all(|c| !c.alive()));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert!(matches!(
            Grid::new_empty(0, 5),
            Err(LifeError::Empty { rows: 0, columns: 5 })
        ));
        assert!(matches!(
            Grid::new_empty(5, 0),
            Err(LifeError::Empty { .. })
        ));
    }

    #[test]
    fn overflowing_size_is_rejected() {
        assert!(matches!(
            Grid::new_empty(usize::MAX, 2),
            Err(LifeError::TooLarge { .. })
        ));
    }

    #[test]
    fn from_rows_rejects_empty_and_jagged() {
        assert!(matches!(
            Grid::from_rows(vec![]),
            Err(LifeError::Empty { rows: 0, .. })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![], vec![]]),
            Err(LifeError::Empty { rows: 2, columns: 0 })
        ));
        assert!(matches!(
            Grid::from_rows(vec![vec![true, false], vec![true], vec![false, false]]),
            Err(LifeError::Jagged {
                row: 1,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn get_is_row_major_and_bounds_checked() {
        let grid = Grid::from_rows(vec![vec![false, true, false], vec![true, false, false]]).unwrap();
        assert_eq!(grid.get(0, 1), Some(Cell::ALIVE));
        assert_eq!(grid.get(1, 0), Some(Cell::ALIVE));
        assert_eq!(grid.get(1, 1), Some(Cell::DEAD));
        assert_eq!(grid.get(-1_isize, 0), None);
        assert_eq!(grid.get(0_isize, -1), None);
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 3), None);
    }

    #[test]
    fn set_ignores_positions_off_the_grid() {
        let mut grid = Grid::new_empty(2, 2).unwrap();
        assert!(grid.set(1, 1, Cell::ALIVE));
        assert!(!grid.set(2, 0, Cell::ALIVE));
        assert_eq!(grid.cells().iter().filter(|c| c.alive()).count(), 1);
    }

    #[test]
    fn display_matches_console_format() {
        let grid = Grid::from_rows(vec![vec![true, false, true], vec![false, false, false]]).unwrap();
        assert_eq!(grid.to_string(), "* . * \n. . . \n");
    }
}
