//! Error type shared by the grid, the random source and the console driver.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("grid must not be empty (got {rows}x{columns})")]
    Empty { rows: usize, columns: usize },

    #[error("grid is jagged: row {row} has {found} cells, expected {expected}")]
    Jagged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("grid of {rows}x{columns} cells is too big")]
    TooLarge { rows: usize, columns: usize },

    #[error("failed to read OS entropy: {0}")]
    Entropy(#[from] getrandom::Error),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LifeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jagged_display() {
        let err = LifeError::Jagged {
            row: 2,
            expected: 3,
            found: 1,
        };
        assert_eq!(
            err.to_string(),
            "grid is jagged: row 2 has 1 cells, expected 3"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: LifeError = io_err.into();
        assert!(matches!(err, LifeError::Io(_)));
    }
}
