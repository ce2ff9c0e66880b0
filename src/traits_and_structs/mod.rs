pub mod automata_trait;
pub mod cell;
pub mod grid;

pub use automata_trait::LifeEngine;
pub use cell::Cell;
pub use grid::Grid;
