use crate::auxiliary::randomizer::IndexSource;
use crate::traits_and_structs::cell::Cell;
use crate::traits_and_structs::grid::Grid;

/// Generation and population rules for a life-like automaton.
///
/// `ClassicLife` is the only real implementation; the trait exists so the
/// console driver can be run against a substitute.
pub trait LifeEngine {
    /// A fresh grid of the engine's dimensions with every cell dead.
    fn create_grid(&self) -> Grid;

    /// Computes the following generation without touching `current`.
    fn compute_next_generation(&self, current: &Grid) -> Grid;

    /// Live cells among the eight neighbours of `(row, col)`, never counting the cell itself.
    fn count_alive_neighbors(&self, grid: &Grid, row: usize, col: usize) -> usize;

    /// Off-grid positions are treated as dead.
    fn is_neighbor_alive(&self, grid: &Grid, row: isize, col: isize) -> bool;

    fn compute_next_state(&self, current: Cell, alive_neighbors: usize) -> bool;

    /// Repopulates `grid` from `source` when it has fewer live cells than
    /// [`LifeEngine::minimum_alive`], otherwise hands it back untouched.
    fn enforce_population_floor(&self, grid: Grid, source: &mut dyn IndexSource) -> Grid;

    fn count_alive(&self, grid: &Grid) -> usize;

    fn minimum_alive(&self, grid: &Grid) -> usize;
}
