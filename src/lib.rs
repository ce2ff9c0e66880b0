//! Conway's Game of Life on a bounded grid that repopulates itself whenever
//! the number of live cells drops below `floor(sqrt(rows * columns))`.

pub mod auxiliary;
pub mod error;
pub mod projects;
pub mod traits_and_structs;

pub use auxiliary::{IndexSource, LifeConfig, Pcg32Source};
pub use error::{LifeError, Result};
pub use projects::{run_life, ClassicLife, RunSummary};
pub use traits_and_structs::{Cell, Grid, LifeEngine};
