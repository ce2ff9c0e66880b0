pub mod console;
pub mod life;

pub use console::{draw, run_life, RunSummary};
pub use life::ClassicLife;
