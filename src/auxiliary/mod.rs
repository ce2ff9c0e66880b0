pub mod config;
pub mod randomizer;

pub use config::LifeConfig;
pub use randomizer::{generate_seed, IndexSource, Pcg32Source};
