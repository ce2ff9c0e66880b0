#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::io::Write;
use std::thread;
use std::time::Duration;

use log::{debug, info};

use crate::auxiliary::config::LifeConfig;
use crate::auxiliary::randomizer::IndexSource;
use crate::error::Result;
use crate::traits_and_structs::{Grid, LifeEngine};

pub const WELCOME: &str = "Welcome to the Game of Life by John Conway!";

/// What happened over a console run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub generations: u32,
    pub repopulations: u32,
    pub final_population: usize,
}

/// Writes one grid row per line, each cell followed by a space.
pub fn draw<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    write!(out, "{grid}")?;
    Ok(())
}

/// Builds a grid, keeps it above the population floor and prints every generation.
pub fn run_life<E, W>(
    engine: &E,
    source: &mut dyn IndexSource,
    config: &LifeConfig,
    out: &mut W,
) -> Result<RunSummary>
where
    E: LifeEngine + ?Sized,
    W: Write,
{
    let mut summary = RunSummary::default();
    writeln!(out, "{WELCOME}\n")?;

    let mut current = populate(engine, engine.create_grid(), source, &mut summary);
    writeln!(out, "Current Generation:")?;
    draw(&current, out)?;
    pause(config.initial_delay);

    for generation in 1..=config.generations {
        let next = engine.compute_next_generation(&current);
        current = populate(engine, next, source, &mut summary);
        debug!(
            "generation {}: {} live cells",
            generation,
            engine.count_alive(&current)
        );

        writeln!(out, "New Generation:")?;
        draw(&current, out)?;
        out.flush()?;
        summary.generations = generation;
        pause(config.step_delay);
    }

    summary.final_population = engine.count_alive(&current);
    info!(
        "finished {} generations, {} repopulations, {} live cells",
        summary.generations, summary.repopulations, summary.final_population
    );
    Ok(summary)
}

fn populate<E: LifeEngine + ?Sized>(
    engine: &E,
    grid: Grid,
    source: &mut dyn IndexSource,
    summary: &mut RunSummary,
) -> Grid {
    if engine.count_alive(&grid) < engine.minimum_alive(&grid) {
        summary.repopulations += 1;
    }
    engine.enforce_population_floor(grid, source)
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay);
    }
}
