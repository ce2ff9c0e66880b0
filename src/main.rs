use std::io;
use std::time::Duration;

use clap::Parser;
use log::info;

use repopulating_life::auxiliary::config::{DEFAULT_GENERATIONS, DEFAULT_STEP_DELAY};
use repopulating_life::{run_life, ClassicLife, IndexSource, LifeConfig, LifeError, Pcg32Source};

/// Conway's Game of Life on a 20x20 grid that repopulates itself when it runs low.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of generations to simulate
    #[arg(long, default_value_t = DEFAULT_GENERATIONS)]
    generations: u32,

    /// Pause between generations in milliseconds
    #[arg(long, default_value_t = DEFAULT_STEP_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Seed for repopulation; drawn from OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), LifeError> {
    env_logger::init();
    let args = Args::parse();

    let config = LifeConfig::default()
        .with_generations(args.generations)
        .with_step_delay(Duration::from_millis(args.delay_ms))
        .with_seed(args.seed);

    let mut source: Box<dyn IndexSource> = match config.seed {
        Some(seed) => {
            info!("using fixed seed {}", seed);
            Box::new(Pcg32Source::from_seed(seed))
        }
        None => Box::new(Pcg32Source::from_entropy()?),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = run_life(&ClassicLife::default(), source.as_mut(), &config, &mut out)?;
    info!("{:?}", summary);
    Ok(())
}
