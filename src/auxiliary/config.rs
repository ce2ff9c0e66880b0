use std::time::Duration;

pub const DEFAULT_GENERATIONS: u32 = 100;
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(1000);
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(250);

/// Settings for one console run. Grid size and rules are fixed by the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeConfig {
    pub generations: u32,
    pub initial_delay: Duration,
    pub step_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            initial_delay: DEFAULT_INITIAL_DELAY,
            step_delay: DEFAULT_STEP_DELAY,
            seed: None,
        }
    }
}

impl LifeConfig {
    #[must_use]
    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    #[must_use]
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    #[must_use]
    pub fn with_initial_delay(mut self, initial_delay: Duration) -> Self {
        self.initial_delay = initial_delay;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// No pauses at all, for tests and piping output.
    #[must_use]
    pub fn without_delays(self) -> Self {
        self.with_initial_delay(Duration::ZERO)
            .with_step_delay(Duration::ZERO)
    }
}
