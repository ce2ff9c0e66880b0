use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false };
    pub const ALIVE: Cell = Cell { alive: true };

    pub fn new(alive: bool) -> Self {
        Self { alive }
    }

    pub fn alive(self) -> bool {
        self.alive
    }

    /// Survival on 2 or 3 live neighbours, birth on exactly 3.
    #[must_use]
    pub fn next_state(self, alive_neighbors: usize) -> Self {
        let alive = match (self.alive, alive_neighbors) {
            (true, 2) | (true, 3) => true,
            (false, 3) => true,
            _ => false,
        };
        Self::new(alive)
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Self::new(alive)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.alive { "*" } else { "." })
    }
}
