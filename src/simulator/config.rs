//! Batch simulation configuration.

/// Which resolver drives each simulated run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Fight the enemy list in order, ignoring the grid.
    List,
    /// Walk the grid with the auto-explorer.
    Explore,
}

impl Strategy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "list" => Some(Strategy::List),
            "explore" => Some(Strategy::Explore),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::List => "list",
            Strategy::Explore => "explore",
        }
    }
}

/// Configuration for a batch of simulated dungeon runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of dungeons to generate and resolve
    pub runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    pub strategy: Strategy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            runs: 1000,
            seed: None,
            strategy: Strategy::Explore,
        }
    }
}

impl SimConfig {
    /// Small seeded batch for quick balance checks
    pub fn quick(strategy: Strategy) -> Self {
        Self {
            runs: 100,
            seed: Some(42),
            strategy,
        }
    }
}
