//! Configuration for a dungeon run.

use chrono::Utc;

/// Configuration for a run.
#[derive(Debug, Clone, Default)]
pub struct DungeonConfig {
    /// RNG seed for reproducible rolls. `None` seeds from the clock.
    pub seed: Option<u64>,
    /// Clear leftover block before every fight.
    pub reset_block: bool,
}

impl DungeonConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clear block before each fight instead of carrying it over.
    pub fn with_block_reset(mut self, reset: bool) -> Self {
        self.reset_block = reset;
        self
    }

    /// The configured seed, or one taken from the current time.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            let now = Utc::now();
            now.timestamp_nanos_opt()
                .unwrap_or_else(|| now.timestamp_micros())
                .unsigned_abs()
        })
    }
}
