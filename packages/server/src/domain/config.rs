//! Game timing parameters, fixed at startup.

use std::time::Duration;

/// Seconds on the clock when a round starts.
pub const DEFAULT_MAX_TIME: u32 = 30;

/// Period of the countdown timer.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Value broadcast on the first countdown tick
    pub max_time: u32,
    /// Delay before the first tick and between subsequent ticks
    pub tick_interval: Duration,
}

impl GameConfig {
    pub fn new(max_time: u32) -> Self {
        Self {
            max_time,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TIME)
    }
}
