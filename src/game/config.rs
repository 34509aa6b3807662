//! Game setup options

use crate::board::Side;

/// Options fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side that places the first stone
    pub opener: Side,
}

impl GameConfig {
    pub fn human_first() -> Self {
        Self { opener: Side::Human }
    }

    pub fn machine_first() -> Self {
        Self { opener: Side::Machine }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::human_first()
    }
}
