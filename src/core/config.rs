//! Game loop configuration.

use serde::{Deserialize, Serialize};

use super::color::Color;

/// Configuration for one game of backgammon.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the dice stream.
    /// Same seed and same players produce the same game.
    pub seed: u64,

    /// Color that moves first.
    pub first_to_move: Color,

    /// Maximum turns before the game is abandoned (0 = unlimited).
    pub max_turns: u32,

    /// Rejected submissions tolerated in a row from one player
    /// before the game is abandoned.
    pub max_resubmissions: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            first_to_move: Color::Black,
            max_turns: 10_000,
            max_resubmissions: 3,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dice seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the color that moves first.
    pub fn with_first_to_move(mut self, color: Color) -> Self {
        self.first_to_move = color;
        self
    }

    /// Set the turn limit.
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = turns;
        self
    }

    /// Set how many rejected submissions are tolerated in a row.
    pub fn with_max_resubmissions(mut self, attempts: u32) -> Self {
        self.max_resubmissions = attempts;
        self
    }

    /// Whether `turns` has reached the turn limit.
    pub fn turn_limit_reached(&self, turns: u32) -> bool {
        self.max_turns > 0 && turns >= self.max_turns
    }
}
