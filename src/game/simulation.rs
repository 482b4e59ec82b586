//! Running many games between two kinds of player.
//!
//! Each game gets its own dice seed, `game.seed + index`, and fresh
//! players from the factories. Every player is handed a fork of one
//! player stream seeded from `game.seed`, so a whole run is reproducible
//! and no two players share a sequence.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::backgammon::{Backgammon, GameOutcome};
use super::player::Player;
use crate::core::{Color, ColorMap, GameConfig, GameError, GameRng};

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: u32,

    /// Per-game settings. Its seed is the seed of the first game.
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            game: GameConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create a new simulation config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: u32) -> Self {
        self.games = games;
        self
    }

    /// Set the per-game config.
    pub fn with_game_config(mut self, game: GameConfig) -> Self {
        self.game = game;
        self
    }

    /// Set the seed of the first game.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.game.seed = seed;
        self
    }

    /// Seed for game number `index`.
    pub fn seed_for(&self, index: u32) -> u64 {
        self.game.seed.wrapping_add(u64::from(index))
    }
}

/// Totals over a batch of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games started.
    pub games: u32,

    /// Wins per color.
    pub wins: ColorMap<u32>,

    /// Turns summed over finished games.
    pub total_turns: u64,

    /// Games stopped by a [`GameError`].
    pub aborted: u32,
}

impl SimulationStats {
    /// Add one game's result.
    pub fn record(&mut self, result: &Result<GameOutcome, GameError>) {
        self.games += 1;
        match result {
            Ok(outcome) => {
                self.wins[outcome.winner] += 1;
                self.total_turns += u64::from(outcome.turns);
            }
            Err(_) => self.aborted += 1,
        }
    }

    /// Games that ended with a winner.
    #[must_use]
    pub fn finished(&self) -> u32 {
        self.games - self.aborted
    }

    /// Average length of a finished game, 0 if none finished.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        match self.finished() {
            0 => 0.0,
            n => self.total_turns as f64 / f64::from(n),
        }
    }

    /// Share of finished games won by `color`.
    #[must_use]
    pub fn win_rate(&self, color: Color) -> f64 {
        match self.finished() {
            0 => 0.0,
            n => f64::from(self.wins[color]) / f64::from(n),
        }
    }
}

/// Plays a batch of games.
#[derive(Clone, Debug, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play every game. The factories receive a fresh random stream
    /// for the player they build.
    #[instrument(skip_all, fields(games = self.config.games))]
    pub fn run<B, W>(&self, mut black: B, mut white: W) -> SimulationStats
    where
        B: FnMut(GameRng) -> Box<dyn Player>,
        W: FnMut(GameRng) -> Box<dyn Player>,
    {
        let mut stats = SimulationStats::default();
        let mut player_streams = GameRng::new(self.config.game.seed);

        for index in 0..self.config.games {
            let seed = self.config.seed_for(index);
            let (black_rng, white_rng) = (player_streams.fork(), player_streams.fork());
            debug!(index, seed, black = black_rng.seed(), white = white_rng.seed(), "starting game");

            let config = self.config.game.clone().with_seed(seed);
            let mut game = Backgammon::new(black(black_rng), white(white_rng), config);
            stats.record(&game.run());
        }

        info!(
            black_wins = stats.wins[Color::Black],
            white_wins = stats.wins[Color::White],
            aborted = stats.aborted,
            mean_turns = stats.mean_turns(),
            "simulation finished"
        );
        stats
    }
}
