//! Seeded randomness for dice and players.
//!
//! A game's dice come from one [`GameRng`]. Anything else that needs
//! randomness (a random player, the next game of a simulation) takes a
//! [`GameRng::fork`] so it never shifts the dice sequence.
//!
//! ```
//! use rust_backgammon::core::GameRng;
//!
//! let mut dice = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//! assert_eq!(dice.roll_die(), replay.roll_die());
//!
//! // Forks are reproducible too.
//! assert_eq!(dice.fork().seed(), replay.fork().seed());
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::dice::{MAX_FACE, MIN_FACE};

/// A ChaCha8 stream that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from. Logged so a game can be replayed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent stream seeded from this one.
    ///
    /// Advances this stream by one draw.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.stream.gen())
    }

    /// Roll a single die.
    pub fn roll_die(&mut self) -> u8 {
        self.stream.gen_range(MIN_FACE..=MAX_FACE)
    }

    /// Pick one element uniformly, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.stream)
    }
}
