//! # rust-backgammon
//!
//! A backgammon rules engine built around complete legal move enumeration.
//!
//! ## Design Principles
//!
//! 1. **Whole turns**: A player answers a roll with one [`Move`], the full
//!    ordered list of movements for that turn. The enumerator lists every
//!    distinct maximal move; orderings that reach the same position count once.
//!
//! 2. **Value boards**: A [`Board`] is a few small arrays. Every search branch
//!    and every step of a move owns its own copy, so nothing is shared mutably.
//!
//! 3. **Recoverable rules, asserted invariants**: An illegal movement is an
//!    [`IllegalMove`] and leaves the board untouched. A board that stops adding
//!    up is a bug and panics.
//!
//! ## Modules
//!
//! - `core`: Colors, dice, board, RNG, errors, configuration
//! - `moves`: Movements and the per-turn move accumulator
//! - `rules`: Legal move enumeration and per-die feasibility
//! - `game`: Player contract, game loop, batch simulation
//! - `features`: Board-to-feature-vector encoders for evaluators

pub mod core;
pub mod moves;
pub mod rules;
pub mod game;
pub mod features;

// Re-export commonly used types
pub use crate::core::{
    Color, ColorMap,
    Dice, GameRng,
    Board, BoardKey,
    IllegalMove, MoveResult, Rejection, GameError, BoardError,
    GameConfig,
};

pub use crate::moves::{Movement, Move, MoveKey};

pub use crate::rules::{legal_moves, move_possible};

pub use crate::game::{
    Backgammon, GameOutcome, GameView,
    Player, RandomPlayer, FirstChoicePlayer,
    Simulation, SimulationConfig, SimulationStats,
};

pub use crate::features::{BoardEncoder, TdGammonEncoder};
