//! Core engine types: colors, dice, board, RNG, errors, configuration.
//!
//! Everything here is rules-agnostic state. Movement legality lives in
//! `moves`, and the search over whole turns lives in `rules`.

pub mod color;
pub mod rng;
pub mod dice;
pub mod board;
pub mod error;
pub mod config;

pub use color::{Color, ColorMap, NUM_POINTS, PIECES_PER_COLOR};
pub use rng::GameRng;
pub use dice::{Dice, MAX_FACE, MIN_FACE};
pub use board::{Board, BoardKey};
pub use error::{BoardError, GameError, IllegalMove, MoveResult, Rejection};
pub use config::GameConfig;
