//! Error types.
//!
//! - [`IllegalMove`]: a movement or move that breaks the rules. Always
//!   recoverable; the enumerator uses it to prune a branch.
//! - [`Rejection`]: why the game loop refused a player's submitted move.
//! - [`GameError`]: a game run that cannot finish.
//! - [`BoardError`]: a hand-built board that breaks the piece invariants.

use thiserror::Error;

use super::color::Color;
use super::dice::Dice;

/// A rule violation for a single movement or for a move as a whole.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IllegalMove {
    #[error("movement endpoint {point} is off the board")]
    OffBoard { point: i32 },

    #[error("zero-length movement")]
    ZeroLength,

    #[error("cannot move a piece {distance} points, at most {max}")]
    TooFar { distance: i32, max: u8 },

    #[error("pieces cannot move backwards")]
    WrongDirection,

    #[error("pieces on bar must move first")]
    BarNotClear,

    #[error("no pieces on the bar")]
    EmptyBar,

    #[error("no unconsumed die matches this movement")]
    NoMatchingDie,

    #[error("move already full")]
    MoveFull,

    #[error("movement is for {movement} but the move is for {mover}")]
    WrongColor { mover: Color, movement: Color },

    #[error("no pieces at source point {point}")]
    NoPieceAtSource { point: usize },

    #[error("destination point {point} blocked by two or more enemy pieces")]
    Blocked { point: usize },

    #[error("cannot enter from the bar at point {point}")]
    EntryOutsideHome { point: usize },

    #[error("must clear all pieces to home quadrant before bearing off (piece at point {point})")]
    NotAllHome { point: usize },

    #[error("die value {die} too small to bear off from distance {distance}")]
    DieTooSmall { die: u8, distance: i32 },

    #[error("die value {die} does not match distance {distance}")]
    DieMismatch { die: u8, distance: i32 },
}

/// Convenience result for rule checks.
pub type MoveResult<T> = std::result::Result<T, IllegalMove>;

/// Why a submitted move was refused. The player is asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("move was built against a stale board")]
    StaleBoard,

    #[error("move is for {submitted} but {expected} is on roll")]
    WrongColor { expected: Color, submitted: Color },

    #[error("move uses {submitted:?} but the roll is {expected:?}")]
    WrongDice { expected: Dice, submitted: Dice },

    #[error("move is incomplete: dice remain and a movement is still possible")]
    Incomplete,
}

/// A game run that had to stop before a winner was decided.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{color} submitted {attempts} rejected moves in a row")]
    ResubmissionLimit { color: Color, attempts: u32 },

    #[error("no winner after {turns} turns")]
    TurnLimit { turns: u32 },
}

/// A board whose pieces do not add up.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("{color} has {total} pieces, expected 15")]
    PieceCount { color: Color, total: u32 },

    #[error("point {point} has count {count} but owner {owner:?}")]
    OwnerMismatch { point: usize, count: u8, owner: Option<Color> },
}
