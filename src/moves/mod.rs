//! Movements and moves.
//!
//! - `Movement`: one piece travelling one die's worth (normal, bar entry, bear-off)
//! - `Move`: the movements of a whole turn, with the dice they consumed
//!   and the board after each one

pub mod movement;
pub mod sequence;

pub use movement::Movement;
pub use sequence::{DieSlot, Move, MoveKey};
