//! Backgammon rules over whole turns.
//!
//! - `enumerate`: every distinct maximal move for a roll
//! - `feasibility`: whether a single die can be played at all
//!
//! Individual movement legality lives on `Movement`; this module only
//! combines movements into turns.

pub mod enumerate;
pub mod feasibility;

pub use enumerate::legal_moves;
pub use feasibility::{bar_entry_possible, bear_off_possible, move_possible, normal_possible};
