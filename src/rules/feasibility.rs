//! Per-die feasibility: can `color` play a single die of value `die`?
//!
//! These predicates never mutate the board; they only run
//! [`Movement::validate`] against it.

use crate::core::{Board, Color};
use crate::moves::Movement;

/// Whether any movement (bar entry, bear-off, or normal) can use `die`.
#[must_use]
pub fn move_possible(color: Color, die: u8, board: &Board) -> bool {
    bar_entry_possible(color, die, board)
        || bear_off_possible(color, die, board)
        || normal_possible(color, die, board)
}

/// Whether a piece can enter from the bar with `die`.
#[must_use]
pub fn bar_entry_possible(color: Color, die: u8, board: &Board) -> bool {
    Movement::bar_entry_for_die(color, die).map_or(false, |m| m.validate(board).is_ok())
}

/// Whether some home-quadrant piece can bear off with `die`.
#[must_use]
pub fn bear_off_possible(color: Color, die: u8, board: &Board) -> bool {
    home_points_from_base(color).any(|point| {
        Movement::bear_off(color, point as i32)
            .map_or(false, |m| m.can_use(board, die) && m.validate(board).is_ok())
    })
}

/// Whether some piece can travel `die` points from one point to another.
#[must_use]
pub fn normal_possible(color: Color, die: u8, board: &Board) -> bool {
    board.occupied(color).any(|start| {
        Movement::normal_for_die(color, start, die).map_or(false, |m| m.validate(board).is_ok())
    })
}

/// Home-quadrant points of `color`, nearest the base first.
pub(crate) fn home_points_from_base(color: Color) -> impl Iterator<Item = usize> {
    let step = color.direction();
    (1..=6).map(move |i| (color.base() - step * i) as usize)
}

/// All points in `color`'s direction of travel, farthest from home first.
pub(crate) fn points_in_travel_order(color: Color) -> impl Iterator<Item = usize> {
    let first = color.opponent().base() + color.direction();
    (0..crate::core::NUM_POINTS as i32).map(move |i| (first + color.direction() * i) as usize)
}
