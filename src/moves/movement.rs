//! Single-piece movements.
//!
//! A `Movement` is one die's worth of travel for one piece:
//! - `Normal`: point to point
//! - `BarEntry`: from the bar into the opponent's home quadrant
//! - `BearOff`: from the home quadrant off the board
//!
//! Construction only checks that the referenced points exist. Whether the
//! movement is legal on a given board is decided by [`Movement::validate`]
//! and [`Movement::apply`], and whether a die can pay for it by
//! [`Movement::check_die`].

use serde::{Deserialize, Serialize};

use crate::core::{Board, Color, IllegalMove, MoveResult, MAX_FACE};

/// One atomic piece movement for one color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    /// Move a piece from `start` to `end`.
    Normal { color: Color, start: u8, end: u8 },
    /// Enter a piece from the bar at `end`.
    BarEntry { color: Color, end: u8 },
    /// Bear a piece off from `start`.
    BearOff { color: Color, start: u8 },
}

/// Convert an on-board point to storage form.
fn checked_point(point: i32) -> MoveResult<u8> {
    if Board::on_board(point) {
        Ok(point as u8)
    } else {
        Err(IllegalMove::OffBoard { point })
    }
}

impl Movement {
    /// A point-to-point movement.
    pub fn normal(color: Color, start: i32, end: i32) -> MoveResult<Self> {
        Ok(Movement::Normal {
            color,
            start: checked_point(start)?,
            end: checked_point(end)?,
        })
    }

    /// A point-to-point movement of `die` points in `color`'s direction.
    pub fn normal_for_die(color: Color, start: usize, die: u8) -> MoveResult<Self> {
        let start = start as i32;
        Self::normal(color, start, start + color.direction() * i32::from(die))
    }

    /// Entry from the bar at `end`.
    pub fn bar_entry(color: Color, end: i32) -> MoveResult<Self> {
        Ok(Movement::BarEntry {
            color,
            end: checked_point(end)?,
        })
    }

    /// Entry from the bar at the point a `die` roll reaches.
    pub fn bar_entry_for_die(color: Color, die: u8) -> MoveResult<Self> {
        Self::bar_entry(color, color.opponent().base() + color.direction() * i32::from(die))
    }

    /// Bearing off from `start`.
    pub fn bear_off(color: Color, start: i32) -> MoveResult<Self> {
        Ok(Movement::BearOff {
            color,
            start: checked_point(start)?,
        })
    }

    /// The color making the movement.
    #[must_use]
    pub fn color(&self) -> Color {
        match *self {
            Movement::Normal { color, .. }
            | Movement::BarEntry { color, .. }
            | Movement::BearOff { color, .. } => color,
        }
    }

    /// Number of points travelled.
    ///
    /// Bar entry counts from the opponent's base, bearing off counts to
    /// the mover's base.
    #[must_use]
    pub fn distance(&self) -> i32 {
        match *self {
            Movement::Normal { start, end, .. } => (i32::from(start) - i32::from(end)).abs(),
            Movement::BarEntry { color, end } => (color.opponent().base() - i32::from(end)).abs(),
            Movement::BearOff { color, start } => (i32::from(start) - color.base()).abs(),
        }
    }

    /// Check whether a die of value `die` can pay for this movement.
    ///
    /// Normal and bar-entry movements need an exact match. Bearing off
    /// needs an exact match while a piece of the mover sits farther from
    /// the base; otherwise any die at least as large as the distance works.
    pub fn check_die(&self, board: &Board, die: u8) -> MoveResult<()> {
        let distance = self.distance();
        let die_value = i32::from(die);

        match *self {
            Movement::Normal { .. } | Movement::BarEntry { .. } => {
                if die_value == distance {
                    Ok(())
                } else {
                    Err(IllegalMove::DieMismatch { die, distance })
                }
            }
            Movement::BearOff { color, start } => {
                if has_farther_piece(board, color, start) {
                    if die_value == distance {
                        Ok(())
                    } else {
                        Err(IllegalMove::DieMismatch { die, distance })
                    }
                } else if die_value >= distance {
                    Ok(())
                } else {
                    Err(IllegalMove::DieTooSmall { die, distance })
                }
            }
        }
    }

    /// Whether a die of value `die` can pay for this movement.
    #[must_use]
    pub fn can_use(&self, board: &Board, die: u8) -> bool {
        self.check_die(board, die).is_ok()
    }

    /// Check this movement against a board without changing it.
    pub fn validate(&self, board: &Board) -> MoveResult<()> {
        match *self {
            Movement::Normal { color, start, end } => {
                if board.bar(color) > 0 {
                    return Err(IllegalMove::BarNotClear);
                }
                if start == end {
                    return Err(IllegalMove::ZeroLength);
                }
                let distance = self.distance();
                if distance > i32::from(MAX_FACE) {
                    return Err(IllegalMove::TooFar { distance, max: MAX_FACE });
                }
                if board.pieces_of(color, usize::from(start)) == 0 {
                    return Err(IllegalMove::NoPieceAtSource { point: usize::from(start) });
                }
                if (i32::from(end) - i32::from(start)).signum() != color.direction() {
                    return Err(IllegalMove::WrongDirection);
                }
                check_landing(board, color, end)
            }
            Movement::BarEntry { color, end } => {
                if board.bar(color) == 0 {
                    return Err(IllegalMove::EmptyBar);
                }
                if !Board::in_home_quadrant(i32::from(end), color.opponent()) {
                    return Err(IllegalMove::EntryOutsideHome { point: usize::from(end) });
                }
                check_landing(board, color, end)
            }
            Movement::BearOff { color, start } => {
                if board.bar(color) > 0 {
                    return Err(IllegalMove::BarNotClear);
                }
                if board.pieces_of(color, usize::from(start)) == 0 {
                    return Err(IllegalMove::NoPieceAtSource { point: usize::from(start) });
                }
                match board.first_outside_home(color) {
                    Some(point) => Err(IllegalMove::NotAllHome { point }),
                    None => Ok(()),
                }
            }
        }
    }

    /// Apply this movement to `board`, hitting a lone enemy piece on the
    /// destination. The board is untouched when the movement is illegal.
    pub fn apply(&self, board: &mut Board) -> MoveResult<()> {
        self.validate(board)?;

        match *self {
            Movement::Normal { color, start, end } => {
                hit(board, color, end);
                board.remove_from_location(color, usize::from(start));
                board.move_to_location(color, usize::from(end));
            }
            Movement::BarEntry { color, end } => {
                hit(board, color, end);
                board.remove_from_bar(color);
                board.move_to_location(color, usize::from(end));
            }
            Movement::BearOff { color, start } => {
                board.remove_from_location(color, usize::from(start));
                board.move_off(color);
            }
        }

        Ok(())
    }
}

/// A destination may hold at most one enemy piece.
fn check_landing(board: &Board, color: Color, end: u8) -> MoveResult<()> {
    if board.pieces_of(color.opponent(), usize::from(end)) > 1 {
        Err(IllegalMove::Blocked { point: usize::from(end) })
    } else {
        Ok(())
    }
}

/// Send a lone enemy piece on `end` to the bar.
fn hit(board: &mut Board, color: Color, end: u8) {
    let enemy = color.opponent();
    if board.pieces_of(enemy, usize::from(end)) == 1 {
        board.remove_from_location(enemy, usize::from(end));
        board.move_to_bar(enemy);
    }
}

/// Whether `color` has a piece in its home quadrant farther from the base than `start`.
fn has_farther_piece(board: &Board, color: Color, start: u8) -> bool {
    let step = color.direction();
    let mut point = i32::from(start) - step;
    while Board::on_board(point) && Board::in_home_quadrant(point, color) {
        if board.pieces_of(color, point as usize) > 0 {
            return true;
        }
        point -= step;
    }
    false
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Movement::Normal { start, end, .. } => write!(f, "{}/{}", start + 1, end + 1),
            Movement::BarEntry { end, .. } => write!(f, "bar/{}", end + 1),
            Movement::BearOff { start, .. } => write!(f, "{}/off", start + 1),
        }
    }
}
