//! Legal move enumeration.
//!
//! Given a color, a roll, and a board, [`legal_moves`] returns every
//! maximal [`Move`]: each one either uses all dice or stops where no die
//! can be played any more.
//!
//! ## Search
//!
//! Depth-first over partial moves. Each branch clones its partial move
//! (and with it the board chain), so siblings never see each other's
//! changes. An illegal extension is simply skipped.
//!
//! - With pieces on the bar only bar entries are tried.
//! - Otherwise normal movements are tried from every occupied point with
//!   every remaining die value, then bear-offs from every occupied home
//!   point with every remaining die value.
//!
//! Results are deduplicated by resulting board, so orderings that reach
//! the same position are reported once, in first-found order. Color and
//! roll are fixed for one search, so only the consumed dice could still
//! tell two such moves apart, and that only happens when a die is left
//! unplayable.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::trace;

use super::feasibility::{home_points_from_base, points_in_travel_order};
use crate::core::{Board, BoardKey, Color, Dice};
use crate::moves::{Move, Movement};

/// All distinct maximal moves for `color` rolling `dice` on `board`.
///
/// Never empty: when nothing can be played the single result is the empty move.
///
/// ```
/// use rust_backgammon::core::{Board, Color, Dice};
/// use rust_backgammon::rules::legal_moves;
///
/// let board = Board::new();
/// let moves = legal_moves(Color::Black, Dice::new(6, 5), &board);
///
/// assert!(!moves.is_empty());
/// assert!(moves.iter().all(|m| m.is_full()));
/// ```
#[must_use]
pub fn legal_moves(color: Color, dice: Dice, board: &Board) -> Vec<Move> {
    let mut search = Enumeration::default();
    search.extend(Move::new(color, dice, board));

    trace!(%color, ?dice, options = search.results.len(), "enumerated legal moves");
    search.results
}

/// Accumulated results for one enumeration.
#[derive(Default)]
struct Enumeration {
    seen: FxHashSet<BoardKey>,
    results: Vec<Move>,
}

impl Enumeration {
    fn extend(&mut self, partial: Move) {
        if partial.is_complete() {
            if self.seen.insert(partial.current_board().key()) {
                self.results.push(partial);
            }
            return;
        }

        let color = partial.color();
        let board = partial.current_board();

        if board.bar(color) > 0 {
            for face in partial.remaining_faces() {
                if let Ok(entry) = Movement::bar_entry_for_die(color, face) {
                    self.try_branch(&partial, entry, None);
                }
            }
            return;
        }

        for start in points_in_travel_order(color).filter(|&p| board.pieces_of(color, p) > 0) {
            for face in partial.remaining_faces() {
                if let Ok(normal) = Movement::normal_for_die(color, start, face) {
                    self.try_branch(&partial, normal, None);
                }
            }
        }

        // Bear-offs name their die: an exact die and a larger one can both
        // fit, and they leave different dice for the rest of the turn.
        // Smallest first, so a turn ending early keeps the larger die unused.
        let mut faces: SmallVec<[u8; 4]> = partial.remaining_faces();
        faces.sort_unstable();
        for start in home_points_from_base(color).filter(|&p| board.pieces_of(color, p) > 0) {
            let Ok(off) = Movement::bear_off(color, start as i32) else {
                continue;
            };
            for &face in &faces {
                self.try_branch(&partial, off, Some(face));
            }
        }
    }

    /// Extend a copy of `partial` with `movement` and recurse if it is legal.
    fn try_branch(&mut self, partial: &Move, movement: Movement, face: Option<u8>) {
        let mut next = partial.clone();
        let added = match face {
            Some(face) => next.add_movement_with_die(movement, face),
            None => next.add_movement(movement),
        };
        if added.is_ok() {
            self.extend(next);
        }
    }
}
