//! A full turn: movements accumulated against one dice roll.
//!
//! A `Move` starts from a snapshot of the pre-turn board and grows one
//! [`Movement`] at a time. Every accepted movement consumes one die slot
//! and records the board it produced, so the chain of intermediate
//! positions stays available for display and for continuing the search.
//!
//! ## Equality
//!
//! Two moves are equal when they share color, roll, consumed-slot pattern
//! and resulting board. Different orderings that reach the same position
//! therefore compare equal, which is what lets the enumerator report
//! distinct outcomes instead of distinct orderings.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

use super::movement::Movement;
use crate::core::{Board, BoardKey, Color, Dice, IllegalMove, MoveResult};
use crate::rules;

/// One die available to a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DieSlot {
    /// Face value.
    pub face: u8,
    /// Whether a movement has used this die.
    pub consumed: bool,
}

/// Dedup key for a move: everything its equality covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveKey {
    pub color: Color,
    pub dice: Dice,
    /// Bit `i` set when die slot `i` is consumed.
    pub consumed: u8,
    pub board: BoardKey,
}

/// An ordered accumulation of movements for one roll.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Move {
    color: Color,
    dice: Dice,
    /// The pre-turn board.
    original: Board,
    slots: SmallVec<[DieSlot; 4]>,
    movements: SmallVec<[Movement; 4]>,
    /// One board per applied movement; the last is the current board.
    boards: SmallVec<[Board; 4]>,
}

impl Move {
    /// Start an empty move for `color` rolling `dice` on `board`.
    ///
    /// Doubles give four die slots, other rolls two.
    #[must_use]
    pub fn new(color: Color, dice: Dice, board: &Board) -> Self {
        let slots = dice
            .faces()
            .into_iter()
            .map(|face| DieSlot { face, consumed: false })
            .collect();

        Self {
            color,
            dice,
            original: board.clone(),
            slots,
            movements: SmallVec::new(),
            boards: SmallVec::new(),
        }
    }

    // === Accessors ===

    /// The color making this move.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// The roll this move is played with.
    #[must_use]
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// The board before any movement.
    #[must_use]
    pub fn original_board(&self) -> &Board {
        &self.original
    }

    /// The board after every applied movement.
    #[must_use]
    pub fn current_board(&self) -> &Board {
        self.boards.last().unwrap_or(&self.original)
    }

    /// Intermediate boards, one per applied movement.
    #[must_use]
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Applied movements in order.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Die slots in roll order.
    #[must_use]
    pub fn die_slots(&self) -> &[DieSlot] {
        &self.slots
    }

    /// Number of applied movements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Whether no movement has been applied yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    /// Whether every die has been used.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.movements.len() == self.slots.len()
    }

    /// Distinct unconsumed face values, in slot order.
    #[must_use]
    pub fn remaining_faces(&self) -> SmallVec<[u8; 4]> {
        let mut faces: SmallVec<[u8; 4]> = SmallVec::new();
        for slot in self.slots.iter().filter(|s| !s.consumed) {
            if !faces.contains(&slot.face) {
                faces.push(slot.face);
            }
        }
        faces
    }

    /// Whether some unconsumed die has a legal movement on the current board.
    #[must_use]
    pub fn move_possible(&self) -> bool {
        let board = self.current_board();
        self.remaining_faces()
            .into_iter()
            .any(|face| rules::move_possible(self.color, face, board))
    }

    /// Whether this move can be submitted as a whole turn: every die is
    /// used or nothing more can be played.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_full() || !self.move_possible()
    }

    // === Building ===

    /// Add a movement, paying for it with the lowest-indexed unconsumed
    /// die that fits.
    pub fn add_movement(&mut self, movement: Movement) -> MoveResult<()> {
        self.check_addable(&movement)?;

        let board = self.current_board();
        let slot = self
            .slots
            .iter()
            .position(|s| !s.consumed && movement.can_use(board, s.face))
            .ok_or(IllegalMove::NoMatchingDie)?;

        self.commit(slot, movement)
    }

    /// Add a movement, paying for it with an unconsumed die of value `face`.
    ///
    /// Lets a caller pick between dice that both fit, such as an exact
    /// die and a larger one when bearing off.
    pub fn add_movement_with_die(&mut self, movement: Movement, face: u8) -> MoveResult<()> {
        self.check_addable(&movement)?;

        let slot = self
            .slots
            .iter()
            .position(|s| !s.consumed && s.face == face)
            .ok_or(IllegalMove::NoMatchingDie)?;
        movement.check_die(self.current_board(), face)?;

        self.commit(slot, movement)
    }

    fn check_addable(&self, movement: &Movement) -> MoveResult<()> {
        if self.is_full() {
            return Err(IllegalMove::MoveFull);
        }
        if movement.color() != self.color {
            return Err(IllegalMove::WrongColor {
                mover: self.color,
                movement: movement.color(),
            });
        }
        Ok(())
    }

    fn commit(&mut self, slot: usize, movement: Movement) -> MoveResult<()> {
        let mut next = self.current_board().scratch();
        movement.apply(&mut next)?;

        self.slots[slot].consumed = true;
        self.movements.push(movement);
        self.boards.push(next);
        Ok(())
    }

    // === Identity ===

    /// Bitmask of consumed die slots.
    #[must_use]
    pub fn consumed_mask(&self) -> u8 {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.consumed)
            .fold(0, |mask, (i, _)| mask | (1 << i))
    }

    /// Dedup key over color, roll, consumed slots and resulting board.
    #[must_use]
    pub fn key(&self) -> MoveKey {
        MoveKey {
            color: self.color,
            dice: self.dice,
            consumed: self.consumed_mask(),
            board: self.current_board().key(),
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
            && self.dice == other.dice
            && self.consumed_mask() == other.consumed_mask()
            && self.current_board() == other.current_board()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move ({}):", self.color.symbol())?;

        // Runs of the same movement print once with a count.
        let mut i = 0;
        while i < self.movements.len() {
            let movement = self.movements[i];
            let run = self.movements[i..].iter().take_while(|&&m| m == movement).count();
            write!(f, " {}", movement)?;
            if run > 1 {
                write!(f, " ({})", run)?;
            }
            i += run;
        }
        for _ in self.movements.len()..self.slots.len() {
            write!(f, " ?")?;
        }
        Ok(())
    }
}
