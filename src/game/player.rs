//! The player contract and simple built-in players.
//!
//! The game loop asks a [`Player`] for a whole-turn [`Move`] through a
//! read-only [`GameView`], and tells it once whether it won or lost.
//! A player that submits a move built against anything other than the
//! view it was given is asked again.

use crate::core::{Board, Color, Dice, GameRng};
use crate::moves::Move;
use crate::rules::legal_moves;

/// What a player sees when asked to move, or when the game ends.
#[derive(Clone, Copy, Debug)]
pub struct GameView<'a> {
    board: &'a Board,
    dice: Dice,
    color: Color,
    turn: u32,
}

impl<'a> GameView<'a> {
    /// Create a view of a position.
    pub fn new(board: &'a Board, dice: Dice, color: Color, turn: u32) -> Self {
        Self { board, dice, color, turn }
    }

    /// The board before this turn.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The roll for this turn.
    #[must_use]
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// The color on roll.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Turns completed so far (starts at 0).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Every distinct legal move for this turn.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self.color, self.dice, self.board)
    }

    /// An empty move to build by hand, movement by movement.
    #[must_use]
    pub fn start_move(&self) -> Move {
        Move::new(self.color, self.dice, self.board)
    }
}

/// A participant in the game loop.
pub trait Player {
    /// Pick a complete move for the position in `view`.
    ///
    /// The move must start from `view.board()` with `view.dice()` for
    /// `view.color()`, and must be complete (all dice used, or nothing
    /// more playable). [`GameView::legal_moves`] lists every valid answer.
    fn choose_move(&mut self, view: &GameView<'_>) -> Move;

    /// Called once when this player has won.
    fn won(&mut self, _view: &GameView<'_>) {}

    /// Called once when this player has lost.
    fn lost(&mut self, _view: &GameView<'_>) {}
}

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    /// Create a random player with its own seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }

    /// Create a random player from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, view: &GameView<'_>) -> Move {
        let moves = view.legal_moves();
        match self.rng.choose(&moves) {
            Some(mv) => mv.clone(),
            None => view.start_move(),
        }
    }
}

/// Always plays the first enumerated legal move.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstChoicePlayer;

impl Player for FirstChoicePlayer {
    fn choose_move(&mut self, view: &GameView<'_>) -> Move {
        view.legal_moves()
            .into_iter()
            .next()
            .unwrap_or_else(|| view.start_move())
    }
}
