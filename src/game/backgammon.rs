//! The game loop.
//!
//! `Backgammon` owns the one canonical [`Board`]. Each turn it rolls,
//! shows the player on roll a [`GameView`], checks the submitted [`Move`]
//! and replaces the board with the move's resulting board. A refused
//! submission is logged and the same player is asked again, up to
//! [`GameConfig::max_resubmissions`] times in a row.
//!
//! ## Example
//!
//! ```
//! use rust_backgammon::core::GameConfig;
//! use rust_backgammon::game::{Backgammon, RandomPlayer};
//!
//! let mut game = Backgammon::new(
//!     Box::new(RandomPlayer::new(1)),
//!     Box::new(RandomPlayer::new(2)),
//!     GameConfig::default().with_seed(7),
//! );
//! let outcome = game.run().unwrap();
//!
//! assert!(game.board().is_game_over());
//! assert_eq!(game.board().winner(), Some(outcome.winner));
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::player::{GameView, Player};
use crate::core::{Board, Color, ColorMap, Dice, GameConfig, GameError, GameRng, Rejection};
use crate::moves::Move;
use crate::rules::legal_moves;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// The color with all fifteen pieces borne off.
    pub winner: Color,

    /// Turns played, including the winning one.
    pub turns: u32,

    /// Pip count the loser had left.
    pub loser_pips: u32,
}

/// One game between two players.
pub struct Backgammon {
    players: ColorMap<Box<dyn Player>>,
    config: GameConfig,
    rng: GameRng,
    board: Board,
    color: Color,
    dice: Dice,
    turn: u32,
}

impl Backgammon {
    /// Set up a game in the starting position with the first roll made.
    pub fn new(black: Box<dyn Player>, white: Box<dyn Player>, config: GameConfig) -> Self {
        let mut rng = GameRng::new(config.seed);
        let dice = Dice::roll(&mut rng);

        Self {
            players: ColorMap::from_pair(white, black),
            color: config.first_to_move,
            config,
            rng,
            board: Board::new(),
            dice,
            turn: 0,
        }
    }

    /// Start over from the starting position with the configured seed.
    pub fn reset(&mut self) {
        self.rng = GameRng::new(self.config.seed);
        self.dice = Dice::roll(&mut self.rng);
        self.board = Board::new();
        self.color = self.config.first_to_move;
        self.turn = 0;
    }

    /// The canonical board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current roll.
    #[must_use]
    pub fn dice(&self) -> Dice {
        self.dice
    }

    /// The color on roll.
    #[must_use]
    pub fn current_color(&self) -> Color {
        self.color
    }

    /// Turns completed so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The view handed to the player on roll.
    #[must_use]
    pub fn view(&self) -> GameView<'_> {
        GameView::new(&self.board, self.dice, self.color, self.turn)
    }

    /// Legal moves for the player on roll.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        legal_moves(self.color, self.dice, &self.board)
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Play until someone bears off all fifteen pieces.
    ///
    /// Fails when the turn limit is reached or a player keeps submitting
    /// moves that are refused.
    #[instrument(skip(self), fields(seed = self.config.seed))]
    pub fn run(&mut self) -> Result<GameOutcome, GameError> {
        loop {
            if let Some(winner) = self.board.winner() {
                return Ok(self.finish(winner));
            }
            if self.config.turn_limit_reached(self.turn) {
                warn!(turns = self.turn, "turn limit reached without a winner");
                return Err(GameError::TurnLimit { turns: self.turn });
            }
            self.play_turn()?;
        }
    }

    /// Ask the player on roll for a move, apply it, and pass the dice.
    pub fn play_turn(&mut self) -> Result<(), GameError> {
        let color = self.color;
        let mut rejected = 0;

        let chosen = loop {
            let view = GameView::new(&self.board, self.dice, color, self.turn);
            let submitted = self.players[color].choose_move(&view);

            match check_submission(&view, &submitted) {
                Ok(()) => break submitted,
                Err(reason) => {
                    rejected += 1;
                    warn!(%color, attempt = rejected, %reason, "move refused");
                    if rejected > self.config.max_resubmissions {
                        return Err(GameError::ResubmissionLimit {
                            color,
                            attempts: rejected,
                        });
                    }
                }
            }
        };

        debug!(turn = self.turn, %color, dice = %self.dice, played = %chosen, "turn played");

        self.board = chosen.current_board().clone();
        self.turn += 1;
        self.color = color.opponent();
        self.dice = Dice::roll(&mut self.rng);
        Ok(())
    }

    fn finish(&mut self, winner: Color) -> GameOutcome {
        let loser = winner.opponent();
        let outcome = GameOutcome {
            winner,
            turns: self.turn,
            loser_pips: self.board.pip_count(loser),
        };
        info!(%winner, turns = outcome.turns, loser_pips = outcome.loser_pips, "game over");

        let won = GameView::new(&self.board, self.dice, winner, self.turn);
        self.players[winner].won(&won);
        let lost = GameView::new(&self.board, self.dice, loser, self.turn);
        self.players[loser].lost(&lost);

        outcome
    }
}

/// Check a submitted move against the view it should answer.
pub fn check_submission(view: &GameView<'_>, submitted: &Move) -> Result<(), Rejection> {
    if submitted.color() != view.color() {
        return Err(Rejection::WrongColor {
            expected: view.color(),
            submitted: submitted.color(),
        });
    }
    if submitted.dice() != view.dice() {
        return Err(Rejection::WrongDice {
            expected: view.dice(),
            submitted: submitted.dice(),
        });
    }
    if submitted.original_board() != view.board() {
        return Err(Rejection::StaleBoard);
    }
    if !submitted.is_complete() {
        return Err(Rejection::Incomplete);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{FirstChoicePlayer, RandomPlayer};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Submits a move against the starting board `stale_for` times, then plays properly.
    struct StalePlayer {
        stale_for: u32,
        submitted: u32,
    }

    impl Player for StalePlayer {
        fn choose_move(&mut self, view: &GameView<'_>) -> Move {
            self.submitted += 1;
            if self.submitted <= self.stale_for {
                let mut stale = Board::new();
                stale.set_point(0, Color::White, 1).set_bar(Color::White, 1);
                Move::new(view.color(), view.dice(), &stale)
            } else {
                FirstChoicePlayer.choose_move(view)
            }
        }
    }

    #[derive(Default)]
    struct Notifications {
        won: Vec<Color>,
        lost: Vec<Color>,
    }

    struct RecordingPlayer {
        inner: RandomPlayer,
        log: Rc<RefCell<Notifications>>,
    }

    impl Player for RecordingPlayer {
        fn choose_move(&mut self, view: &GameView<'_>) -> Move {
            self.inner.choose_move(view)
        }

        fn won(&mut self, view: &GameView<'_>) {
            self.log.borrow_mut().won.push(view.color());
        }

        fn lost(&mut self, view: &GameView<'_>) {
            self.log.borrow_mut().lost.push(view.color());
        }
    }

    fn random_game(seed: u64) -> Backgammon {
        Backgammon::new(
            Box::new(RandomPlayer::new(seed)),
            Box::new(RandomPlayer::new(seed + 1)),
            GameConfig::default().with_seed(seed),
        )
    }

    #[test]
    fn test_new_game() {
        let game = random_game(3);

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.current_color(), Color::Black);
        assert_eq!(game.turn(), 0);
        assert!(!game.is_game_over());
        assert!(!game.legal_moves().is_empty());
    }

    #[test]
    fn test_play_turn_passes_dice() {
        let mut game = random_game(3);

        game.play_turn().unwrap();

        assert_eq!(game.current_color(), Color::White);
        assert_eq!(game.turn(), 1);
        assert_eq!(game.board().pip_count(Color::White), 167);
        assert!(game.board().pip_count(Color::Black) < 167);
        assert!(game.board().validate().is_ok());
    }

    #[test]
    fn test_full_game_has_winner() {
        let mut game = random_game(11);

        let outcome = game.run().unwrap();

        assert_eq!(game.board().off(outcome.winner), 15);
        assert!(outcome.loser_pips > 0);
        assert_eq!(outcome.turns, game.turn());
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = random_game(5).run().unwrap();
        let b = random_game(5).run().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_reset() {
        let mut game = random_game(9);
        let dice = game.dice();
        game.play_turn().unwrap();
        game.play_turn().unwrap();

        game.reset();

        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), 0);
        assert_eq!(game.dice(), dice);
        assert_eq!(game.current_color(), Color::Black);
    }

    #[test]
    fn test_stale_move_is_retried() {
        let mut game = Backgammon::new(
            Box::new(StalePlayer { stale_for: 2, submitted: 0 }),
            Box::new(FirstChoicePlayer),
            GameConfig::default(),
        );

        game.play_turn().unwrap();

        assert_eq!(game.turn(), 1);
        assert_eq!(game.current_color(), Color::White);
    }

    #[test]
    fn test_resubmission_limit() {
        let mut game = Backgammon::new(
            Box::new(StalePlayer { stale_for: 10, submitted: 0 }),
            Box::new(FirstChoicePlayer),
            GameConfig::default().with_max_resubmissions(2),
        );

        let err = game.play_turn().unwrap_err();

        assert_eq!(
            err,
            GameError::ResubmissionLimit { color: Color::Black, attempts: 3 }
        );
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), 0);
    }

    #[test]
    fn test_turn_limit() {
        let mut game = Backgammon::new(
            Box::new(FirstChoicePlayer),
            Box::new(FirstChoicePlayer),
            GameConfig::default().with_max_turns(4),
        );

        assert_eq!(game.run(), Err(GameError::TurnLimit { turns: 4 }));
    }

    #[test]
    fn test_check_submission() {
        let board = Board::new();
        let view = GameView::new(&board, Dice::new(6, 5), Color::Black, 0);

        let honest = view.legal_moves().remove(0);
        assert_eq!(check_submission(&view, &honest), Ok(()));

        let empty = view.start_move();
        assert_eq!(check_submission(&view, &empty), Err(Rejection::Incomplete));

        let wrong_color = Move::new(Color::White, view.dice(), &board);
        assert!(matches!(
            check_submission(&view, &wrong_color),
            Err(Rejection::WrongColor { .. })
        ));

        let wrong_dice = Move::new(Color::Black, Dice::new(5, 6), &board);
        assert!(matches!(
            check_submission(&view, &wrong_dice),
            Err(Rejection::WrongDice { .. })
        ));

        let mut other = Board::new();
        other.set_point(0, Color::White, 1).set_bar(Color::White, 1);
        let stale = Move::new(Color::Black, view.dice(), &other);
        assert_eq!(check_submission(&view, &stale), Err(Rejection::StaleBoard));
    }

    #[test]
    fn test_won_and_lost_notified_once() {
        let log = Rc::new(RefCell::new(Notifications::default()));
        let mut game = Backgammon::new(
            Box::new(RecordingPlayer { inner: RandomPlayer::new(1), log: Rc::clone(&log) }),
            Box::new(RecordingPlayer { inner: RandomPlayer::new(2), log: Rc::clone(&log) }),
            GameConfig::default().with_seed(21),
        );

        let outcome = game.run().unwrap();

        let log = log.borrow();
        assert_eq!(log.won, vec![outcome.winner]);
        assert_eq!(log.lost, vec![outcome.winner.opponent()]);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = GameOutcome { winner: Color::White, turns: 57, loser_pips: 31 };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GameOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
