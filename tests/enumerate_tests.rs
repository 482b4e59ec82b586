//! Enumeration and movement rule scenarios on hand-built positions.

use rust_backgammon::core::{Board, Color, Dice, IllegalMove};
use rust_backgammon::moves::{Move, Movement};
use rust_backgammon::rules::{legal_moves, move_possible};
use rustc_hash::FxHashSet;

/// White home position: `points` pieces on the given points, the rest borne off.
/// Black is parked far away on point 2.
fn white_bearing_off(points: &[(usize, u8)]) -> Board {
    let mut board = Board::empty();
    let on_board: u8 = points.iter().map(|&(_, n)| n).sum();
    for &(point, count) in points {
        board.set_point(point, Color::White, count);
    }
    board
        .set_off(Color::White, 15 - on_board)
        .set_point(2, Color::Black, 15);
    board
}

fn result_set(moves: &[Move]) -> FxHashSet<Board> {
    moves.iter().map(|m| m.current_board().clone()).collect()
}

// =============================================================================
// Opening Scenarios
// =============================================================================

#[test]
fn test_opening_six_five_uses_both_dice() {
    let board = Board::new();

    for color in Color::ALL {
        let moves = legal_moves(color, Dice::new(6, 5), &board);

        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.len(), 2, "{mv}");
            assert!(mv.movements().iter().all(|m| matches!(m, Movement::Normal { .. })));
        }
    }
}

#[test]
fn test_doubles_expose_four_slots() {
    let board = Board::new();
    let empty = Move::new(Color::White, Dice::new(3, 3), &board);

    assert_eq!(empty.die_slots().len(), 4);
    assert!(empty.die_slots().iter().all(|s| s.face == 3 && !s.consumed));

    for mv in legal_moves(Color::White, Dice::new(3, 3), &board) {
        assert_eq!(mv.die_slots().len(), 4);
        assert!(mv.die_slots().iter().all(|s| s.face == 3));
        assert!(mv.is_full());
    }
}

#[test]
fn test_opening_moves_conserve_pieces() {
    let board = Board::new();

    for dice in Dice::all() {
        for mv in legal_moves(Color::Black, dice, &board) {
            assert!(mv.current_board().validate().is_ok(), "{mv}");
            assert_eq!(mv.original_board(), &board);
        }
    }
}

// =============================================================================
// Completeness and Determinism
// =============================================================================

#[test]
fn test_every_result_is_maximal() {
    let mut board = Board::new();
    board
        .set_point(0, Color::White, 1)
        .set_bar(Color::White, 1)
        .set_point(23, Color::Black, 1)
        .set_point(22, Color::Black, 1);

    for dice in Dice::all() {
        for mv in legal_moves(Color::White, dice, &board) {
            assert!(mv.is_full() || !mv.move_possible(), "{mv}");
        }
    }
}

#[test]
fn test_enumeration_is_deterministic() {
    let board = Board::new();

    for dice in [Dice::new(1, 2), Dice::new(4, 4), Dice::new(6, 3)] {
        let first = legal_moves(Color::White, dice, &board);
        let second = legal_moves(Color::White, dice, &board);
        assert_eq!(result_set(&first), result_set(&second));
        assert_eq!(first, second);
    }
}

#[test]
fn test_results_are_distinct_outcomes() {
    let board = Board::new();
    let moves = legal_moves(Color::Black, Dice::new(2, 2), &board);

    let boards = result_set(&moves);
    assert_eq!(boards.len(), moves.len());
}

// =============================================================================
// Bar Priority
// =============================================================================

#[test]
fn test_bar_blocks_other_movements() {
    let mut board = Board::new();
    board.set_point(11, Color::White, 4).set_bar(Color::White, 1);

    let normal = Movement::normal(Color::White, 11, 14).unwrap();
    assert_eq!(normal.apply(&mut board.clone()), Err(IllegalMove::BarNotClear));

    let mut home = Board::empty();
    home.set_point(20, Color::White, 14)
        .set_bar(Color::White, 1)
        .set_point(2, Color::Black, 15);
    let off = Movement::bear_off(Color::White, 20).unwrap();
    assert_eq!(off.apply(&mut home.clone()), Err(IllegalMove::BarNotClear));

    let entry = Movement::bar_entry_for_die(Color::White, 3).unwrap();
    assert!(entry.apply(&mut board).is_ok());
    assert_eq!(board.bar(Color::White), 0);
    assert_eq!(board.pieces_of(Color::White, 2), 1);
}

#[test]
fn test_two_on_bar_enter_before_anything_else() {
    let mut board = Board::new();
    board.set_point(0, Color::White, 0).set_bar(Color::White, 2);

    let moves = legal_moves(Color::White, Dice::new(4, 3), &board);

    for mv in &moves {
        assert!(mv.movements().iter().all(|m| matches!(m, Movement::BarEntry { .. })));
        assert_eq!(mv.current_board().bar(Color::White), 0);
    }
}

#[test]
fn test_closed_board_forfeits_turn() {
    let mut board = Board::empty();
    for point in 0..6 {
        board.set_point(point, Color::Black, 2);
    }
    board
        .set_point(12, Color::Black, 3)
        .set_point(18, Color::White, 14)
        .set_bar(Color::White, 1);

    for dice in Dice::all() {
        let moves = legal_moves(Color::White, dice, &board);
        assert_eq!(moves.len(), 1);
        assert!(moves[0].is_empty());
        assert!(moves[0].is_complete());
    }
}

// =============================================================================
// Blocking and Hitting
// =============================================================================

#[test]
fn test_blocked_point() {
    let mut board = Board::new();
    // Black holds point 5 with five pieces.
    let blocked = Movement::normal(Color::White, 0, 5).unwrap();

    assert_eq!(blocked.apply(&mut board), Err(IllegalMove::Blocked { point: 5 }));
    assert_eq!(board, Board::new());
}

#[test]
fn test_hit_sends_blot_to_bar() {
    let mut board = Board::new();
    board.set_point(23, Color::Black, 1).set_bar(Color::Black, 1);
    board.set_point(18, Color::White, 4).set_point(17, Color::White, 1);

    let hit = Movement::normal(Color::White, 17, 23).unwrap();
    hit.apply(&mut board).unwrap();

    assert_eq!(board.color_at(23), Some(Color::White));
    assert_eq!(board.pieces(23), 1);
    assert_eq!(board.bar(Color::Black), 2);
    assert!(board.validate().is_ok());
}

#[test]
fn test_enumerated_hits_reach_bar() {
    // A lone Black piece sits 3 points ahead of White's back checkers.
    let mut board = Board::new();
    board.set_point(23, Color::Black, 1).set_point(3, Color::Black, 1);

    let moves = legal_moves(Color::White, Dice::new(3, 1), &board);

    assert!(moves.iter().any(|m| m.current_board().bar(Color::Black) == 1));
    for mv in &moves {
        assert!(mv.current_board().validate().is_ok());
    }
}

// =============================================================================
// Bearing Off
// =============================================================================

#[test]
fn test_bear_off_overage_without_farther_piece() {
    // Point 20 is four points from White's base.
    let board = white_bearing_off(&[(20, 1)]);
    let off = Movement::bear_off(Color::White, 20).unwrap();

    assert!(off.can_use(&board, 6));
    assert!(off.can_use(&board, 4));
    assert!(!off.can_use(&board, 3));

    let mut mv = Move::new(Color::White, Dice::new(6, 1), &board);
    mv.add_movement(off).unwrap();
    assert_eq!(mv.current_board().off(Color::White), 15);
    assert_eq!(mv.current_board().winner(), Some(Color::White));
}

#[test]
fn test_bear_off_overage_with_farther_piece() {
    let board = white_bearing_off(&[(20, 1), (19, 1)]);
    let off = Movement::bear_off(Color::White, 20).unwrap();

    assert!(!off.can_use(&board, 6));
    assert!(off.can_use(&board, 4));

    let mut mv = Move::new(Color::White, Dice::new(6, 2), &board);
    assert_eq!(mv.add_movement(off), Err(IllegalMove::NoMatchingDie));
    assert!(mv.is_empty());
}

#[test]
fn test_finishing_bear_off_is_one_outcome() {
    for dice in [Dice::new(6, 4), Dice::new(4, 6), Dice::new(5, 6)] {
        let board = white_bearing_off(&[(20, 1)]);

        let moves = legal_moves(Color::White, dice, &board);

        assert_eq!(moves.len(), 1, "{dice}");
        assert_eq!(result_set(&moves).len(), 1);
        assert!(moves[0].current_board().is_game_over());
    }
}

#[test]
fn test_bear_off_needs_all_home() {
    let mut board = white_bearing_off(&[(20, 2)]);
    board.set_point(10, Color::White, 1).set_off(Color::White, 12);

    let off = Movement::bear_off(Color::White, 20).unwrap();
    assert_eq!(off.validate(&board), Err(IllegalMove::NotAllHome { point: 10 }));
}

#[test]
fn test_enumerated_bear_off_clears_home() {
    let board = white_bearing_off(&[(22, 2), (23, 2)]);

    let moves = legal_moves(Color::White, Dice::new(5, 5), &board);

    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].len(), 4);
    assert_eq!(moves[0].current_board().off(Color::White), 15);
}

#[test]
fn test_black_bears_off_toward_zero() {
    let mut board = Board::empty();
    board
        .set_point(3, Color::Black, 1)
        .set_off(Color::Black, 14)
        .set_point(20, Color::White, 15);

    assert!(move_possible(Color::Black, 6, &board));
    let moves = legal_moves(Color::Black, Dice::new(6, 2), &board);

    assert!(moves.iter().any(|m| m.current_board().winner() == Some(Color::Black)));
}

// =============================================================================
// Game Over
// =============================================================================

#[test]
fn test_all_off_is_game_over() {
    let mut board = Board::empty();
    board.set_off(Color::Black, 15).set_point(7, Color::White, 15);

    assert!(board.is_game_over());
    assert_eq!(board.winner(), Some(Color::Black));
    assert!(!Board::new().is_game_over());
}
