//! Scenario tests for the game engine.

use noughts_core::invariants::{GameInvariants, InvariantSet};
use noughts_core::{Cell, Coord, Game, MoveError, MoveOutcome, Outcome, Player};

/// Applies a sequence of moves, asserting each one is legal.
fn play(game: &mut Game, moves: &[(u8, u8)]) {
    for &(row, col) in moves {
        game.apply_move(row, col).expect("legal move");
    }
}

#[test]
fn test_row_win() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

    let outcome = game.apply_move(0, 2).unwrap();
    assert_eq!(outcome, MoveOutcome::Won(Player::X));
    assert_eq!(game.state().outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_diagonal_win() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2)]);

    let outcome = game.apply_move(2, 2).unwrap();
    assert_eq!(outcome, MoveOutcome::Won(Player::X));
}

#[test]
fn test_draw() {
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0),
            (1, 1),
            (0, 2),
            (0, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
        ],
    );

    let outcome = game.apply_move(2, 2).unwrap();
    assert_eq!(outcome, MoveOutcome::Draw);
    assert_eq!(game.state().outcome(), Outcome::Draw);
}

#[test]
fn test_win_takes_precedence_over_draw() {
    // The ninth move both fills the board and completes the anti-diagonal.
    let mut game = Game::new();
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (1, 1),
            (2, 1),
            (0, 2),
            (2, 2),
            (1, 0),
            (1, 2),
        ],
    );

    let outcome = game.apply_move(2, 0).unwrap();
    assert_eq!(outcome, MoveOutcome::Won(Player::X));
    assert_eq!(game.state().outcome(), Outcome::Won(Player::X));
}

#[test]
fn test_occupied_cell_rejected_and_turn_unchanged() {
    let mut game = Game::new();
    game.apply_move(1, 1).unwrap();
    assert_eq!(game.state().current_player(), Player::O);

    // O re-attempts X's cell; rejected, O's turn is retried.
    let err = game.apply_move(1, 1).unwrap_err();
    assert_eq!(err, MoveError::CellOccupied(Coord::new(1, 1).unwrap()));
    assert_eq!(game.state().current_player(), Player::O);
    assert_eq!(
        game.state().board().get(Coord::new(1, 1).unwrap()),
        Cell::Occupied(Player::X)
    );
    assert_eq!(game.state().history().len(), 1);

    // The retried move goes through.
    assert_eq!(game.apply_move(0, 0).unwrap(), MoveOutcome::Continue);
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_out_of_range_rejected() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(3, 0).unwrap_err(), MoveError::OutOfRange(3, 0));
    assert_eq!(game.apply_move(0, 5).unwrap_err(), MoveError::OutOfRange(0, 5));
    assert_eq!(game.state().history().len(), 0);
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_no_moves_after_win() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(game.state().outcome(), Outcome::Won(Player::X));

    assert_eq!(game.apply_move(2, 2).unwrap_err(), MoveError::GameOver);
    assert_eq!(game.state().history().len(), 5);
}

#[test]
fn test_turn_alternation() {
    let mut game = Game::new();
    assert_eq!(game.state().current_player(), Player::X);

    game.apply_move(0, 0).unwrap();
    assert_eq!(game.state().current_player(), Player::O);

    game.apply_move(1, 1).unwrap();
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_invariants_hold_through_full_games() {
    // A won game.
    let mut game = Game::new();
    for &(row, col) in &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        game.apply_move(row, col).unwrap();
        assert!(GameInvariants::check_all(game.state()).is_ok());
    }

    // A drawn game.
    let mut game = Game::new();
    for &(row, col) in &[
        (0, 0),
        (1, 1),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ] {
        game.apply_move(row, col).unwrap();
        assert!(GameInvariants::check_all(game.state()).is_ok());
    }
}

#[test]
fn test_state_serializes_round_trip() {
    let mut game = Game::new();
    play(&mut game, &[(0, 0), (1, 0), (0, 1)]);

    let json = serde_json::to_string(game.state()).unwrap();
    let restored: noughts_core::GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(&restored, game.state());
}
