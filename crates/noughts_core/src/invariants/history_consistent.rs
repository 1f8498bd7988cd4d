//! History consistency invariant: state, board, and outcome agree.

use super::Invariant;
use crate::rules::{draw, win};
use crate::types::{Cell, GameState, Outcome};

/// Invariant: the history accounts for every mark on the board, and the
/// recorded outcome matches what the rules derive from the board.
pub struct HistoryConsistent;

impl Invariant<GameState> for HistoryConsistent {
    fn holds(state: &GameState) -> bool {
        let occupied = state
            .board()
            .cells()
            .iter()
            .filter(|c| **c != Cell::Empty)
            .count();

        if occupied != state.history().len() {
            return false;
        }

        match state.outcome() {
            Outcome::Won(player) => win::winner(state.board()) == Some(player),
            Outcome::Draw => {
                draw::is_full(state.board()) && win::winner(state.board()).is_none()
            }
            Outcome::InProgress => win::winner(state.board()).is_none(),
        }
    }

    fn description() -> &'static str {
        "History matches the board and the outcome matches the rules"
    }
}
