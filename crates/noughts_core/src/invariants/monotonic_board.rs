//! Monotonic board invariant: marks never change once placed.

use super::Invariant;
use crate::types::{Board, Cell, GameState};

/// Invariant: the board is monotonic (no mark is ever overwritten).
///
/// Verified by replaying the move history onto a fresh board and
/// comparing against the actual one.
pub struct MonotonicBoard;

impl Invariant<GameState> for MonotonicBoard {
    fn holds(state: &GameState) -> bool {
        let mut replayed = Board::new();

        for mov in state.history() {
            // The cell must be empty before each placement.
            if !replayed.is_empty(mov.coord) {
                return false;
            }
            replayed.set(mov.coord, Cell::Occupied(mov.player));
        }

        replayed == *state.board()
    }

    fn description() -> &'static str {
        "A placed mark is never overwritten"
    }
}
