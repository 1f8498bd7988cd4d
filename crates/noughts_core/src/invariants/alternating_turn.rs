//! Turn alternation invariant: X, O, X, O... starting with X.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: recorded moves strictly alternate players, X first.
///
/// While the game is in progress, the player to move is the one the
/// alternation expects next. Once terminal, the turn no longer advances,
/// so the current player is the one who made the final move.
pub struct AlternatingTurn;

impl Invariant<GameState> for AlternatingTurn {
    fn holds(state: &GameState) -> bool {
        let mut expected = Player::X;

        for mov in state.history() {
            if mov.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        state.outcome().is_terminal() || state.current_player() == expected
    }

    fn description() -> &'static str {
        "Moves alternate strictly between players, X first"
    }
}
