//! The game engine.

use crate::action::{Move, MoveError};
use crate::coord::Coord;
use crate::rules::{draw, win};
use crate::types::{GameState, Outcome, Player};
use tracing::{debug, instrument};

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game continues; play passes to the opponent.
    Continue,
    /// The move completed a winning line.
    Won(Player),
    /// The move filled the last cell without completing a line.
    Draw,
}

/// Game engine: owns the state and enforces the rules.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with an empty board; X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies the current player's mark at `(row, col)`.
    ///
    /// The move is validated before anything mutates: the game must still
    /// be in progress, the coordinate in range, and the cell empty. On
    /// success the win check runs before the draw check, so a move that
    /// both completes a line and fills the board reports the win. The turn
    /// passes to the opponent only when the game continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once a terminal outcome was reached.
    /// - [`MoveError::OutOfRange`] if either component exceeds 2. Callers
    ///   that pre-validate (the console prompt loop does) never see this.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, row: u8, col: u8) -> Result<MoveOutcome, MoveError> {
        if self.state.outcome().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let coord = Coord::new(row, col).ok_or(MoveError::OutOfRange(row, col))?;

        if !self.state.board().is_empty(coord) {
            return Err(MoveError::CellOccupied(coord));
        }

        let player = self.state.current_player();
        self.state.record(Move::new(player, coord));

        if win::wins_through(self.state.board(), coord) {
            debug!(%player, %coord, "winning line completed");
            self.state.set_outcome(Outcome::Won(player));
            return Ok(MoveOutcome::Won(player));
        }

        if draw::is_full(self.state.board()) {
            debug!("board full with no winner");
            self.state.set_outcome(Outcome::Draw);
            return Ok(MoveOutcome::Draw);
        }

        self.state.advance_turn();
        Ok(MoveOutcome::Continue)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
