//! First-class move actions and their failure modes.
//!
//! Moves are domain events, not side effects. The engine records each one
//! in history, so a finished game can be replayed and audited.

use crate::coord::Coord;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark goes.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Error returned when a move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The coordinate lies outside the 3x3 board.
    #[display("Coordinate ({}, {}) is out of range", _0, _1)]
    OutOfRange(u8, u8),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// The game has already reached a terminal outcome.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
