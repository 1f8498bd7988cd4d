//! Pure noughts & crosses game logic.
//!
//! This crate holds the whole game engine and nothing else: domain types,
//! move validation, win/draw rules, and the invariants the engine upholds.
//! It performs no I/O, so every rule is unit-testable in isolation; the
//! console front end lives in a separate crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coord;
mod game;
pub mod invariants;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use coord::{Coord, Line};
pub use game::{Game, MoveOutcome};
pub use types::{Board, Cell, GameState, Outcome, Player};
