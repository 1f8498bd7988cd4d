//! Win detection.

use crate::coord::{Coord, Line};
use crate::types::{Board, Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether the mark at `coord` completes a winning line.
///
/// Only the row, the column, and any diagonal passing through `coord` are
/// examined - a win can only be completed by the move just made.
#[instrument(skip(board))]
pub fn wins_through(board: &Board, coord: Coord) -> bool {
    Line::through(coord).any(|line| line_owner(board, line).is_some())
}

/// Scans the whole board for a winner.
///
/// Slower than [`wins_through`]; used where no last move is at hand, such
/// as replay validation.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Line::iter().find_map(|line| line_owner(board, line))
}

/// The player holding all three cells of `line`, if any.
fn line_owner(board: &Board, line: Line) -> Option<Player> {
    let [a, b, c] = line.cells();
    match (board.get(a), board.get(b), board.get(c)) {
        (Cell::Occupied(p), Cell::Occupied(q), Cell::Occupied(r)) if p == q && q == r => Some(p),
        _ => None,
    }
}
