//! Interactive game session over a text console.

use crate::prompt::prompt_axis;
use noughts_core::{Coord, Game, MoveError, MoveOutcome};
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Drives one game session over a buffered reader/writer pair.
///
/// `main` wires this to stdin/stdout; tests drive it with in-memory
/// buffers.
pub struct Presenter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Presenter<R, W> {
    /// Creates a presenter over the given reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs one game to completion.
    ///
    /// Each turn renders the board, announces the player, prompts for row
    /// and column, and applies the move. An occupied cell keeps the turn
    /// with the same player. Returns the finished game so callers can
    /// inspect the final state.
    ///
    /// # Errors
    ///
    /// Fails only on console I/O errors, including end of input before the
    /// game finished.
    pub fn run(mut self) -> io::Result<Game> {
        let mut game = Game::new();

        loop {
            writeln!(self.output, "{}", game.state().board().display())?;
            writeln!(self.output, "Player {}", game.state().current_player())?;

            let row = prompt_axis(&mut self.input, &mut self.output, "Row", 0, Coord::MAX)?;
            let col = prompt_axis(&mut self.input, &mut self.output, "Column", 0, Coord::MAX)?;

            match game.apply_move(row, col) {
                Ok(MoveOutcome::Continue) => {
                    debug!(row, col, "move applied");
                }
                Ok(MoveOutcome::Won(player)) => {
                    writeln!(self.output, "{}", game.state().board().display())?;
                    writeln!(self.output, "Player {} wins!", player)?;
                    return Ok(game);
                }
                Ok(MoveOutcome::Draw) => {
                    writeln!(self.output, "{}", game.state().board().display())?;
                    writeln!(self.output, "It's a draw!")?;
                    return Ok(game);
                }
                Err(MoveError::CellOccupied(coord)) => {
                    debug!(%coord, "cell occupied, turn retried");
                    writeln!(self.output, "That cell is already occupied. Try again.")?;
                }
                // The prompts only yield 0-2 and the loop returns on a
                // terminal outcome, so no other rejection reaches here.
                Err(err) => {
                    debug!(%err, "move rejected");
                }
            }
        }
    }
}
