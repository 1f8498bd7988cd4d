//! Board coordinates and the lines that win the game.

use serde::{Deserialize, Serialize};

/// A validated (row, column) pair on the 3x3 board.
///
/// Both components are in `0..=2`; a `Coord` that exists is in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

/// Shorthand constructor for the line tables below.
const fn at(row: u8, col: u8) -> Coord {
    Coord { row, col }
}

impl Coord {
    /// Highest valid row or column index.
    pub const MAX: u8 = 2;

    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        at(0, 0),
        at(0, 1),
        at(0, 2),
        at(1, 0),
        at(1, 1),
        at(1, 2),
        at(2, 0),
        at(2, 1),
        at(2, 2),
    ];

    /// Creates a coordinate, rejecting out-of-range components.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row <= Self::MAX && col <= Self::MAX).then_some(Self { row, col })
    }

    /// Returns the row index.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Row-major index into the board's cell array.
    pub(crate) fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight lines that decide the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    MiddleColumn,
    /// Column 2.
    RightColumn,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Line {
    /// The three coordinates this line covers.
    pub const fn cells(self) -> [Coord; 3] {
        match self {
            Line::TopRow => [at(0, 0), at(0, 1), at(0, 2)],
            Line::MiddleRow => [at(1, 0), at(1, 1), at(1, 2)],
            Line::BottomRow => [at(2, 0), at(2, 1), at(2, 2)],
            Line::LeftColumn => [at(0, 0), at(1, 0), at(2, 0)],
            Line::MiddleColumn => [at(0, 1), at(1, 1), at(2, 1)],
            Line::RightColumn => [at(0, 2), at(1, 2), at(2, 2)],
            Line::MainDiagonal => [at(0, 0), at(1, 1), at(2, 2)],
            Line::AntiDiagonal => [at(0, 2), at(1, 1), at(2, 0)],
        }
    }

    /// Lines passing through the given coordinate.
    ///
    /// Every cell lies on its row and its column; corners and the center
    /// additionally lie on one or both diagonals.
    pub fn through(coord: Coord) -> impl Iterator<Item = Line> {
        <Line as strum::IntoEnumIterator>::iter().filter(move |line| line.cells().contains(&coord))
    }
}
