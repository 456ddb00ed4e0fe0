//! Grid addressing.
//!
//! Row 0 is the origin row, the first one the void takes. Rows count upward
//! toward the semiosphere, so "forward" is `row + 1` and "backward" is
//! `row - 1`.

use serde::{Deserialize, Serialize};

/// A `(row, column)` address on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Signed coordinates one step away in `direction`. May lie off the board.
    #[must_use]
    pub fn offset(self, direction: Direction) -> (i64, i64) {
        let (dr, dc) = direction.delta();
        (self.row as i64 + dr, self.column as i64 + dc)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A single-step movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Away from the void, toward the semiosphere.
    Forward,
    /// Toward the void.
    Backward,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Left,
        Direction::Right,
    ];

    /// `(row, column)` delta.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Forward => (1, 0),
            Direction::Backward => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}
