//! Board coordinates.

use serde::{Deserialize, Serialize};

/// Board side length.
pub const BOARD_SIZE: u8 = 8;

/// A cell coordinate, 0-indexed from the top-left. Always in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position from known-good coordinates.
    ///
    /// Panics if either coordinate is off the board. Use `try_new` for
    /// untrusted input.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "Position out of bounds");
        Self { row, col }
    }

    /// Create a position from signed coordinates, rejecting anything off
    /// the board.
    ///
    /// ```
    /// use rpg_checkers::board::Position;
    ///
    /// assert_eq!(Position::try_new(2, 3), Some(Position::new(2, 3)));
    /// assert_eq!(Position::try_new(-1, 3), None);
    /// assert_eq!(Position::try_new(2, 8), None);
    /// ```
    #[must_use]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if is_in_bounds(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Step by a signed delta, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::try_new(i32::from(self.row) + d_row, i32::from(self.col) + d_col)
    }

    /// Dark squares (row + col odd) are the only ones pieces start on.
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// Absolute row distance to another position.
    #[must_use]
    pub fn row_distance(self, other: Position) -> u8 {
        self.row.abs_diff(other.row)
    }

    /// Cell halfway between two positions two diagonal steps apart.
    #[must_use]
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// Iterate over every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Check signed coordinates against the board bounds.
#[must_use]
pub fn is_in_bounds(row: i32, col: i32) -> bool {
    let size = i32::from(BOARD_SIZE);
    (0..size).contains(&row) && (0..size).contains(&col)
}
