//! Board model: coordinates, pieces, cells and the 8×8 grid.
//!
//! Only dark squares (row + col odd) are ever occupied at setup, and
//! diagonal moves keep pieces on them.

mod position;
mod piece;
mod grid;

pub use position::{is_in_bounds, Position, BOARD_SIZE};
pub use piece::{Piece, Rank};
pub use grid::{Board, Cell, HOME_ROWS};
