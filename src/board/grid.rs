//! The 8×8 grid.
//!
//! `Board` is pure storage plus bounds checking. It knows nothing about
//! which moves are legal; that lives in `rules` and `effects`.

use serde::{Deserialize, Serialize};

use super::piece::{Piece, Rank};
use super::position::{self, Position, BOARD_SIZE};
use crate::core::{PieceId, PieceIdAllocator, Player};

/// Number of home rows each side fills at setup.
pub const HOME_ROWS: u8 = 3;

/// One board square with its UI-facing flags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub position: Position,
    pub piece: Option<Piece>,
    /// Legal destination for the selected piece.
    pub highlighted: bool,
    /// Valid target for the active ability.
    pub targeted: bool,
}

impl Cell {
    #[must_use]
    pub const fn empty(position: Position) -> Self {
        Self {
            position,
            piece: None,
            highlighted: false,
            targeted: false,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    /// Owner of the piece in this cell, if any.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        self.piece.map(|p| p.owner)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    ids: PieceIdAllocator,
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        let cells = std::array::from_fn(|row| {
            std::array::from_fn(|col| Cell::empty(Position::new(row as u8, col as u8)))
        });
        Self {
            cells,
            ids: PieceIdAllocator::new(),
        }
    }

    /// The starting layout: Blue soldiers on the dark squares of rows 0-2,
    /// Red soldiers on the dark squares of rows 5-7.
    #[must_use]
    pub fn initialize() -> Self {
        let mut board = Self::empty();
        for pos in Position::all().filter(|p| p.is_playable()) {
            if pos.row < HOME_ROWS {
                board.spawn(pos, Player::Blue, Rank::Soldier);
            } else if pos.row >= BOARD_SIZE - HOME_ROWS {
                board.spawn(pos, Player::Red, Rank::Soldier);
            }
        }
        board
    }

    /// Check signed coordinates against the board bounds.
    #[must_use]
    pub fn is_in_bounds(row: i32, col: i32) -> bool {
        position::is_in_bounds(row, col)
    }

    #[must_use]
    pub fn cell(&self, pos: Position) -> &Cell {
        &self.cells[pos.row as usize][pos.col as usize]
    }

    fn cell_mut(&mut self, pos: Position) -> &mut Cell {
        &mut self.cells[pos.row as usize][pos.col as usize]
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cell(pos).piece.as_ref()
    }

    pub fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        self.cell_mut(pos).piece.as_mut()
    }

    /// Put a piece (or nothing) in a cell, returning what was there.
    pub fn set_piece_at(&mut self, pos: Position, piece: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.cell_mut(pos).piece, piece)
    }

    /// Remove and return the piece in a cell.
    pub fn take_piece(&mut self, pos: Position) -> Option<Piece> {
        self.set_piece_at(pos, None)
    }

    /// Place a fresh piece with a newly allocated ID.
    pub fn spawn(&mut self, pos: Position, owner: Player, rank: Rank) -> PieceId {
        let id = self.ids.alloc();
        self.set_piece_at(pos, Some(Piece::new(id, owner, rank)));
        id
    }

    /// Move whatever is at `from` to `to`. `to` must be empty.
    pub fn relocate(&mut self, from: Position, to: Position) -> Option<Piece> {
        let piece = self.take_piece(from)?;
        debug_assert!(self.cell(to).is_empty(), "relocating onto occupied cell {to}");
        self.set_piece_at(to, Some(piece));
        Some(piece)
    }

    pub fn set_highlight(&mut self, pos: Position, on: bool) {
        self.cell_mut(pos).highlighted = on;
    }

    pub fn set_target(&mut self, pos: Position, on: bool) {
        self.cell_mut(pos).targeted = on;
    }

    pub fn clear_highlights(&mut self) {
        self.cells_mut().for_each(|c| c.highlighted = false);
    }

    pub fn clear_targets(&mut self) {
        self.cells_mut().for_each(|c| c.targeted = false);
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; BOARD_SIZE as usize]> {
        self.cells.iter()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten()
    }

    /// Positions holding a piece of `player`.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.cells()
            .filter(move |c| c.owner() == Some(player))
            .map(|c| c.position)
    }

    /// Live pieces of `player` still on the board.
    #[must_use]
    pub fn count_pieces(&self, player: Player) -> usize {
        self.positions_of(player).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let glyph = match cell.piece {
                    Some(piece) => piece.glyph(),
                    None if cell.highlighted => '*',
                    None if cell.position.is_playable() => '.',
                    None => ' ',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
