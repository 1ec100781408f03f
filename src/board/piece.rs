//! Pieces on the board.

use serde::{Deserialize, Serialize};

use crate::core::{PieceId, Player};

/// Piece rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Moves and captures forward only.
    Soldier,
    /// Moves and captures in both row directions.
    King,
}

/// A single piece. Lives in exactly one cell until it is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub owner: Player,
    pub rank: Rank,
    /// Cleared on the copy handed back when a piece is captured or smitten.
    pub alive: bool,
}

impl Piece {
    /// Create a live piece.
    #[must_use]
    pub const fn new(id: PieceId, owner: Player, rank: Rank) -> Self {
        Self {
            id,
            owner,
            rank,
            alive: true,
        }
    }

    #[must_use]
    pub const fn soldier(id: PieceId, owner: Player) -> Self {
        Self::new(id, owner, Rank::Soldier)
    }

    #[must_use]
    pub const fn is_king(&self) -> bool {
        matches!(self.rank, Rank::King)
    }

    /// Row directions this piece may move in.
    #[must_use]
    pub fn row_directions(&self) -> &'static [i32] {
        match (self.rank, self.owner) {
            (Rank::King, _) => &[-1, 1],
            (Rank::Soldier, Player::Red) => &[-1],
            (Rank::Soldier, Player::Blue) => &[1],
        }
    }

    /// Promote to king. Returns false if already a king.
    pub fn promote(&mut self) -> bool {
        if self.is_king() {
            return false;
        }
        self.rank = Rank::King;
        true
    }

    /// Glyph for text rendering: `r`/`b` soldiers, `R`/`B` kings.
    #[must_use]
    pub const fn glyph(&self) -> char {
        match (self.owner, self.rank) {
            (Player::Red, Rank::Soldier) => 'r',
            (Player::Red, Rank::King) => 'R',
            (Player::Blue, Rank::Soldier) => 'b',
            (Player::Blue, Rank::King) => 'B',
        }
    }
}
