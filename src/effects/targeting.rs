//! Ability targeting.
//!
//! A `TargetFilter` is a predicate over cells relative to the acting
//! player. `TargetSelector` evaluates it across the board and marks the
//! matching cells so the presenter can show them.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Position};
use crate::core::Player;

/// Which cells an ability may be aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetFilter {
    /// A cell holding one of the acting player's pieces.
    OwnPiece,
    /// A cell holding an opponent's piece.
    EnemyPiece,
}

impl TargetFilter {
    /// Whether a piece owned by `owner` is a valid target for `acting`.
    #[must_use]
    pub fn accepts(self, owner: Player, acting: Player) -> bool {
        match self {
            TargetFilter::OwnPiece => owner == acting,
            TargetFilter::EnemyPiece => owner != acting,
        }
    }

    /// Empty cells never match.
    #[must_use]
    pub fn matches(self, cell: &Cell, acting: Player) -> bool {
        cell.owner().is_some_and(|owner| self.accepts(owner, acting))
    }
}

/// Evaluates a filter for one acting player.
#[derive(Clone, Copy, Debug)]
pub struct TargetSelector {
    filter: TargetFilter,
    acting: Player,
}

impl TargetSelector {
    pub fn new(filter: TargetFilter, acting: Player) -> Self {
        Self { filter, acting }
    }

    /// Whether a single position is a valid target.
    #[must_use]
    pub fn is_valid(&self, board: &Board, pos: Position) -> bool {
        self.filter.matches(board.cell(pos), self.acting)
    }

    /// All valid targets in row-major order.
    #[must_use]
    pub fn valid_targets(&self, board: &Board) -> Vec<Position> {
        board
            .cells()
            .filter(|c| self.filter.matches(c, self.acting))
            .map(|c| c.position)
            .collect()
    }

    /// Replace every cell's flags: move highlights off, target flags on
    /// exactly the valid targets. Returns the number of targets.
    pub fn mark(&self, board: &mut Board) -> usize {
        board.clear_highlights();
        board.clear_targets();
        let targets = self.valid_targets(board);
        for &pos in &targets {
            board.set_target(pos, true);
        }
        targets.len()
    }
}
