//! Turn state: whose move it is and what they are in the middle of.

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::core::Player;
use crate::effects::AbilityKind;
use crate::rules::GameResult;

/// Where the turn controller is in its input cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to pick a piece or an ability.
    IdleSelection,
    /// A piece is selected and its destinations are highlighted.
    PieceSelected,
    /// An ability is active and its targets are flagged.
    AbilityTargeting,
    /// The game has a result. All input is ignored.
    GameOver,
}

/// The controller's only global mutable state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    pub current: Player,
    pub selected: Option<Position>,
    pub active_ability: Option<AbilityKind>,
    pub outcome: Option<GameResult>,
}

impl Default for TurnState {
    fn default() -> Self {
        Self {
            current: Player::Red,
            selected: None,
            active_ability: None,
            outcome: None,
        }
    }
}

impl TurnState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::GameOver
        } else if self.active_ability.is_some() {
            Phase::AbilityTargeting
        } else if self.selected.is_some() {
            Phase::PieceSelected
        } else {
            Phase::IdleSelection
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.outcome.and_then(|o| o.winner())
    }
}
