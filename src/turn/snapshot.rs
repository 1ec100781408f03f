//! Read-only game snapshots for presenters.

use serde::{Deserialize, Serialize};

use super::Phase;
use crate::board::{Board, Position};
use crate::core::{GameLog, Player, PlayerMap};
use crate::effects::AbilityKind;
use crate::progression::PlayerProgress;
use crate::rules::GameResult;

/// An owned, immutable copy of everything a presenter needs to draw.
///
/// `revision` increases with every accepted intent, so a poller only has
/// to compare one number to know whether to redraw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub revision: u64,
    pub phase: Phase,
    pub board: Board,
    pub current_player: Player,
    pub selected: Option<Position>,
    pub active_ability: Option<AbilityKind>,
    pub progress: PlayerMap<PlayerProgress>,
    pub outcome: Option<GameResult>,
    pub winner: Option<Player>,
    pub log: GameLog,
}

impl GameSnapshot {
    /// Whether two snapshots describe the same game state, ignoring revision.
    #[must_use]
    pub fn same_state(&self, other: &GameSnapshot) -> bool {
        Self {
            revision: other.revision,
            ..self.clone()
        } == *other
    }
}
