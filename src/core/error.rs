//! Rejected intents.
//!
//! Every intent that the engine refuses returns an `IntentError` and
//! leaves the game state untouched. Presenters are free to ignore these;
//! they exist so callers and tests can tell *why* a click did nothing.

use thiserror::Error;

use super::Player;
use crate::effects::AbilityKind;

pub type Result<T, E = IntentError> = std::result::Result<T, E>;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error("the game is over")]
    GameOver,

    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("cell ({row}, {col}) holds no piece of {player}")]
    NotSelectable { row: u8, col: u8, player: Player },

    #[error("cell ({row}, {col}) is not a legal destination")]
    NotAMoveTarget { row: u8, col: u8 },

    #[error("cell ({row}, {col}) is not a valid {kind} target")]
    NotAnAbilityTarget { row: u8, col: u8, kind: AbilityKind },

    #[error("{kind} needs {needed} mana, {available} available")]
    InsufficientMana {
        kind: AbilityKind,
        needed: u32,
        available: u32,
    },

    #[error("no ability is being cast")]
    NoActiveAbility,
}
