//! Ability definitions.

use serde::{Deserialize, Serialize};

use super::TargetFilter;
use crate::core::RulesConfig;

/// A mana-gated action taken instead of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Push one of your own pieces straight forward.
    Dash,
    /// Destroy an enemy piece.
    Smite,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 2] = [AbilityKind::Dash, AbilityKind::Smite];

    /// Mana cost under the given ruleset.
    #[must_use]
    pub fn cost(self, config: &RulesConfig) -> u32 {
        match self {
            AbilityKind::Dash => config.dash_cost,
            AbilityKind::Smite => config.smite_cost,
        }
    }

    /// Which cells this ability may be aimed at.
    #[must_use]
    pub const fn target_filter(self) -> TargetFilter {
        match self {
            AbilityKind::Dash => TargetFilter::OwnPiece,
            AbilityKind::Smite => TargetFilter::EnemyPiece,
        }
    }

    /// Upper-case name used in log messages.
    #[must_use]
    pub const fn shout(self) -> &'static str {
        match self {
            AbilityKind::Dash => "DASH",
            AbilityKind::Smite => "SMITE",
        }
    }
}

impl std::fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AbilityKind::Dash => write!(f, "Dash"),
            AbilityKind::Smite => write!(f, "Smite"),
        }
    }
}
