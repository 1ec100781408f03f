//! Rules configuration.
//!
//! Every tunable number of the ruleset lives in `RulesConfig`: experience
//! rewards, ability costs, starting progress and level-up growth. The
//! default is the canonical game; tests and variants adjust it with the
//! `with_*` builder methods.

use serde::{Deserialize, Serialize};

/// Experience granted for rule events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    /// Jump-capturing an enemy piece.
    pub capture: u32,
    /// Promoting a soldier to king.
    pub promotion: u32,
    /// Destroying an enemy piece with Smite.
    pub smite: u32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            capture: 50,
            promotion: 20,
            smite: 30,
        }
    }
}

/// Progress record values at game start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingProgress {
    pub level: u32,
    pub xp_to_next: u32,
    pub mana: u32,
    pub max_mana: u32,
}

impl Default for StartingProgress {
    fn default() -> Self {
        Self {
            level: 1,
            xp_to_next: 100,
            mana: 2,
            max_mana: 5,
        }
    }
}

/// Complete ruleset configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Experience rewards.
    pub rewards: Rewards,

    /// Mana cost of Dash.
    pub dash_cost: u32,

    /// Mana cost of Smite.
    pub smite_cost: u32,

    /// Rows Dash tries to advance before falling back to one row.
    pub dash_reach: u8,

    /// Progress values for both players at game start.
    pub starting: StartingProgress,

    /// Max mana gained per level.
    pub mana_per_level: u32,

    /// Threshold growth per level as a fraction `(numerator, denominator)`.
    ///
    /// The new threshold is `floor(old * numerator / denominator)`.
    pub threshold_growth: (u32, u32),

    /// Mana regenerated by the player about to move.
    pub mana_regen: u32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            rewards: Rewards::default(),
            dash_cost: 2,
            smite_cost: 4,
            dash_reach: 2,
            starting: StartingProgress::default(),
            mana_per_level: 2,
            threshold_growth: (3, 2),
            mana_regen: 1,
        }
    }
}

impl RulesConfig {
    /// Create the canonical ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the experience rewards.
    #[must_use]
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    /// Set both ability costs.
    #[must_use]
    pub fn with_costs(mut self, dash: u32, smite: u32) -> Self {
        self.dash_cost = dash;
        self.smite_cost = smite;
        self
    }

    /// Set the starting progress values.
    #[must_use]
    pub fn with_starting(mut self, starting: StartingProgress) -> Self {
        self.starting = starting;
        self
    }

    /// Set the threshold growth fraction.
    #[must_use]
    pub fn with_threshold_growth(mut self, numerator: u32, denominator: u32) -> Self {
        assert!(denominator > 0, "Threshold growth denominator must be positive");
        self.threshold_growth = (numerator, denominator);
        self
    }

    /// Grow a level threshold by the configured factor, flooring.
    #[must_use]
    pub fn grow_threshold(&self, threshold: u32) -> u32 {
        let (num, den) = self.threshold_growth;
        let grown = u64::from(threshold) * u64::from(num) / u64::from(den);
        u32::try_from(grown).unwrap_or(u32::MAX)
    }
}
