//! Experience, levels and mana per player.

use serde::{Deserialize, Serialize};

use crate::core::{GameLog, LogCategory, Player, PlayerMap, RulesConfig};

/// One player's progression record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub xp: u32,
    /// Experience required for the next level.
    pub xp_to_next: u32,
    pub mana: u32,
    pub max_mana: u32,
}

impl PlayerProgress {
    /// Starting record for the given ruleset.
    #[must_use]
    pub fn starting(config: &RulesConfig) -> Self {
        let s = config.starting;
        Self {
            level: s.level,
            xp: 0,
            xp_to_next: s.xp_to_next,
            mana: s.mana,
            max_mana: s.max_mana,
        }
    }

    /// Whether `cost` mana is available.
    #[must_use]
    pub fn can_afford(&self, cost: u32) -> bool {
        self.mana >= cost
    }

    /// Deduct mana. Returns false, changing nothing, if there isn't enough.
    pub fn spend(&mut self, cost: u32) -> bool {
        match self.mana.checked_sub(cost) {
            Some(left) => {
                self.mana = left;
                true
            }
            None => false,
        }
    }
}

/// A single level gained during a grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUp {
    pub player: Player,
    pub new_level: u32,
    pub new_max_mana: u32,
}

/// Owns both players' progress records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionTracker {
    progress: PlayerMap<PlayerProgress>,
}

impl ProgressionTracker {
    /// Both players at the starting record.
    #[must_use]
    pub fn new(config: &RulesConfig) -> Self {
        Self {
            progress: PlayerMap::with_value(PlayerProgress::starting(config)),
        }
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &PlayerProgress {
        &self.progress[player]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut PlayerProgress {
        &mut self.progress[player]
    }

    /// Both records.
    #[must_use]
    pub fn all(&self) -> &PlayerMap<PlayerProgress> {
        &self.progress
    }

    /// Add experience, levelling up as many times as the total allows.
    ///
    /// Each level-up raises max mana, refills mana, grows the threshold
    /// and logs a level entry.
    pub fn grant_experience(
        &mut self,
        player: Player,
        amount: u32,
        config: &RulesConfig,
        log: &mut GameLog,
    ) -> Vec<LevelUp> {
        let stats = &mut self.progress[player];
        stats.xp = stats.xp.saturating_add(amount);

        let mut level_ups = Vec::new();
        // A zero threshold would never drain; treat it as a cap.
        while stats.xp_to_next > 0 && stats.xp >= stats.xp_to_next {
            stats.level += 1;
            stats.xp -= stats.xp_to_next;
            stats.xp_to_next = config.grow_threshold(stats.xp_to_next);
            stats.max_mana += config.mana_per_level;
            stats.mana = stats.max_mana;

            log.push(
                format!(
                    "{} Leveled Up to {}! Max Mana increased.",
                    player.shout(),
                    stats.level
                ),
                LogCategory::Level,
            );
            log::debug!("{player} reached level {}", stats.level);

            level_ups.push(LevelUp {
                player,
                new_level: stats.level,
                new_max_mana: stats.max_mana,
            });
        }

        level_ups
    }

    /// Turn-handoff mana regeneration, capped at max mana.
    pub fn regenerate(&mut self, player: Player, config: &RulesConfig) {
        let stats = &mut self.progress[player];
        if stats.mana < stats.max_mana {
            stats.mana = (stats.mana + config.mana_regen).min(stats.max_mana);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (ProgressionTracker, RulesConfig, GameLog) {
        let config = RulesConfig::default();
        (ProgressionTracker::new(&config), config, GameLog::new())
    }

    #[test]
    fn test_starting_record() {
        let (tracker, _, _) = setup();
        for player in Player::ALL {
            let p = tracker.get(player);
            assert_eq!((p.level, p.xp, p.xp_to_next), (1, 0, 100));
            assert_eq!((p.mana, p.max_mana), (2, 5));
        }
    }

    #[test]
    fn test_grant_below_threshold() {
        let (mut tracker, config, mut log) = setup();
        let ups = tracker.grant_experience(Player::Red, 50, &config, &mut log);

        assert!(ups.is_empty());
        assert_eq!(tracker.get(Player::Red).xp, 50);
        assert_eq!(tracker.get(Player::Red).level, 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_single_level_up() {
        let (mut tracker, config, mut log) = setup();
        tracker.grant_experience(Player::Blue, 120, &config, &mut log);

        let p = tracker.get(Player::Blue);
        assert_eq!(p.level, 2);
        assert_eq!(p.xp, 20);
        assert_eq!(p.xp_to_next, 150);
        assert_eq!(p.max_mana, 7);
        assert_eq!(p.mana, 7);
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.last().map(|e| e.message.as_str()),
            Some("BLUE Leveled Up to 2! Max Mana increased.")
        );
        // Other player untouched
        assert_eq!(tracker.get(Player::Red).level, 1);
    }

    #[test]
    fn test_multi_level_up_in_one_grant() {
        let (mut tracker, config, mut log) = setup();
        // 100 + 150 + 225 = 475 consumed, 25 left over
        let ups = tracker.grant_experience(Player::Red, 500, &config, &mut log);

        assert_eq!(ups.len(), 3);
        let p = tracker.get(Player::Red);
        assert_eq!(p.level, 4);
        assert_eq!(p.xp, 25);
        assert_eq!(p.xp_to_next, 337);
        assert_eq!(p.max_mana, 11);
        assert_eq!(p.mana, 11);
        assert_eq!(log.of_category(LogCategory::Level).count(), 3);
    }

    #[test]
    fn test_regenerate_caps_at_max() {
        let (mut tracker, config, _) = setup();
        for _ in 0..10 {
            tracker.regenerate(Player::Red, &config);
        }
        assert_eq!(tracker.get(Player::Red).mana, 5);
    }

    #[test]
    fn test_spend() {
        let (mut tracker, _, _) = setup();
        let p = tracker.get_mut(Player::Red);
        assert!(!p.spend(4));
        assert_eq!(p.mana, 2);
        assert!(p.spend(2));
        assert_eq!(p.mana, 0);
    }
}
