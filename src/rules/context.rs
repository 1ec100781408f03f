//! Mutable view handed to the resolvers.

use crate::board::Board;
use crate::core::{GameLog, Player, RulesConfig};
use crate::progression::{LevelUp, ProgressionTracker};

/// Everything a move or ability may touch while it resolves.
///
/// The turn controller builds one of these from its own fields for the
/// duration of a single intent.
pub struct ResolverContext<'a> {
    pub config: &'a RulesConfig,
    pub board: &'a mut Board,
    pub progression: &'a mut ProgressionTracker,
    pub log: &'a mut GameLog,
}

impl<'a> ResolverContext<'a> {
    pub fn new(
        config: &'a RulesConfig,
        board: &'a mut Board,
        progression: &'a mut ProgressionTracker,
        log: &'a mut GameLog,
    ) -> Self {
        Self {
            config,
            board,
            progression,
            log,
        }
    }

    /// Grant experience to a player, logging any level-ups.
    pub fn grant_experience(&mut self, player: Player, amount: u32) -> Vec<LevelUp> {
        self.progression
            .grant_experience(player, amount, self.config, self.log)
    }
}
