//! Ability resolution - executing Dash and Smite on the board.
//!
//! The resolver re-checks mana and targeting itself, so a caller that
//! skipped its own checks still cannot drive mana negative or hit an
//! illegal target. Once those checks pass, mana is always spent, even if
//! the effect itself fizzles.

use serde::{Deserialize, Serialize};

use super::AbilityKind;
use crate::board::{Board, Piece, Position, BOARD_SIZE};
use crate::core::{IntentError, LogCategory, Player, Result, RulesConfig};
use crate::progression::LevelUp;
use crate::rules::ResolverContext;

/// What an ability did once its mana was paid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CastEffect {
    /// The piece moved forward.
    Dashed { from: Position, to: Position },
    /// Both landing cells were blocked; nothing moved.
    DashBlocked { from: Position },
    /// The target was destroyed.
    Smote { piece: Piece, at: Position },
}

/// Result of a successful cast.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastOutcome {
    pub kind: AbilityKind,
    pub caster: Player,
    pub mana_spent: u32,
    pub effect: CastEffect,
    pub level_ups: Vec<LevelUp>,
}

/// Executes abilities.
pub struct AbilityResolver;

impl AbilityResolver {
    /// Cast `kind` for `caster` at `target`.
    ///
    /// Errors leave everything untouched.
    pub fn cast(
        ctx: &mut ResolverContext<'_>,
        kind: AbilityKind,
        caster: Player,
        target: Position,
    ) -> Result<CastOutcome> {
        let cost = kind.cost(ctx.config);
        let available = ctx.progression.get(caster).mana;
        if available < cost {
            return Err(IntentError::InsufficientMana {
                kind,
                needed: cost,
                available,
            });
        }

        let filter = kind.target_filter();
        let Some(occupant) = ctx
            .board
            .piece_at(target)
            .copied()
            .filter(|p| filter.accepts(p.owner, caster))
        else {
            return Err(IntentError::NotAnAbilityTarget {
                row: target.row,
                col: target.col,
                kind,
            });
        };

        let paid = ctx.progression.get_mut(caster).spend(cost);
        debug_assert!(paid, "mana checked above");

        let mut level_ups = Vec::new();
        let effect = match kind {
            AbilityKind::Dash => Self::dash(ctx, caster, target),
            AbilityKind::Smite => {
                let effect = Self::smite(ctx, caster, target, occupant);
                let reward = ctx.config.rewards.smite;
                level_ups = ctx.grant_experience(caster, reward);
                effect
            }
        };

        log::debug!("{caster} cast {kind} at {target}: {effect:?}");

        Ok(CastOutcome {
            kind,
            caster,
            mana_spent: cost,
            effect,
            level_ups,
        })
    }

    /// Landing cell for a dash from `from`, or `None` if blocked.
    ///
    /// Tries `reach` rows forward (clamped to the board), then falls back
    /// to a single row forward. The column never changes.
    #[must_use]
    pub fn dash_destination(
        board: &Board,
        config: &RulesConfig,
        caster: Player,
        from: Position,
    ) -> Option<Position> {
        let forward = caster.forward();
        let last_row = i32::from(BOARD_SIZE) - 1;
        let reach = i32::from(config.dash_reach);

        let far_row = (i32::from(from.row) + forward * reach).clamp(0, last_row);
        let far = Position::try_new(far_row, i32::from(from.col))?;
        if board.cell(far).is_empty() {
            return Some(far);
        }

        let near = from.offset(forward, 0)?;
        board.cell(near).is_empty().then_some(near)
    }

    fn dash(ctx: &mut ResolverContext<'_>, caster: Player, from: Position) -> CastEffect {
        match Self::dash_destination(ctx.board, ctx.config, caster, from) {
            Some(to) => {
                ctx.board.relocate(from, to);
                ctx.log.push(
                    format!("{} used Dash! Unit surged forward.", caster.shout()),
                    LogCategory::Magic,
                );
                CastEffect::Dashed { from, to }
            }
            None => {
                ctx.log
                    .push("Dash failed! Path blocked. Mana consumed.", LogCategory::Magic);
                CastEffect::DashBlocked { from }
            }
        }
    }

    fn smite(ctx: &mut ResolverContext<'_>, caster: Player, at: Position, mut piece: Piece) -> CastEffect {
        ctx.board.take_piece(at);
        piece.alive = false;
        ctx.log.push(
            format!("{} used Smite! Enemy obliterated.", caster.shout()),
            LogCategory::Magic,
        );
        CastEffect::Smote { piece, at }
    }
}
