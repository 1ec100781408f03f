//! The turn controller: the engine's public contract.
//!
//! A presenter sends intents (`select_or_act`, `activate_ability`,
//! `cancel_ability`, `reset_game`) and reads state back through the query
//! methods or a `GameSnapshot`. Every intent runs to completion before it
//! returns. A rejected intent returns an `IntentError` and changes nothing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::{GameSnapshot, Phase, TurnState};
use crate::board::{Board, Position};
use crate::core::{GameLog, IntentError, LogCategory, Player, PlayerMap, Result, RulesConfig};
use crate::effects::{AbilityKind, AbilityResolver, CastOutcome, TargetSelector};
use crate::progression::{PlayerProgress, ProgressionTracker};
use crate::rules::{evaluate_outcome, GameResult, MoveCandidate, MoveOutcome, MovementResolver, ResolverContext};

/// What an accepted intent did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentOutcome {
    /// A piece was selected and `moves` destinations highlighted.
    Selected { at: Position, moves: usize },
    /// The selected piece moved. The turn has passed.
    Moved(MoveOutcome),
    /// An ability is now waiting for a target.
    AbilityActivated { kind: AbilityKind, targets: usize },
    /// The active ability was put away without spending mana.
    AbilityCancelled(AbilityKind),
    /// An ability was cast. The turn has passed.
    Cast(CastOutcome),
    /// The game was restarted.
    Reset,
}

/// Owns all game state and mutates it one intent at a time.
#[derive(Clone, Debug)]
pub struct TurnController {
    config: RulesConfig,
    board: Board,
    progression: ProgressionTracker,
    log: GameLog,
    turn: TurnState,
    /// Candidates for the selected piece, keyed by destination.
    pending_moves: FxHashMap<Position, MoveCandidate>,
    revision: u64,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// A new game under the canonical rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// A new game under a custom ruleset.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self::from_board(Board::initialize(), config)
    }

    /// A game starting from an arbitrary position, Red to move.
    ///
    /// `reset_game` still returns to the standard layout.
    #[must_use]
    pub fn from_board(board: Board, config: RulesConfig) -> Self {
        let mut controller = Self {
            progression: ProgressionTracker::new(&config),
            config,
            board,
            log: GameLog::new(),
            turn: TurnState::default(),
            pending_moves: FxHashMap::default(),
            revision: 0,
        };
        controller.log_start();
        controller
    }

    // === Intents ===

    /// Handle a click on a cell, dispatching on the current phase.
    pub fn select_or_act(&mut self, row: i32, col: i32) -> Result<IntentOutcome> {
        let result = self.dispatch_click(row, col);
        self.settle("select_or_act", result)
    }

    /// Activate an ability, or cancel it if it is already active.
    pub fn activate_ability(&mut self, kind: AbilityKind) -> Result<IntentOutcome> {
        let result = self.try_activate(kind);
        self.settle("activate_ability", result)
    }

    /// Put the active ability away without spending mana or ending the turn.
    pub fn cancel_ability(&mut self) -> Result<IntentOutcome> {
        let result = self.try_cancel();
        self.settle("cancel_ability", result)
    }

    /// Restart from the standard layout. Accepted in any phase.
    pub fn reset_game(&mut self) -> IntentOutcome {
        self.board = Board::initialize();
        self.progression = ProgressionTracker::new(&self.config);
        self.log = GameLog::new();
        self.turn = TurnState::default();
        self.pending_moves.clear();
        self.log_start();
        log::info!("game reset");
        self.revision += 1;
        IntentOutcome::Reset
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.turn.phase()
    }

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.turn.current
    }

    #[must_use]
    pub fn selected(&self) -> Option<Position> {
        self.turn.selected
    }

    #[must_use]
    pub fn active_ability(&self) -> Option<AbilityKind> {
        self.turn.active_ability
    }

    #[must_use]
    pub fn progress(&self, player: Player) -> &PlayerProgress {
        self.progression.get(player)
    }

    #[must_use]
    pub fn all_progress(&self) -> &PlayerMap<PlayerProgress> {
        self.progression.all()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.turn.outcome
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.turn.winner()
    }

    #[must_use]
    pub fn log(&self) -> &GameLog {
        &self.log
    }

    /// Number of accepted intents so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the current player could activate `kind` right now.
    #[must_use]
    pub fn can_activate(&self, kind: AbilityKind) -> bool {
        !self.turn.is_over() && self.progress(self.turn.current).can_afford(kind.cost(&self.config))
    }

    /// Whether clicking this cell would do anything.
    #[must_use]
    pub fn is_interactable(&self, row: i32, col: i32) -> bool {
        let Some(pos) = Position::try_new(row, col) else {
            return false;
        };
        let cell = self.board.cell(pos);

        match self.turn.phase() {
            Phase::GameOver => false,
            Phase::AbilityTargeting => cell.targeted,
            Phase::IdleSelection | Phase::PieceSelected => {
                cell.owner() == Some(self.turn.current) || cell.highlighted
            }
        }
    }

    /// An owned copy of the full state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            revision: self.revision,
            phase: self.turn.phase(),
            board: self.board.clone(),
            current_player: self.turn.current,
            selected: self.turn.selected,
            active_ability: self.turn.active_ability,
            progress: self.progression.all().clone(),
            outcome: self.turn.outcome,
            winner: self.turn.winner(),
            log: self.log.clone(),
        }
    }

    // === Internals ===

    fn context(&mut self) -> ResolverContext<'_> {
        ResolverContext::new(
            &self.config,
            &mut self.board,
            &mut self.progression,
            &mut self.log,
        )
    }

    fn settle(&mut self, intent: &str, result: Result<IntentOutcome>) -> Result<IntentOutcome> {
        match &result {
            Ok(outcome) => {
                self.revision += 1;
                log::debug!("{intent} accepted: {outcome:?}");
            }
            Err(err) => log::debug!("{intent} ignored: {err}"),
        }
        result
    }

    fn log_start(&mut self) {
        self.log.push("Game Started! Red moves first.", LogCategory::Info);
    }

    fn dispatch_click(&mut self, row: i32, col: i32) -> Result<IntentOutcome> {
        if self.turn.is_over() {
            return Err(IntentError::GameOver);
        }
        let pos = Position::try_new(row, col).ok_or(IntentError::OutOfBounds { row, col })?;

        if let Some(kind) = self.turn.active_ability {
            return self.cast_at(kind, pos);
        }

        let cell = self.board.cell(pos);
        if cell.owner() == Some(self.turn.current) {
            return Ok(self.select(pos));
        }

        if self.turn.selected.is_some() && cell.highlighted {
            if let Some(&candidate) = self.pending_moves.get(&pos) {
                return self.make_move(candidate);
            }
        }

        if self.turn.selected.is_some() {
            Err(IntentError::NotAMoveTarget { row: pos.row, col: pos.col })
        } else {
            Err(IntentError::NotSelectable {
                row: pos.row,
                col: pos.col,
                player: self.turn.current,
            })
        }
    }

    fn select(&mut self, pos: Position) -> IntentOutcome {
        self.board.clear_highlights();
        self.pending_moves.clear();

        for candidate in MovementResolver::valid_moves(&self.board, pos) {
            self.board.set_highlight(candidate.to, true);
            self.pending_moves.insert(candidate.to, candidate);
        }

        self.turn.selected = Some(pos);
        IntentOutcome::Selected {
            at: pos,
            moves: self.pending_moves.len(),
        }
    }

    fn make_move(&mut self, candidate: MoveCandidate) -> Result<IntentOutcome> {
        let outcome = MovementResolver::apply(&mut self.context(), candidate).ok_or(
            IntentError::NotAMoveTarget {
                row: candidate.to.row,
                col: candidate.to.col,
            },
        )?;

        self.board.clear_highlights();
        self.pending_moves.clear();
        self.turn.selected = None;
        self.end_turn();
        Ok(IntentOutcome::Moved(outcome))
    }

    fn cast_at(&mut self, kind: AbilityKind, pos: Position) -> Result<IntentOutcome> {
        if !self.board.cell(pos).targeted {
            return Err(IntentError::NotAnAbilityTarget {
                row: pos.row,
                col: pos.col,
                kind,
            });
        }

        let caster = self.turn.current;
        let outcome = AbilityResolver::cast(&mut self.context(), kind, caster, pos)?;

        self.turn.active_ability = None;
        self.board.clear_targets();
        self.end_turn();
        Ok(IntentOutcome::Cast(outcome))
    }

    fn try_activate(&mut self, kind: AbilityKind) -> Result<IntentOutcome> {
        if self.turn.is_over() {
            return Err(IntentError::GameOver);
        }
        if self.turn.active_ability == Some(kind) {
            return self.try_cancel();
        }

        let player = self.turn.current;
        let needed = kind.cost(&self.config);
        let available = self.progress(player).mana;
        if available < needed {
            return Err(IntentError::InsufficientMana {
                kind,
                needed,
                available,
            });
        }

        self.turn.selected = None;
        self.pending_moves.clear();
        let targets = TargetSelector::new(kind.target_filter(), player).mark(&mut self.board);
        self.turn.active_ability = Some(kind);
        self.log.push(
            format!("Casting {}... Select target.", kind.shout()),
            LogCategory::Magic,
        );

        Ok(IntentOutcome::AbilityActivated { kind, targets })
    }

    fn try_cancel(&mut self) -> Result<IntentOutcome> {
        if self.turn.is_over() {
            return Err(IntentError::GameOver);
        }
        let kind = self.turn.active_ability.take().ok_or(IntentError::NoActiveAbility)?;
        self.board.clear_targets();
        Ok(IntentOutcome::AbilityCancelled(kind))
    }

    /// Regenerate the next player's mana, hand over, then check for a winner.
    fn end_turn(&mut self) {
        let next = self.turn.current.opponent();
        self.progression.regenerate(next, &self.config);
        self.turn.current = next;

        if let Some(result) = evaluate_outcome(&self.board) {
            let message = match result {
                GameResult::Winner(player) => format!("{} wins!", player.shout()),
                GameResult::Draw => "Draw! Both armies have fallen.".to_string(),
            };
            self.log.push(message, LogCategory::Info);
            log::info!("game over: {result:?}");
            self.turn.outcome = Some(result);
        }
    }
}
