//! # rpg-checkers
//!
//! Rules engine for checkers with light RPG progression: captures and
//! promotions earn experience, levels raise max mana, and mana pays for
//! abilities that can be used instead of a move.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: No rendering, input capture, networking or AI.
//!    A presenter sends intents and reads snapshots.
//!
//! 2. **Single owner**: All state lives in one `TurnController` and is
//!    mutated by one intent at a time, synchronously.
//!
//! 3. **Rejections are no-ops**: An invalid intent returns an
//!    `IntentError` and leaves the state exactly as it was.
//!
//! ## Modules
//!
//! - `core`: Players, piece IDs, rules configuration, game log, errors
//! - `board`: Positions, pieces, cells and the 8×8 grid
//! - `rules`: Movement, captures, promotion and win detection
//! - `effects`: Dash and Smite abilities, targeting and resolution
//! - `progression`: Experience, levels and mana
//! - `turn`: The turn state machine and snapshots
//!
//! ## Example
//!
//! ```
//! use rpg_checkers::{Player, TurnController};
//!
//! let mut game = TurnController::new();
//! game.select_or_act(5, 0).unwrap(); // pick a red soldier
//! game.select_or_act(4, 1).unwrap(); // step forward
//!
//! assert_eq!(game.current_player(), Player::Blue);
//! ```

pub mod core;
pub mod board;
pub mod rules;
pub mod effects;
pub mod progression;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    GameLog, IntentError, LogCategory, LogEntry, PieceId, Player, PlayerMap, Rewards,
    RulesConfig, StartingProgress,
};

pub use crate::board::{Board, Cell, Piece, Position, Rank, BOARD_SIZE};

pub use crate::rules::{
    evaluate_outcome, GameResult, MoveCandidate, MoveKind, MoveOutcome, MovementResolver,
    ResolverContext,
};

pub use crate::effects::{
    AbilityKind, AbilityResolver, CastEffect, CastOutcome, TargetFilter, TargetSelector,
};

pub use crate::progression::{LevelUp, PlayerProgress, ProgressionTracker};

pub use crate::turn::{GameSnapshot, IntentOutcome, Phase, TurnController, TurnState};
