//! Movement rules and win detection.
//!
//! - `MovementResolver`: legal steps and jumps, move application,
//!   capture and promotion rewards
//! - `evaluate_outcome`: a side with no pieces loses
//! - `ResolverContext`: the mutable state a resolver works on

mod context;
mod movement;
mod outcome;

pub use context::ResolverContext;
pub use movement::{MoveCandidate, MoveKind, MoveList, MoveOutcome, MovementResolver};
pub use outcome::{evaluate_outcome, GameResult};
