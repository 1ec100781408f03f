//! Ability system: mana-gated actions taken in place of a move.
//!
//! - `AbilityKind`: Dash (own piece forward) and Smite (destroy enemy)
//! - `TargetFilter` / `TargetSelector`: which cells an ability can hit
//! - `AbilityResolver`: pays mana and applies the effect
//!
//! Casting an ability ends the turn, whether or not the effect landed.

mod ability;
mod targeting;
mod resolver;

pub use ability::AbilityKind;
pub use targeting::{TargetFilter, TargetSelector};
pub use resolver::{AbilityResolver, CastEffect, CastOutcome};
