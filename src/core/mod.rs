//! Core engine types: players, piece IDs, configuration, log, errors.
//!
//! These are the leaf building blocks every other module depends on.

pub mod entity;
pub mod player;
pub mod config;
pub mod journal;
pub mod error;

pub use entity::{PieceId, PieceIdAllocator};
pub use player::{Player, PlayerMap};
pub use config::{Rewards, RulesConfig, StartingProgress};
pub use journal::{GameLog, LogCategory, LogEntry};
pub use error::{IntentError, Result};
