//! Progression tracking: experience, levels and mana.
//!
//! Experience comes from captures, promotions and Smite. Crossing a
//! threshold raises the level, grows the next threshold by ×1.5 (floored),
//! adds max mana and refills mana. A single large grant may cross several
//! thresholds at once.

mod tracker;

pub use tracker::{LevelUp, PlayerProgress, ProgressionTracker};
