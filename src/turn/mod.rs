//! Turn control: the state machine behind the engine's public API.
//!
//! ```text
//! IdleSelection --click own piece--> PieceSelected --click highlight--> (end turn)
//!       |                                  |
//!       +------- activate ability ---------+--> AbilityTargeting --click target--> (end turn)
//!                                                   |  cancel / re-activate
//!                                                   v
//!                                              IdleSelection
//! (end turn) --> IdleSelection | GameOver
//! ```

mod state;
mod snapshot;
mod controller;

pub use state::{Phase, TurnState};
pub use snapshot::GameSnapshot;
pub use controller::{IntentOutcome, TurnController};
