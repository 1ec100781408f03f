//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Exactly two sides exist for the lifetime of a game: `Red` moves first
//! from the bottom rows, `Blue` answers from the top rows.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Player`, used for progress records
//! and any other per-side data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First side. Starts on rows 5-7 and advances toward row 0.
    Red,
    /// Second side. Starts on rows 0-2 and advances toward row 7.
    Blue,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// Get the other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Row delta of a forward step for this side.
    #[must_use]
    pub const fn forward(self) -> i32 {
        match self {
            Player::Red => -1,
            Player::Blue => 1,
        }
    }

    /// Row on which this side's soldiers are promoted.
    #[must_use]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Player::Red => 0,
            Player::Blue => 7,
        }
    }

    /// Get the 0-based index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Upper-case name used in log messages.
    #[must_use]
    pub const fn shout(self) -> &'static str {
        match self {
            Player::Red => "RED",
            Player::Blue => "BLUE",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Blue => write!(f, "Blue"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rpg_checkers::core::{Player, PlayerMap};
///
/// let mut mana: PlayerMap<u32> = PlayerMap::with_value(2);
/// mana[Player::Blue] += 1;
///
/// assert_eq!(mana[Player::Red], 2);
/// assert_eq!(mana[Player::Blue], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Red), factory(Player::Blue)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
