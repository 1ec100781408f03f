//! Piece identification.
//!
//! Every piece gets a `PieceId` when it is placed on the board. IDs are
//! never reused within a game, so a presenter can key animations or
//! selection state on them across snapshots.
//!
//! ```
//! use rpg_checkers::core::PieceIdAllocator;
//!
//! let mut ids = PieceIdAllocator::new();
//! let a = ids.alloc();
//! let b = ids.alloc();
//! assert_ne!(a, b);
//! ```

use serde::{Deserialize, Serialize};

/// Stable identifier for a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Monotonic allocator for piece IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceIdAllocator {
    next: u32,
}

impl PieceIdAllocator {
    /// Create an allocator starting at ID 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next ID.
    pub fn alloc(&mut self) -> PieceId {
        let id = PieceId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
