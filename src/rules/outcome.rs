//! Win detection.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Both sides eliminated in the same evaluation.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }
}

/// A side with no pieces left loses. `None` while both sides have pieces.
#[must_use]
pub fn evaluate_outcome(board: &Board) -> Option<GameResult> {
    let red_alive = board.count_pieces(Player::Red) > 0;
    let blue_alive = board.count_pieces(Player::Blue) > 0;

    match (red_alive, blue_alive) {
        (true, true) => None,
        (true, false) => Some(GameResult::Winner(Player::Red)),
        (false, true) => Some(GameResult::Winner(Player::Blue)),
        (false, false) => Some(GameResult::Draw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Position, Rank};

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Blue);
        assert!(!result.is_winner(Player::Red));
        assert!(result.is_winner(Player::Blue));
        assert_eq!(result.winner(), Some(Player::Blue));

        assert!(!GameResult::Draw.is_winner(Player::Red));
        assert_eq!(GameResult::Draw.winner(), None);
    }

    #[test]
    fn test_evaluate_outcome() {
        assert_eq!(evaluate_outcome(&Board::initialize()), None);
        assert_eq!(evaluate_outcome(&Board::empty()), Some(GameResult::Draw));

        let mut board = Board::empty();
        board.spawn(Position::new(3, 0), Player::Blue, Rank::Soldier);
        assert_eq!(evaluate_outcome(&board), Some(GameResult::Winner(Player::Blue)));
    }
}
