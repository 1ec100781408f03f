//! Movement resolution: legal destinations, captures and promotion.
//!
//! Captures are single jumps. There is no forced capture and no
//! multi-jump chain; steps and jumps are offered side by side.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::ResolverContext;
use crate::board::{Board, Piece, Position};
use crate::core::LogCategory;
use crate::progression::LevelUp;

/// How a candidate move travels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One diagonal step onto an empty cell.
    Step,
    /// Two diagonal steps over an enemy piece, which is captured.
    Jump { captured: Position },
}

/// A legal destination for a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCandidate {
    pub from: Position,
    pub to: Position,
    pub kind: MoveKind,
}

impl MoveCandidate {
    #[must_use]
    pub fn is_jump(&self) -> bool {
        matches!(self.kind, MoveKind::Jump { .. })
    }
}

/// At most four candidates exist: two columns times two row directions.
pub type MoveList = SmallVec<[MoveCandidate; 4]>;

/// What happened when a move was applied.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The moved piece, as it stands after promotion.
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    /// The captured piece, marked dead.
    pub captured: Option<Piece>,
    pub promoted: bool,
    pub level_ups: Vec<LevelUp>,
}

/// Computes and applies piece movement.
pub struct MovementResolver;

impl MovementResolver {
    /// Legal destinations for the piece at `from`. Empty if the cell is empty.
    #[must_use]
    pub fn valid_moves(board: &Board, from: Position) -> MoveList {
        let mut moves = MoveList::new();
        let Some(piece) = board.piece_at(from) else {
            return moves;
        };

        for &d_row in piece.row_directions() {
            for d_col in [-1, 1] {
                let Some(adjacent) = from.offset(d_row, d_col) else {
                    continue;
                };

                match board.piece_at(adjacent) {
                    None => moves.push(MoveCandidate {
                        from,
                        to: adjacent,
                        kind: MoveKind::Step,
                    }),
                    Some(other) if other.owner != piece.owner => {
                        if let Some(landing) = adjacent.offset(d_row, d_col) {
                            if board.cell(landing).is_empty() {
                                moves.push(MoveCandidate {
                                    from,
                                    to: landing,
                                    kind: MoveKind::Jump { captured: adjacent },
                                });
                            }
                        }
                    }
                    Some(_) => {}
                }
            }
        }

        log::trace!("{} candidate moves from {from}", moves.len());
        moves
    }

    /// Apply a move known only by its endpoints.
    ///
    /// A two-row distance is taken to be a jump over the midpoint; only
    /// steps and single jumps are ever generated, so this is unambiguous.
    pub fn apply_move(ctx: &mut ResolverContext<'_>, from: Position, to: Position) -> Option<MoveOutcome> {
        let kind = if from.row_distance(to) > 1 {
            MoveKind::Jump {
                captured: from.midpoint(to),
            }
        } else {
            MoveKind::Step
        };
        Self::apply(ctx, MoveCandidate { from, to, kind })
    }

    /// Apply a candidate: relocate, capture, then check promotion.
    ///
    /// Returns `None` without touching anything if `from` is empty.
    pub fn apply(ctx: &mut ResolverContext<'_>, candidate: MoveCandidate) -> Option<MoveOutcome> {
        let MoveCandidate { from, to, kind } = candidate;
        let mover = ctx.board.relocate(from, to)?.owner;
        let rewards = ctx.config.rewards;
        let mut level_ups = Vec::new();

        let captured = match kind {
            MoveKind::Step => None,
            MoveKind::Jump { captured } => ctx.board.take_piece(captured).map(|mut dead| {
                dead.alive = false;
                dead
            }),
        };

        if captured.is_some() {
            ctx.log
                .push(format!("{} crushed an enemy!", mover.shout()), LogCategory::Combat);
            level_ups.extend(ctx.grant_experience(mover, rewards.capture));
        }

        let promoted = to.row == mover.promotion_row()
            && ctx.board.piece_at_mut(to).is_some_and(Piece::promote);

        if promoted {
            ctx.log.push(
                format!("{} promoted a piece to King!", mover.shout()),
                LogCategory::Level,
            );
            level_ups.extend(ctx.grant_experience(mover, rewards.promotion));
        }

        let piece = *ctx.board.piece_at(to)?;
        log::debug!("{mover} moved {from} -> {to}, captured: {}, promoted: {promoted}", captured.is_some());

        Some(MoveOutcome {
            piece,
            from,
            to,
            captured,
            promoted,
            level_ups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Rank;
    use crate::core::{GameLog, Player, RulesConfig};
    use crate::progression::ProgressionTracker;

    fn destinations(board: &Board, from: Position) -> Vec<Position> {
        let mut v: Vec<_> = MovementResolver::valid_moves(board, from)
            .iter()
            .map(|m| m.to)
            .collect();
        v.sort();
        v
    }

    #[test]
    fn test_opening_moves() {
        let board = Board::initialize();

        assert_eq!(
            destinations(&board, Position::new(5, 0)),
            vec![Position::new(4, 1)]
        );
        assert_eq!(
            destinations(&board, Position::new(5, 2)),
            vec![Position::new(4, 1), Position::new(4, 3)]
        );
        // Back row soldiers are boxed in
        assert!(destinations(&board, Position::new(7, 0)).is_empty());
        // Empty cell
        assert!(destinations(&board, Position::new(4, 1)).is_empty());
    }

    #[test]
    fn test_soldier_forward_only() {
        let mut board = Board::empty();
        board.spawn(Position::new(4, 3), Player::Blue, Rank::Soldier);

        assert_eq!(
            destinations(&board, Position::new(4, 3)),
            vec![Position::new(5, 2), Position::new(5, 4)]
        );
    }

    #[test]
    fn test_king_both_directions() {
        let mut board = Board::empty();
        board.spawn(Position::new(4, 3), Player::Red, Rank::King);

        assert_eq!(destinations(&board, Position::new(4, 3)).len(), 4);
    }

    #[test]
    fn test_jump_candidate() {
        let mut board = Board::empty();
        board.spawn(Position::new(5, 2), Player::Red, Rank::Soldier);
        board.spawn(Position::new(4, 3), Player::Blue, Rank::Soldier);

        let moves = MovementResolver::valid_moves(&board, Position::new(5, 2));
        let jump = moves.iter().find(|m| m.is_jump()).copied();
        assert_eq!(
            jump,
            Some(MoveCandidate {
                from: Position::new(5, 2),
                to: Position::new(3, 4),
                kind: MoveKind::Jump {
                    captured: Position::new(4, 3)
                },
            })
        );
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn test_no_jump_over_own_piece_or_when_landing_blocked() {
        let mut board = Board::empty();
        board.spawn(Position::new(5, 2), Player::Red, Rank::Soldier);
        board.spawn(Position::new(4, 1), Player::Red, Rank::Soldier);
        board.spawn(Position::new(4, 3), Player::Blue, Rank::Soldier);
        board.spawn(Position::new(3, 4), Player::Blue, Rank::Soldier);

        assert!(destinations(&board, Position::new(5, 2)).is_empty());
    }

    #[test]
    fn test_jump_off_board_not_offered() {
        let mut board = Board::empty();
        board.spawn(Position::new(1, 6), Player::Red, Rank::Soldier);
        board.spawn(Position::new(0, 7), Player::Blue, Rank::Soldier);

        assert_eq!(
            destinations(&board, Position::new(1, 6)),
            vec![Position::new(0, 5)]
        );
    }

    #[test]
    fn test_apply_move_infers_capture() {
        let config = RulesConfig::default();
        let mut board = Board::empty();
        let mut progression = ProgressionTracker::new(&config);
        let mut log = GameLog::new();
        board.spawn(Position::new(5, 2), Player::Red, Rank::Soldier);
        board.spawn(Position::new(4, 3), Player::Blue, Rank::Soldier);

        let mut ctx = ResolverContext::new(&config, &mut board, &mut progression, &mut log);
        let outcome = MovementResolver::apply_move(&mut ctx, Position::new(5, 2), Position::new(3, 4))
            .expect("piece present");

        let captured = outcome.captured.expect("capture");
        assert_eq!(captured.owner, Player::Blue);
        assert!(!captured.alive);
        assert!(board.cell(Position::new(4, 3)).is_empty());
        assert_eq!(board.cell(Position::new(3, 4)).owner(), Some(Player::Red));
        assert_eq!(progression.get(Player::Red).xp, 50);
        assert_eq!(log.last().map(|e| e.category), Some(LogCategory::Combat));
    }

    #[test]
    fn test_apply_from_empty_cell_is_none() {
        let config = RulesConfig::default();
        let mut board = Board::empty();
        let mut progression = ProgressionTracker::new(&config);
        let mut log = GameLog::new();

        let mut ctx = ResolverContext::new(&config, &mut board, &mut progression, &mut log);
        assert!(MovementResolver::apply_move(&mut ctx, Position::new(5, 2), Position::new(4, 3)).is_none());
        assert!(log.is_empty());
    }
}
