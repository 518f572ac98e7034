//! Monotonic board invariant: snapshots only ever gain one mark.

use super::Invariant;
use crate::action::Move;
use crate::history::GameHistory;
use crate::types::Board;

/// Invariant: snapshot 0 is empty and every later snapshot differs from its
/// predecessor in exactly one square, which went from empty to a mark.
pub struct MonotonicBoardInvariant;

impl Invariant<GameHistory> for MonotonicBoardInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        snapshots.first() == Some(&Board::new())
            && snapshots
                .windows(2)
                .all(|pair| Move::between(&pair[0], &pair[1]).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_played_history_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameHistory::replay(&[0, 4, 8])));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut history = GameHistory::replay(&[4]);
        history
            .snapshots
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!MonotonicBoardInvariant::holds(&history));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut history = GameHistory::new();
        history.snapshots[0] = Board::new().with_mark(Position::Center, Player::X);
        assert!(!MonotonicBoardInvariant::holds(&history));
    }
}
