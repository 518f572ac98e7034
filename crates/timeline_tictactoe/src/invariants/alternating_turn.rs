//! Alternating turn invariant: marks go X, O, X, O, ...

use super::Invariant;
use crate::history::GameHistory;
use crate::types::Player;

/// Invariant: the move producing snapshot `k` was made by X when `k` is odd
/// and by O when `k` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameHistory> for AlternatingTurnInvariant {
    fn holds(history: &GameHistory) -> bool {
        (1..history.len()).all(|step| {
            history
                .move_at(step)
                .is_some_and(|action| action.player == Player::for_step(step - 1))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position};

    #[test]
    fn test_empty_history_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameHistory::replay(&[
            0, 4, 8, 2, 6
        ])));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut history = GameHistory::replay(&[4]);
        let twice = history.current_snapshot().with_mark(Position::TopLeft, Player::X);
        history.snapshots.push(twice);
        assert!(!AlternatingTurnInvariant::holds(&history));
    }

    #[test]
    fn test_o_first_violates() {
        let mut history = GameHistory::new();
        history
            .snapshots
            .push(Board::new().with_mark(Position::Center, Player::O));
        assert!(!AlternatingTurnInvariant::holds(&history));
    }
}
