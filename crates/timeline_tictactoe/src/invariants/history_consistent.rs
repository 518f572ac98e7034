//! History consistency invariant: cursor in range, nothing played after a win.

use super::Invariant;
use crate::history::GameHistory;
use crate::rules;

/// Invariant: the history is non-empty, the cursor points at a recorded
/// snapshot, and only the last snapshot may hold a winning line.
pub struct HistoryConsistentInvariant;

impl Invariant<GameHistory> for HistoryConsistentInvariant {
    fn holds(history: &GameHistory) -> bool {
        let snapshots = history.snapshots();
        let Some((_, earlier)) = snapshots.split_last() else {
            return false;
        };
        history.step() < snapshots.len()
            && earlier.iter().all(|board| rules::winner(board).is_none())
    }

    fn description() -> &'static str {
        "Cursor is in range and no move follows a win"
    }
}
