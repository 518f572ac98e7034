//! Render model handed to UI collaborators.

use serde::Serialize;
use tracing::instrument;

use crate::action::Move;
use crate::history::GameHistory;
use crate::position::Position;
use crate::rules;
use crate::types::Player;

/// One entry of the jump list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// Button text, e.g. `Go to move #3`.
    pub label: String,
    /// Move that produced the step; absent for the start.
    pub action: Option<Move>,
    /// Whether the cursor currently points at this step.
    pub current: bool,
}

/// Everything a UI needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Board at the cursor, 9 cells in row-major order.
    pub board: [Option<Player>; 9],
    /// Status line.
    pub status: String,
    /// Cursor.
    pub step: usize,
    /// Player who places the next mark.
    pub next_player: Player,
    /// Winner at the cursor, if any.
    pub winner: Option<Player>,
    /// Completed line at the cursor, if any.
    pub winning_line: Option<[Position; 3]>,
    /// Jump list, one entry per recorded snapshot.
    pub moves: Vec<StepEntry>,
}

impl GameView {
    /// Builds the view of `history` at its cursor.
    #[instrument(skip(history), fields(step = history.step(), len = history.len()))]
    pub fn from_history(history: &GameHistory) -> Self {
        let current = history.current_snapshot();
        let win = rules::winning_line(current);
        let moves = (0..history.len())
            .map(|step| StepEntry {
                step,
                label: GameHistory::step_label(step),
                action: history.move_at(step),
                current: step == history.step(),
            })
            .collect();

        Self {
            board: current.cells(),
            status: history.status_text(),
            step: history.step(),
            next_player: history.next_player(),
            winner: win.map(|(player, _)| player),
            winning_line: win.map(|(_, line)| line),
            moves,
        }
    }

    /// Serializes the view as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&GameHistory> for GameView {
    fn from(history: &GameHistory) -> Self {
        Self::from_history(history)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_of_won_game() {
        let history = GameHistory::replay(&[0, 3, 1, 4, 2]);
        let view = GameView::from(&history);

        assert_eq!(view.status, "Winner is X");
        assert_eq!(view.winner, Some(Player::X));
        assert_eq!(
            view.winning_line,
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
        assert_eq!(view.moves.len(), 6);
        assert_eq!(view.moves[0].label, "Go to move start");
        assert_eq!(view.moves[5].label, "Go to move #5");
        assert!(view.moves[5].current);
        assert_eq!(
            view.moves[2].action,
            Some(Move::new(Player::O, Position::MiddleLeft))
        );
    }

    #[test]
    fn test_view_json_uses_null_for_empty_cells() {
        let view = GameView::from(&GameHistory::replay(&[4]));
        let json: serde_json::Value =
            serde_json::from_str(&view.to_json_pretty().unwrap()).unwrap();

        assert_eq!(json["board"][4], "X");
        assert!(json["board"][0].is_null());
        assert_eq!(json["status"], "Next player: O");
        assert_eq!(json["next_player"], "O");
    }
}
