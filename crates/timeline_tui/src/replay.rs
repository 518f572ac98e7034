//! Non-interactive replay of a move list.

use anyhow::Result;
use timeline_tictactoe::{GameHistory, GameView};
use tracing::{instrument, warn};

/// Plays `moves`, optionally jumps to `jump`, and renders the result.
///
/// Ignored moves and out-of-range jumps behave exactly as in the TUI: they
/// change nothing.
#[instrument]
pub fn run_replay(moves: &[usize], jump: Option<usize>, json: bool) -> Result<String> {
    let mut history = GameHistory::new();
    for &cell in moves {
        if history.apply_move(cell).is_none() {
            warn!(cell, "Move ignored during replay");
        }
    }
    if let Some(step) = jump {
        history.jump_to(step);
    }

    let view = GameView::from(&history);
    if json {
        return Ok(view.to_json_pretty()?);
    }
    Ok(render_text(&history, &view))
}

fn render_text(history: &GameHistory, view: &GameView) -> String {
    let mut out = String::new();
    out.push_str(&history.current_snapshot().display());
    out.push_str("\n\n");
    out.push_str(&view.status);
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.current { '>' } else { ' ' };
        out.push_str(&format!("{} {}", marker, entry.label));
        if let Some(action) = entry.action {
            out.push_str(&format!(" ({})", action));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_replay_of_win() {
        let out = run_replay(&[0, 3, 1, 4, 2, 5], None, false).unwrap();
        assert!(out.starts_with("X|X|X\n-+-+-\nO|O|6\n-+-+-\n7|8|9\n\nWinner is X\n"));
        assert!(out.contains("  Go to move start\n"));
        assert!(out.contains("> Go to move #5 (X -> Top-right)\n"));
        assert!(!out.contains("#6"));
    }

    #[test]
    fn test_json_replay_with_jump() {
        let out = run_replay(&[4, 0], Some(1), true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["step"], 1);
        assert_eq!(json["status"], "Next player: O");
        assert!(json["board"][0].is_null());
        assert_eq!(json["moves"].as_array().map(Vec::len), Some(3));
    }
}
