//! Scenario tests for the rewindable history.

use timeline_tictactoe::{
    Board, GameHistory, GameView, HistoryEvent, Move, Player, Position, is_full,
};

#[test]
fn test_first_click_places_x_and_hands_turn_to_o() {
    let mut history = GameHistory::new();
    history.apply_move(0);

    assert_eq!(
        history.current_snapshot().cells(),
        [Some(Player::X), None, None, None, None, None, None, None, None]
    );
    assert!(!history.is_x_next());
    assert_eq!(history.status_text(), "Next player: O");
}

#[test]
fn test_top_row_win_freezes_the_board() {
    let mut history = GameHistory::new();
    for cell in [0, 3, 1, 4, 2] {
        assert!(history.apply_move(cell).is_some());
    }

    assert_eq!(history.winner(), Some(Player::X));
    assert_eq!(history.status_text(), "Winner is X");

    let before = history.clone();
    assert_eq!(history.apply_move(5), None);
    assert_eq!(history, before);
}

#[test]
fn test_jump_to_start_shows_empty_board_without_dropping_moves() {
    let mut history = GameHistory::replay(&[4, 0, 8]);
    assert_eq!(history.jump_to(0), Some(HistoryEvent::Jumped { step: 0 }));

    assert_eq!(*history.current_snapshot(), Board::new());
    assert!(history.is_x_next());
    assert_eq!(history.len(), 4);
    assert_eq!(history.status_text(), "Next player: X");
}

#[test]
fn test_jump_back_out_of_a_win_allows_play_again() {
    let mut history = GameHistory::replay(&[0, 3, 1, 4, 2]);
    history.jump_to(4);
    assert_eq!(history.winner(), None);

    let event = history.apply_move(5);
    assert!(matches!(event, Some(HistoryEvent::MovePlayed { step: 5, .. })));
    assert_eq!(history.winner(), None);
    assert_eq!(history.len(), 6);
    assert_eq!(history.move_at(5), Some(Move::new(Player::X, Position::MiddleRight)));
}

#[test]
fn test_full_board_draw_keeps_next_player_status() {
    // X O X / X O O / O X X
    let history = GameHistory::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(history.len(), 10);
    assert!(is_full(history.current_snapshot()));
    assert_eq!(history.winner(), None);
    // Nine moves played, so the derived turn flag has passed to O.
    assert_eq!(history.status_text(), "Next player: O");

    let mut after = history.clone();
    for cell in 0..9 {
        assert_eq!(after.apply_move(cell), None);
    }
    assert_eq!(after, history);
}

#[test]
fn test_view_tracks_jumps() {
    let mut history = GameHistory::replay(&[0, 4]);
    history.jump_to(1);
    let view = GameView::from(&history);

    assert_eq!(view.step, 1);
    assert_eq!(view.next_player, Player::O);
    assert_eq!(view.moves.iter().filter(|entry| entry.current).count(), 1);
    assert!(view.moves[1].current);
    assert_eq!(view.moves.len(), 3);
}
