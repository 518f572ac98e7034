//! Application state and key handling.

use crossterm::event::KeyCode;
use timeline_tictactoe::{GameHistory, GameView, HistoryEvent, Position};
use tracing::debug;

use crate::controller::{Command, GameEvent};
use crate::input::{digit_position, move_cursor};

/// Pane receiving navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The jump list.
    History,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the UI.
    Quit,
    /// Forward a command to the controller.
    Command(Command),
}

/// UI-side state. Game state arrives only through [`GameEvent`]s.
pub struct App {
    view: GameView,
    cursor: Position,
    focus: Focus,
    selected: usize,
    message: String,
    show_move_details: bool,
}

impl App {
    /// Creates the UI state, showing an empty game until the first event.
    pub fn new(show_move_details: bool) -> Self {
        Self {
            view: GameView::from(&GameHistory::new()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            message: "Waiting for game to start...".to_string(),
            show_move_details,
        }
    }

    /// The last view received from the controller.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the jump list.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Description of the last change.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether jump list entries show their move.
    pub fn show_move_details(&self) -> bool {
        self.show_move_details
    }

    /// Handles a game event from the controller.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Started { view } => {
                self.message = "New game. Player X's turn.".to_string();
                self.view = view;
            }
            GameEvent::Updated { change, view } => {
                self.message = match change {
                    HistoryEvent::MovePlayed { action, .. } => format!("{} played", action),
                    HistoryEvent::GameWon { action, .. } => {
                        format!("{} completes a line", action)
                    }
                    HistoryEvent::Jumped { step } => {
                        let label = GameHistory::step_label(step);
                        format!("Showing {}", label.trim_start_matches("Go to "))
                    }
                };
                self.view = view;
            }
        }
        self.selected = self.view.step;
    }

    /// Maps a key press to an action, updating cursor and focus on the way.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                return None;
            }
            KeyCode::Char('[') => return Some(Action::Command(Command::StepBack)),
            KeyCode::Char(']') => return Some(Action::Command(Command::StepForward)),
            _ => {}
        }

        if let Some(position) = digit_position(key) {
            self.cursor = position;
            return Some(Action::Command(Command::Play(position)));
        }

        match self.focus {
            Focus::Board => match key {
                KeyCode::Enter | KeyCode::Char(' ') => {
                    Some(Action::Command(Command::Play(self.cursor)))
                }
                _ => {
                    self.cursor = move_cursor(self.cursor, key);
                    None
                }
            },
            Focus::History => {
                let last = self.view.moves.len().saturating_sub(1);
                match key {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.selected = self.selected.saturating_sub(1);
                        None
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        self.selected = (self.selected + 1).min(last);
                        None
                    }
                    KeyCode::Home => {
                        self.selected = 0;
                        None
                    }
                    KeyCode::End => {
                        self.selected = last;
                        None
                    }
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        Some(Action::Command(Command::Jump(self.selected)))
                    }
                    _ => None,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use tokio::sync::mpsc;

    /// Routes keys through a real controller, the way the run loop does.
    fn press(
        app: &mut App,
        controller: &mut Controller,
        rx: &mut mpsc::UnboundedReceiver<GameEvent>,
        keys: &[KeyCode],
    ) {
        for key in keys {
            if let Some(Action::Command(command)) = app.handle_key(*key) {
                controller.handle(command).unwrap();
            }
            while let Ok(event) = rx.try_recv() {
                app.handle_event(event);
            }
        }
    }

    fn setup() -> (App, Controller, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = Controller::new(tx).unwrap();
        let mut app = App::new(true);
        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }
        (app, controller, rx)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(true);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(app.handle_key(KeyCode::Esc), Some(Action::Quit));
    }

    #[test]
    fn test_enter_plays_cursor_cell() {
        let (mut app, mut controller, mut rx) = setup();
        press(&mut app, &mut controller, &mut rx, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);

        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.view().status, "Next player: O");
        assert_eq!(app.message(), "X -> Top-left played");
    }

    #[test]
    fn test_history_focus_jumps_to_selected_step() {
        let (mut app, mut controller, mut rx) = setup();
        press(&mut app, &mut controller, &mut rx, &[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Char('9'),
        ]);
        assert_eq!(app.selected(), 3);

        press(
            &mut app,
            &mut controller,
            &mut rx,
            &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter],
        );

        assert_eq!(app.focus(), Focus::History);
        assert_eq!(app.view().step, 1);
        assert_eq!(app.view().moves.len(), 4);
        assert_eq!(app.message(), "Showing move #1");
    }

    #[test]
    fn test_win_message_and_frozen_board() {
        let (mut app, mut controller, mut rx) = setup();
        press(&mut app, &mut controller, &mut rx, &[
            KeyCode::Char('1'),
            KeyCode::Char('4'),
            KeyCode::Char('2'),
            KeyCode::Char('5'),
            KeyCode::Char('3'),
        ]);
        assert_eq!(app.view().status, "Winner is X");
        assert_eq!(app.message(), "X -> Top-right completes a line");

        press(&mut app, &mut controller, &mut rx, &[KeyCode::Char('6')]);
        assert_eq!(app.view().moves.len(), 6);
        assert_eq!(app.view().status, "Winner is X");
    }

    #[test]
    fn test_bracket_keys_step_through_history() {
        let (mut app, mut controller, mut rx) = setup();
        press(
            &mut app,
            &mut controller,
            &mut rx,
            &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('[')],
        );
        assert_eq!(app.view().step, 1);
        assert_eq!(app.message(), "Showing move #1");

        press(&mut app, &mut controller, &mut rx, &[KeyCode::Char('['), KeyCode::Char('[')]);
        assert_eq!(app.view().step, 0);
        assert_eq!(app.message(), "Showing move start");
    }
}
