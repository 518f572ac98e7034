//! Owns the game history and publishes changes to the UI.

use anyhow::Result;
use timeline_tictactoe::{GameHistory, GameView, HistoryEvent, Position};
use tokio::sync::mpsc;
use tracing::{debug, instrument};

/// Requests from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark at a position.
    Play(Position),
    /// Show a recorded step.
    Jump(usize),
    /// Show the step before the current one.
    StepBack,
    /// Show the step after the current one.
    StepForward,
}

/// Messages sent from the controller to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Initial state, sent once on construction.
    Started {
        /// View of the empty game.
        view: GameView,
    },
    /// The history changed.
    Updated {
        /// What changed.
        change: HistoryEvent,
        /// View after the change.
        view: GameView,
    },
}

/// Applies UI commands to a [`GameHistory`].
///
/// Every accepted command produces exactly one [`GameEvent::Updated`];
/// ignored commands produce nothing.
pub struct Controller {
    history: GameHistory,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Controller {
    /// Creates a controller for a fresh game and announces it.
    #[instrument(skip(event_tx))]
    pub fn new(event_tx: mpsc::UnboundedSender<GameEvent>) -> Result<Self> {
        let history = GameHistory::new();
        event_tx.send(GameEvent::Started {
            view: GameView::from(&history),
        })?;
        Ok(Self { history, event_tx })
    }

    /// Returns the history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Applies one command.
    #[instrument(skip(self), fields(step = self.history.step()))]
    pub fn handle(&mut self, command: Command) -> Result<()> {
        let change = match command {
            Command::Play(position) => self.history.apply_position(position),
            Command::Jump(step) => self.history.jump_to(step),
            Command::StepBack => match self.history.step().checked_sub(1) {
                Some(step) => self.history.jump_to(step),
                None => None,
            },
            Command::StepForward => self.history.jump_to(self.history.step() + 1),
        };

        let Some(change) = change else {
            debug!(?command, "Command ignored");
            return Ok(());
        };

        self.event_tx.send(GameEvent::Updated {
            change,
            view: GameView::from(&self.history),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timeline_tictactoe::Player;

    fn controller() -> (Controller, mpsc::UnboundedReceiver<GameEvent>) {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let controller = Controller::new(tx).unwrap();
        assert!(matches!(rx.try_recv(), Ok(GameEvent::Started { .. })));
        (controller, rx)
    }

    #[test]
    fn test_play_publishes_update() {
        let (mut controller, mut rx) = controller();
        controller.handle(Command::Play(Position::Center)).unwrap();

        match rx.try_recv().unwrap() {
            GameEvent::Updated { change, view } => {
                assert_eq!(change.step(), 1);
                assert_eq!(view.board[4], Some(Player::X));
            }
            other => panic!("Expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_ignored_command_publishes_nothing() {
        let (mut controller, mut rx) = controller();
        controller.handle(Command::Play(Position::Center)).unwrap();
        rx.try_recv().unwrap();

        controller.handle(Command::Play(Position::Center)).unwrap();
        controller.handle(Command::StepForward).unwrap();
        controller.handle(Command::Jump(7)).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_step_back_and_forward() {
        let (mut controller, mut rx) = controller();
        controller.handle(Command::Play(Position::Center)).unwrap();
        controller.handle(Command::Play(Position::TopLeft)).unwrap();
        controller.handle(Command::StepBack).unwrap();
        controller.handle(Command::StepBack).unwrap();
        controller.handle(Command::StepBack).unwrap();
        assert_eq!(controller.history().step(), 0);

        controller.handle(Command::StepForward).unwrap();
        assert_eq!(controller.history().step(), 1);
        assert_eq!(controller.history().len(), 3);

        // Two plays, two real step-backs, one forward. The third step-back is ignored.
        let mut updates = 0;
        while rx.try_recv().is_ok() {
            updates += 1;
        }
        assert_eq!(updates, 5);
    }

    #[test]
    fn test_closed_channel_is_an_error() {
        let (mut controller, rx) = controller();
        drop(rx);
        assert!(controller.handle(Command::Play(Position::Center)).is_err());
    }
}
