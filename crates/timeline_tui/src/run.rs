//! Interactive terminal session.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use crate::app::{Action, App};
use crate::config::TuiConfig;
use crate::controller::{Controller, GameEvent};
use crate::ui;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the game loop fails.
#[instrument(skip(config))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting timeline tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let poll = Duration::from_millis(*config.poll_interval_ms());
    let res = run_app(&mut terminal, config, || read_key(poll));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.map(|_| ())
}

/// Waits up to `poll` for a key press. Releases and non-key events yield `None`.
fn read_key(poll: Duration) -> Result<Option<KeyCode>> {
    if !event::poll(poll)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key.code)),
        _ => Ok(None),
    }
}

/// Draws and dispatches keys from `next_key` until a quit key arrives.
///
/// Returns the final UI state.
fn run_app<B, F>(terminal: &mut Terminal<B>, config: &TuiConfig, mut next_key: F) -> Result<App>
where
    B: Backend,
    B::Error: std::error::Error + Send + Sync + 'static,
    F: FnMut() -> Result<Option<KeyCode>>,
{
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut controller = Controller::new(event_tx)?;
    let mut app = App::new(*config.show_move_details());

    loop {
        drain_events(&mut app, &mut event_rx);
        terminal.draw(|f| ui::draw(f, &app))?;

        let Some(key) = next_key()? else {
            continue;
        };
        match app.handle_key(key) {
            Some(Action::Quit) => {
                info!("User quit");
                return Ok(app);
            }
            Some(Action::Command(command)) => controller.handle(command)?,
            None => {}
        }
    }
}

fn drain_events(app: &mut App, event_rx: &mut mpsc::UnboundedReceiver<GameEvent>) {
    while let Ok(event) = event_rx.try_recv() {
        app.handle_event(event);
    }
}
