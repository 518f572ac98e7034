//! Terminal front-end for timeline_tictactoe.
//!
//! The [`Controller`] owns the game history and turns UI commands into
//! [`GameEvent`]s; the [`App`] holds only what it needs to draw and learns
//! about the game exclusively through those events.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod controller;
mod input;
mod logging;
mod replay;
mod run;
pub mod ui;

pub use app::{Action, App, Focus};
pub use cli::{Cli, Command as CliCommand};
pub use config::{ConfigError, TuiConfig};
pub use controller::{Command, Controller, GameEvent};
pub use input::{digit_position, move_cursor};
pub use logging::{init_file_tracing, init_stderr_tracing};
pub use replay::run_replay;
pub use run::run_tui;
