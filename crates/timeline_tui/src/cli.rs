//! Command-line interface for timeline_tui.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a rewindable move history
#[derive(Parser, Debug)]
#[command(name = "timeline_tui")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves and print the resulting game
    Replay {
        /// Cell indices (0-8), comma separated, e.g. `0,3,1`
        #[arg(long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to jump to after playing the moves
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
