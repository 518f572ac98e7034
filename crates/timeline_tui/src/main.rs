//! Timeline tic-tac-toe - terminal entry point.

use anyhow::Result;
use clap::Parser;
use timeline_tui::{
    Cli, CliCommand, TuiConfig, init_file_tracing, init_stderr_tracing, run_replay, run_tui,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(CliCommand::Play) {
        CliCommand::Play => {
            init_file_tracing(&config)?;
            run_tui(&config)
        }
        CliCommand::Replay { moves, jump, json } => {
            init_stderr_tracing();
            println!("{}", run_replay(&moves, jump, json)?);
            Ok(())
        }
    }
}
