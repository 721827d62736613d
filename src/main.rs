//! tictactoe_timeline - terminal tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_timeline::{
    CommandRequest, FileSlotStore, GameConfig, Persistence, commands, shell,
};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = GameConfig::from_file_or_default(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }

    let command = cli.command.unwrap_or(Command::Play);
    let slots = FileSlotStore::new(config.data_dir());

    match command {
        Command::Play => {
            initialize_file_tracing(&config)?;
            shell::run(slots)
        }
        command => {
            initialize_stderr_tracing(&config);
            run_command(command, slots)
        }
    }
}

/// Runs one non-interactive command against the saved game.
#[instrument(skip(slots), fields(dir = %slots.dir().display()))]
fn run_command(command: Command, slots: FileSlotStore) -> Result<()> {
    let request = match command {
        Command::Play | Command::Show => CommandRequest::Show,
        Command::Move { position } => CommandRequest::Move(position),
        Command::Jump { step } => CommandRequest::Jump(step),
        Command::Reset => CommandRequest::Reset,
    };
    let output = commands::execute(Persistence::new(slots), &request)?;
    print!("{output}");
    Ok(())
}

/// Logs to the configured file so output never draws over the game screen.
fn initialize_file_tracing(config: &GameConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn initialize_stderr_tracing(config: &GameConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
