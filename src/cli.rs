//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with time travel and a saved game.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Directory holding the saved game (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Open the interactive game screen
    Play,

    /// Print the saved board, status and history
    Show,

    /// Place the next mark on the saved game
    Move {
        /// Square index 0-8 or label such as "center"
        position: String,
    },

    /// Display an earlier or later snapshot of the saved game
    Jump {
        /// History step (0 is the game start)
        step: usize,
    },

    /// Delete the saved game
    Reset,
}
