//! Tic-tac-toe with time travel.
//!
//! Every move appends a board snapshot to the game history. Any snapshot
//! can be revisited; playing from an earlier snapshot discards the later
//! ones. The game survives restarts through a single saved-game slot, and a
//! corrupted save can always be recovered from.
//!
//! # Architecture
//!
//! - **Rules** ([`game::rules`]): pure functions over one board.
//! - **State** ([`GameState`]): history plus current step, with pure
//!   transitions.
//! - **Store** ([`GameStore`]): owns the live state and saves after every
//!   change.
//! - **Storage** ([`Persistence`], [`SlotStore`]): the `"state"` slot.
//! - **Shell** ([`shell`]): terminal screen behind a failure [`Boundary`].
//! - **Commands** ([`commands`]): one-shot show, move, jump and reset.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameStore, MemorySlotStore, Persistence, Position};
//!
//! let mut store = GameStore::load(Persistence::new(MemorySlotStore::new()));
//! store.apply_move(Position::Center).unwrap();
//! assert_eq!(store.state().history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod commands;
mod config;
pub mod game;
pub mod shell;
mod storage;
mod store;

// Crate-level exports - Commands
pub use commands::{CommandError, CommandRequest};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types
pub use game::{
    Board, GameState, GameStatus, IgnoredMove, Played, Player, Position, Square, StateError,
};

// Crate-level exports - Storage
pub use storage::{
    FileSlotStore, MemorySlotStore, Persistence, STATE_KEY, SlotStore, StorageError,
};

// Crate-level exports - Store
pub use store::{GameStore, MoveOutcome, StoreError};

// Crate-level exports - Shell
pub use shell::{Boundary, Screen, View};
