//! Tic-tac-toe engine: board types, rules, invariants and the history state
//! machine.

pub mod invariants;
mod position;
pub mod rules;
mod state;
mod types;

pub use position::Position;
pub use rules::GameStatus;
pub use state::{GameState, IgnoredMove, Played, StateError};
pub use types::{Board, Player, Square};
