//! One-shot commands against the saved game, outside the interactive
//! screen.

use derive_more::{Display, From};
use tracing::{info, instrument};

use crate::game::{GameState, Position, StateError};
use crate::shell::{Focus, View};
use crate::storage::{Persistence, SlotStore};
use crate::store::{GameStore, MoveOutcome, StoreError};

/// A non-interactive command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    /// Print the saved game.
    Show,
    /// Place the next mark at a square given as an index `0`-`8` or a label.
    Move(String),
    /// Point the saved game at another snapshot.
    Jump(usize),
    /// Delete the saved game.
    Reset,
}

/// Errors raised by [`execute`].
#[derive(Debug, Clone, Display, From)]
pub enum CommandError {
    /// The square argument is neither an index nor a label.
    #[display("Unknown square: {_0}")]
    #[from(ignore)]
    UnknownSquare(String),
    /// The saved game breaks an invariant and was left untouched.
    #[display("Saved game is inconsistent; run `reset` to start over: {_0}")]
    Inconsistent(StateError),
    /// The store rejected the operation.
    #[display("{_0}")]
    Store(StoreError),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::UnknownSquare(_) => None,
            CommandError::Inconsistent(e) => Some(e),
            CommandError::Store(e) => Some(e),
        }
    }
}

/// Runs `request` against the game in `persistence` and returns the text to
/// print.
///
/// Every command except [`CommandRequest::Reset`] validates the saved game
/// first. An inconsistent save is refused before anything is written.
///
/// # Errors
///
/// Returns [`CommandError`] for an unknown square, an inconsistent save, an
/// out-of-range jump, or a failed write.
#[instrument(skip(persistence))]
pub fn execute<S: SlotStore>(
    persistence: Persistence<S>,
    request: &CommandRequest,
) -> Result<String, CommandError> {
    let mut store = GameStore::load(persistence);
    if *request != CommandRequest::Reset {
        store.state().validate()?;
    }

    let mut out = String::new();
    match request {
        CommandRequest::Show => {}
        CommandRequest::Move(square) => {
            let pos = Position::from_label_or_number(square)
                .ok_or_else(|| CommandError::UnknownSquare(square.clone()))?;
            if let MoveOutcome::Ignored(reason) = store.apply_move(pos)? {
                out.push_str(&format!("Move ignored: {reason}\n\n"));
            }
        }
        CommandRequest::Jump(step) => store.jump_to(*step)?,
        CommandRequest::Reset => {
            store.restart()?;
            info!("Saved game deleted");
        }
    }

    out.push_str(&summary(store.state())?);
    Ok(out)
}

fn summary(state: &GameState) -> Result<String, CommandError> {
    let view = View::derive(state, Position::Center, Focus::Board, state.current_step())?;
    Ok(view.summary())
}
