//! The game store: owns the live [`GameState`] and keeps storage in step
//! with it.

use derive_more::{Display, From};
use tracing::{debug, info, instrument};

use crate::game::{GameState, IgnoredMove, Played, Position, StateError};
use crate::storage::{Persistence, SlotStore, StorageError};

/// Outcome of [`GameStore::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and saved.
    Applied,
    /// The move was ignored; nothing changed and nothing was written.
    Ignored(IgnoredMove),
}

/// Errors raised by store operations.
#[derive(Debug, Clone, Display, From)]
pub enum StoreError {
    /// The transition itself failed.
    #[display("{_0}")]
    State(StateError),
    /// The new state could not be written.
    #[display("{_0}")]
    Storage(StorageError),
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::State(e) => Some(e),
            StoreError::Storage(e) => Some(e),
        }
    }
}

/// Owner of the live game.
///
/// Each operation computes the next state with a pure transition, then
/// [`commit`](Self::commit)s it: the in-memory value is replaced first and
/// the slot is written right after.
#[derive(Debug)]
pub struct GameStore<S> {
    state: GameState,
    persistence: Persistence<S>,
}

impl<S: SlotStore> GameStore<S> {
    /// Mounts a store from whatever the slot holds.
    #[instrument(skip(persistence))]
    pub fn load(persistence: Persistence<S>) -> Self {
        let state = persistence.load();
        Self { state, persistence }
    }

    /// Returns the live state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Occupied squares and won boards make this a no-op that writes
    /// nothing.
    #[instrument(skip(self), fields(position = %pos))]
    pub fn apply_move(&mut self, pos: Position) -> Result<MoveOutcome, StoreError> {
        match self.state.play(pos)? {
            Played::Applied(next) => {
                self.commit(next)?;
                Ok(MoveOutcome::Applied)
            }
            Played::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                Ok(MoveOutcome::Ignored(reason))
            }
        }
    }

    /// Displays the snapshot at `step` (`0..history.len()`).
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), StoreError> {
        let next = self.state.jump_to(step)?;
        self.commit(next)?;
        Ok(())
    }

    /// Starts over with an empty board and an empty slot.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), StoreError> {
        self.state = GameState::new();
        self.persistence.clear()?;
        info!("Game restarted");
        Ok(())
    }

    fn commit(&mut self, next: GameState) -> Result<(), StorageError> {
        self.state = next;
        self.persistence.save(&self.state)?;
        info!(
            current_step = self.state.current_step(),
            snapshots = self.state.history().len(),
            "State committed"
        );
        Ok(())
    }
}
