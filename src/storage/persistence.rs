//! Mirrors game state into the `"state"` slot.

use tracing::{debug, info, instrument, warn};

use super::{SlotStore, StorageError};
use crate::game::GameState;

/// Name of the slot holding the game.
pub const STATE_KEY: &str = "state";

/// Reads and writes [`GameState`] documents in a [`SlotStore`].
#[derive(Debug, Clone)]
pub struct Persistence<S> {
    slots: S,
}

impl<S: SlotStore> Persistence<S> {
    /// Wraps a slot store.
    pub fn new(slots: S) -> Self {
        Self { slots }
    }

    /// Loads the saved game, falling back to a fresh one.
    ///
    /// An empty slot, an unreadable slot, and a document that does not parse
    /// as a game all yield [`GameState::new`]. Only the document's shape is
    /// checked here; invariants are checked when the game is displayed.
    #[instrument(skip(self))]
    pub fn load(&self) -> GameState {
        let text = match self.slots.get(STATE_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!("No saved game, starting fresh");
                return GameState::new();
            }
            Err(e) => {
                warn!(error = %e, "Could not read saved game, starting fresh");
                return GameState::new();
            }
        };

        match serde_json::from_str::<GameState>(&text) {
            Ok(state) => {
                info!(
                    snapshots = state.history().len(),
                    current_step = state.current_step(),
                    "Loaded saved game"
                );
                state
            }
            Err(e) => {
                warn!(error = %e, "Saved game is corrupt, starting fresh");
                GameState::new()
            }
        }
    }

    /// Writes the whole game to the slot.
    #[instrument(skip(self, state), fields(current_step = state.current_step()))]
    pub fn save(&self, state: &GameState) -> Result<(), StorageError> {
        let text = serde_json::to_string(state)?;
        self.slots.set(STATE_KEY, &text)?;
        debug!("Game saved");
        Ok(())
    }

    /// Empties the slot.
    #[instrument(skip(self))]
    pub fn clear(&self) -> Result<(), StorageError> {
        self.slots.remove(STATE_KEY)?;
        info!("Saved game cleared");
        Ok(())
    }
}
