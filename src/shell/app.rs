//! Game screen state: the store plus cursor and focus.

use tracing::{debug, instrument};

use super::input::{Action, navigate};
use super::view::{Focus, View};
use crate::game::{Position, StateError};
use crate::storage::{Persistence, SlotStore};
use crate::store::{GameStore, MoveOutcome, StoreError};

/// Whether the event loop keeps going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the program.
    Quit,
}

/// The mounted game screen.
#[derive(Debug)]
pub struct App<S> {
    store: GameStore<S>,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl<S: SlotStore> App<S> {
    /// Mounts the screen from the saved game.
    #[instrument(skip(persistence))]
    pub fn mount(persistence: Persistence<S>) -> Self {
        let store = GameStore::load(persistence);
        let selected = store.state().current_step();
        Self {
            store,
            cursor: Position::Center,
            focus: Focus::Board,
            selected,
        }
    }

    /// Returns the store.
    pub fn store(&self) -> &GameStore<S> {
        &self.store
    }

    /// Returns the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Returns the selected history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Derives the current frame.
    pub fn view(&self) -> Result<View, StateError> {
        View::derive(self.store.state(), self.cursor, self.focus, self.selected)
    }

    /// Handles one action to completion, including the save.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle(&mut self, action: Action) -> Result<Control, StoreError> {
        match action {
            Action::Navigate(direction) => {
                let len = self.store.state().history().len();
                (self.cursor, self.selected) =
                    navigate(self.focus, self.cursor, self.selected, len, direction);
            }
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place()?;
            }
            Action::Activate => match self.focus {
                Focus::Board => self.place()?,
                Focus::History => {
                    self.store.jump_to(self.selected)?;
                }
            },
            Action::ToggleFocus => {
                self.focus = self.focus.toggle();
                self.selected = self.store.state().current_step();
            }
            Action::Restart => {
                self.store.restart()?;
                self.selected = 0;
            }
            Action::Quit => return Ok(Control::Quit),
        }
        Ok(Control::Continue)
    }

    fn place(&mut self) -> Result<(), StoreError> {
        if let MoveOutcome::Ignored(reason) = self.store.apply_move(self.cursor)? {
            debug!(%reason, "No change");
        }
        self.selected = self.store.state().current_step();
        Ok(())
    }
}
