//! Failure isolation around the game screen.
//!
//! The boundary owns the mounted [`App`]. Every view derivation and every
//! action runs inside it; an error or a panic unmounts the app and leaves a
//! fault message in its place. The only way out of the fault is
//! [`Boundary::try_again`], which empties the saved game and mounts a fresh
//! app, or quitting.

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, AssertUnwindSafe};

use crossterm::event::{KeyEvent, KeyEventKind};
use tracing::{error, info, instrument, warn};

use super::app::{App, Control};
use super::input::{self, FaultAction};
use super::view::View;
use crate::storage::{Persistence, SlotStore};

/// What to draw this frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// The game.
    Game(View),
    /// The fault message, with a `Try again` action.
    Fault(String),
}

#[derive(Debug)]
enum Mounted<S> {
    Running(App<S>),
    Faulted(String),
}

/// Supervisor for the game screen.
#[derive(Debug)]
pub struct Boundary<S> {
    slots: S,
    mounted: Mounted<S>,
}

impl<S: SlotStore + Clone> Boundary<S> {
    /// Mounts a game screen over `slots`.
    #[instrument(skip(slots))]
    pub fn mount(slots: S) -> Self {
        let app = App::mount(Persistence::new(slots.clone()));
        Self {
            slots,
            mounted: Mounted::Running(app),
        }
    }

    /// Returns the mounted app, unless faulted.
    pub fn app(&self) -> Option<&App<S>> {
        match &self.mounted {
            Mounted::Running(app) => Some(app),
            Mounted::Faulted(_) => None,
        }
    }

    /// Returns the fault message, if faulted.
    pub fn fault(&self) -> Option<&str> {
        match &self.mounted {
            Mounted::Running(_) => None,
            Mounted::Faulted(message) => Some(message),
        }
    }

    /// Derives this frame's screen.
    pub fn screen(&mut self) -> Screen {
        match self.guard(|app| app.view()) {
            Some(view) => Screen::Game(view),
            None => Screen::Fault(self.fault().unwrap_or_default().to_string()),
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }

        if self.fault().is_some() {
            return match input::fault_action_for(key) {
                Some(FaultAction::TryAgain) => {
                    self.try_again();
                    Control::Continue
                }
                Some(FaultAction::Quit) => Control::Quit,
                None => Control::Continue,
            };
        }

        let Some(action) = input::action_for(key) else {
            return Control::Continue;
        };
        self.guard(|app| app.handle(action))
            .unwrap_or(Control::Continue)
    }

    /// Clears the saved game and mounts a fresh app.
    ///
    /// If the slot cannot be cleared the boundary stays faulted with the
    /// new error.
    #[instrument(skip(self))]
    pub fn try_again(&mut self) {
        let persistence = Persistence::new(self.slots.clone());
        match persistence.clear() {
            Ok(()) => {
                info!("Remounting game after fault");
                self.mounted = Mounted::Running(App::mount(persistence));
            }
            Err(e) => {
                warn!(error = %e, "Recovery failed");
                self.mounted = Mounted::Faulted(format!("Recovery failed: {e}"));
            }
        }
    }

    fn guard<T, E: Display>(&mut self, f: impl FnOnce(&mut App<S>) -> Result<T, E>) -> Option<T> {
        let Mounted::Running(app) = &mut self.mounted else {
            return None;
        };
        let message = match panic::catch_unwind(AssertUnwindSafe(|| f(app))) {
            Ok(Ok(value)) => return Some(value),
            Ok(Err(e)) => e.to_string(),
            Err(payload) => panic_message(&*payload),
        };
        error!(%message, "Fault caught, unmounting game");
        self.mounted = Mounted::Faulted(message);
        None
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
