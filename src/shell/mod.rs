//! Terminal presentation shell.

mod app;
mod boundary;
mod input;
mod ui;
mod view;

pub use app::{App, Control};
pub use boundary::{Boundary, Screen};
pub use input::{Action, Direction, FaultAction};
pub use view::{Focus, HistoryEntry, View};

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info, instrument};

use crate::storage::{FileSlotStore, SlotStore};

/// Runs the interactive game until the player quits.
#[instrument(skip(slots))]
pub fn run(slots: FileSlotStore) -> Result<()> {
    info!(dir = %slots.dir().display(), "Starting game screen");

    let mut boundary = Boundary::mount(slots);

    let mut guard = TerminalGuard::install();
    let mut terminal = guard.enter()?;
    let res = event_loop(&mut terminal, &mut boundary);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Game screen closed");
    res
}

type PanicHook = Box<dyn Fn(&panic::PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Owns the terminal modes and panic hook for the lifetime of the screen.
///
/// Dropping it undoes whatever [`enter`](Self::enter) got through, so a
/// failure halfway through setup still leaves a usable terminal.
struct TerminalGuard {
    previous_hook: Option<PanicHook>,
    raw_mode: bool,
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Routes panics into the log instead of over the screen.
    fn install() -> Self {
        let previous_hook = panic::take_hook();
        panic::set_hook(Box::new(|info| error!(%info, "Panic")));
        Self {
            previous_hook: Some(previous_hook),
            raw_mode: false,
            alternate_screen: false,
        }
    }

    fn enter(&mut self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        self.raw_mode = true;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        self.alternate_screen = true;
        Terminal::new(CrosstermBackend::new(io::stdout())).context("Failed to open terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.raw_mode
            && let Err(e) = disable_raw_mode()
        {
            error!(error = %e, "Failed to disable raw mode");
        }
        if self.alternate_screen
            && let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
        {
            error!(error = %e, "Failed to leave alternate screen");
        }
        if let Some(hook) = self.previous_hook.take() {
            panic::set_hook(hook);
        }
    }
}

fn event_loop<S: SlotStore + Clone>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    boundary: &mut Boundary<S>,
) -> Result<()> {
    loop {
        let screen = boundary.screen();
        terminal.draw(|f| ui::draw(f, &screen))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && boundary.handle_key(key) == Control::Quit
        {
            return Ok(());
        }
    }
}
