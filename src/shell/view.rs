//! Everything the screen shows, derived from the game state.

use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument};

use crate::game::rules::{self, GameStatus};
use crate::game::{Board, GameState, Position, StateError};

/// Which pane receives the arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor.
    #[default]
    Board,
    /// Arrows move through the history list.
    History,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::History,
            Focus::History => Focus::Board,
        }
    }
}

/// One button in the history list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Snapshot index this entry jumps to.
    pub step: usize,
    /// Button text.
    pub label: String,
    /// True for the snapshot currently displayed.
    pub active: bool,
}

impl HistoryEntry {
    /// Builds the entry for `step` given the displayed step.
    pub fn for_step(step: usize, current_step: usize) -> Self {
        let label = if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{step}")
        };
        Self {
            step,
            label,
            active: step == current_step,
        }
    }
}

/// A fully derived frame of the game screen.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct View {
    board: Board,
    status: GameStatus,
    entries: Vec<HistoryEntry>,
    cursor: Position,
    focus: Focus,
    selected: usize,
}

impl View {
    /// Derives the view for `state`.
    ///
    /// # Errors
    ///
    /// Fails when the state breaks a game invariant. Such states can only
    /// come from storage, never from play.
    #[instrument(skip(state), fields(current_step = state.current_step()))]
    pub fn derive(
        state: &GameState,
        cursor: Position,
        focus: Focus,
        selected: usize,
    ) -> Result<Self, StateError> {
        state.validate()?;
        let board = *state.current()?;
        let status = rules::status(&board);
        let entries = (0..state.history().len())
            .map(|step| HistoryEntry::for_step(step, state.current_step()))
            .collect();
        debug!(%status, "View derived");
        Ok(Self::new(board, status, entries, cursor, focus, selected))
    }

    /// Plain-text rendering used outside the interactive screen.
    pub fn summary(&self) -> String {
        let mut out = format!("{}\n\n{}\n\n", self.status, self.board.display());
        for entry in &self.entries {
            let marker = if entry.active { '>' } else { ' ' };
            out.push_str(&format!("{marker} {}\n", entry.label));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Played;

    #[test]
    fn test_entry_labels() {
        assert_eq!(HistoryEntry::for_step(0, 0).label, "Go to game start");
        assert_eq!(HistoryEntry::for_step(3, 0).label, "Go to move #3");
        assert!(HistoryEntry::for_step(2, 2).active);
    }

    #[test]
    fn test_derive_marks_active_entry() {
        let Ok(Played::Applied(state)) = GameState::new().play(Position::Center) else {
            panic!("Expected applied move");
        };
        let state = state.jump_to(0).unwrap();
        let view = View::derive(&state, Position::Center, Focus::Board, 0).unwrap();

        assert_eq!(view.entries().len(), 2);
        assert!(view.entries()[0].active);
        assert!(!view.entries()[1].active);
        assert_eq!(view.board(), &Board::new());
        assert_eq!(view.status().to_string(), "Next player: X");
    }

    #[test]
    fn test_derive_rejects_out_of_range_step() {
        let state = GameState::from_parts(vec![Board::new()], 4);
        assert!(View::derive(&state, Position::Center, Focus::Board, 0).is_err());
    }

    #[test]
    fn test_summary_lists_history() {
        let view = View::derive(&GameState::new(), Position::Center, Focus::Board, 0).unwrap();
        let text = view.summary();
        assert!(text.starts_with("Next player: X"));
        assert!(text.contains("> Go to game start"));
    }
}
