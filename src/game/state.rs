//! Game history and the pure transitions over it.
//!
//! A [`GameState`] is a value: every transition borrows the current state
//! and returns a new one, leaving the original untouched. Persisting the
//! result is the caller's job (see [`crate::GameStore`]).

use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Full game state: every snapshot of the current branch and the one on
/// display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    history: Vec<Board>,
    current_step: usize,
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IgnoredMove {
    /// The square already holds a mark.
    #[display("{_0} is already occupied")]
    SquareOccupied(Position),
    /// The displayed board has already been won.
    #[display("{_0} has already won")]
    GameOver(Player),
}

/// Result of [`GameState::play`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Played {
    /// The move was legal; this is the new state.
    Applied(GameState),
    /// The move was ignored; the state is unchanged.
    Ignored(IgnoredMove),
}

/// Errors raised by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StateError {
    /// A step index past the end of history.
    #[display("Step {step} is out of range for a history of {len} snapshots")]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// Length of the history.
        len: usize,
    },

    /// The state breaks one or more game invariants.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for StateError {}

impl GameState {
    /// Creates the default state: a single empty board at step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// Builds a state from raw parts without checking invariants.
    ///
    /// Use [`GameState::validate`] before trusting the result.
    pub fn from_parts(history: Vec<Board>, current_step: usize) -> Self {
        Self {
            history,
            current_step,
        }
    }

    /// Returns every snapshot of the current branch.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the index of the displayed snapshot.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the displayed snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::StepOutOfRange`] when the step does not index
    /// into history, which only happens for states built from outside data.
    pub fn current(&self) -> Result<&Board, StateError> {
        self.history
            .get(self.current_step)
            .ok_or(StateError::StepOutOfRange {
                step: self.current_step,
                len: self.history.len(),
            })
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Ignored when the square is taken or the displayed board is already
    /// won. Otherwise every snapshot after the current step is discarded
    /// and the new board becomes the tip.
    #[instrument(skip(self), fields(step = self.current_step, len = self.history.len()))]
    pub fn play(&self, pos: Position) -> Result<Played, StateError> {
        let board = self.current()?;

        if let Some(player) = rules::winner(board) {
            debug!(%player, "Board already won, ignoring move");
            return Ok(Played::Ignored(IgnoredMove::GameOver(player)));
        }
        if !board.is_empty(pos) {
            debug!(position = %pos, "Square occupied, ignoring move");
            return Ok(Played::Ignored(IgnoredMove::SquareOccupied(pos)));
        }

        let player = rules::next_player(board);
        let next = board.with(pos, Square::Occupied(player));

        let mut history = self.history[..=self.current_step].to_vec();
        history.push(next);
        let current_step = history.len() - 1;

        debug!(%player, position = %pos, current_step, "Move applied");
        Ok(Played::Applied(Self {
            history,
            current_step,
        }))
    }

    /// Points the state at an earlier or later snapshot.
    ///
    /// History is never modified.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::StepOutOfRange`] if `step` is not an index
    /// into history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Result<Self, StateError> {
        if step >= self.history.len() {
            return Err(StateError::StepOutOfRange {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            current_step: step,
        })
    }

    /// Checks every game invariant.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::InvariantViolation`] listing every broken
    /// invariant.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), StateError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            StateError::InvariantViolation(descriptions)
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
