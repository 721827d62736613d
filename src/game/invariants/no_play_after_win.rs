//! No-play-after-win invariant: a won board is always the tip.

use super::super::GameState;
use super::super::rules::winner;
use super::Invariant;

/// Invariant: no snapshot follows a snapshot that already has a winner.
pub struct NoPlayAfterWinInvariant;

impl Invariant<GameState> for NoPlayAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        history
            .iter()
            .take(history.len().saturating_sub(1))
            .all(|board| winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}
