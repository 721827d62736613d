//! Whose turn it is, derived from the marks on the board.

use super::super::{Board, Player};
use tracing::instrument;

/// Returns the player to move: X when both players have placed the same
/// number of marks, O otherwise.
///
/// Turn order is never stored; it is always recomputed from the board so it
/// cannot disagree with the marks actually placed.
#[instrument(level = "trace")]
pub fn next_player(board: &Board) -> Player {
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}
