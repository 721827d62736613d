//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules hold no state and do
//! no I/O, so every board (even one never reached by legal play) has an
//! answer.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::next_player;
pub use win::{LINES, winner};

use super::{Board, Player};
use tracing::instrument;

/// What the status line says about a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameStatus {
    /// A player completed a line.
    #[display("Winner: {_0}")]
    Winner(Player),
    /// Every square is filled and nobody won.
    #[display("Draw")]
    Draw,
    /// Play continues with this player.
    #[display("Next player: {_0}")]
    NextPlayer(Player),
}

/// Derives the status of a board.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some(player) = winner(board) {
        GameStatus::Winner(player)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::NextPlayer(next_player(board))
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Position, Square};
    use super::*;

    #[test]
    fn test_status_text() {
        assert_eq!(status(&Board::new()).to_string(), "Next player: X");
        assert_eq!(GameStatus::Winner(Player::O).to_string(), "Winner: O");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_winner_beats_full_board() {
        let board = Position::ALL.iter().fold(Board::new(), |b, pos| {
            b.with(*pos, Square::Occupied(Player::X))
        });
        assert_eq!(status(&board), GameStatus::Winner(Player::X));
    }
}
