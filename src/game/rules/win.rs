//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// The 8 winning lines, checked in this order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the player holding the first completed line, if any.
///
/// A legal game never completes two lines for different players, so the
/// fixed scan order only matters for hand-built boards.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|[a, b, c]| {
        let sq = board.get(*a);
        if sq != Square::Empty && sq == board.get(*b) && sq == board.get(*c) {
            sq.player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(player: Player, line: [Position; 3]) -> Board {
        line.iter()
            .fold(Board::new(), |b, pos| b.with(*pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            assert_eq!(winner(&line_of(Player::X, line)), Some(Player::X), "{line:?}");
            assert_eq!(winner(&line_of(Player::O, line)), Some(Player::O), "{line:?}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_first_completed_line_wins() {
        let o_bottom = [Position::BottomLeft, Position::BottomCenter, Position::BottomRight];
        let board = o_bottom.iter().fold(line_of(Player::X, LINES[0]), |b, pos| {
            b.with(*pos, Square::Occupied(Player::O))
        });
        assert_eq!(winner(&board), Some(Player::X));

        let x_bottom = o_bottom.iter().fold(line_of(Player::O, LINES[0]), |b, pos| {
            b.with(*pos, Square::Occupied(Player::X))
        });
        assert_eq!(winner(&x_bottom), Some(Player::O));
    }
}
