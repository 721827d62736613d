//! Keyboard mapping for the game screen.

use crossterm::event::{KeyCode, KeyEvent};

use super::view::Focus;
use crate::game::Position;

/// Arrow direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
}

/// What a key press asks the game screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor or the history selection.
    Navigate(Direction),
    /// Place a mark directly at a square (keys 1-9).
    PlaceAt(Position),
    /// Place at the cursor, or jump to the selected history entry.
    Activate,
    /// Switch between the board and the history list.
    ToggleFocus,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// What a key press asks the fault screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultAction {
    /// Clear the saved game and remount.
    TryAgain,
    /// Leave the program.
    Quit,
}

/// Maps a key on the game screen to an action.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    let action = match key.code {
        KeyCode::Up => Action::Navigate(Direction::Up),
        KeyCode::Down => Action::Navigate(Direction::Down),
        KeyCode::Left => Action::Navigate(Direction::Left),
        KeyCode::Right => Action::Navigate(Direction::Right),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10)? as usize - 1;
            Action::PlaceAt(Position::from_index(idx)?)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Maps a key on the fault screen to an action.
pub fn fault_action_for(key: KeyEvent) -> Option<FaultAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('t') | KeyCode::Char('T') => Some(FaultAction::TryAgain),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(FaultAction::Quit),
        _ => None,
    }
}

/// Moves the board cursor one square, stopping at the edges.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Moves the history selection one entry, stopping at the ends.
pub fn move_selection(selected: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Up => selected.saturating_sub(1),
        Direction::Down => (selected + 1).min(len.saturating_sub(1)),
        Direction::Left | Direction::Right => selected,
    }
}

/// Applies a navigation key to whichever pane has focus.
pub fn navigate(
    focus: Focus,
    cursor: Position,
    selected: usize,
    len: usize,
    direction: Direction,
) -> (Position, usize) {
    match focus {
        Focus::Board => (move_cursor(cursor, direction), selected),
        Focus::History => (cursor, move_selection(selected, len, direction)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Right), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
    }

    #[test]
    fn test_selection_stops_at_ends() {
        assert_eq!(move_selection(0, 3, Direction::Up), 0);
        assert_eq!(move_selection(2, 3, Direction::Down), 2);
        assert_eq!(move_selection(1, 3, Direction::Down), 2);
        assert_eq!(move_selection(0, 0, Direction::Down), 0);
    }

    #[test]
    fn test_digit_keys_place() {
        assert_eq!(
            action_for(key(KeyCode::Char('1'))),
            Some(Action::PlaceAt(Position::TopLeft))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('9'))),
            Some(Action::PlaceAt(Position::BottomRight))
        );
        assert_eq!(action_for(key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_fault_keys() {
        assert_eq!(fault_action_for(key(KeyCode::Enter)), Some(FaultAction::TryAgain));
        assert_eq!(fault_action_for(key(KeyCode::Char('q'))), Some(FaultAction::Quit));
        assert_eq!(fault_action_for(key(KeyCode::Char('r'))), None);
    }
}
