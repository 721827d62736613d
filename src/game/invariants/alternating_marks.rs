//! Alternating marks invariant: X leads O by zero or one mark.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: on every snapshot X has placed as many marks as O, or one
/// more.
///
/// This is what makes the derived next player agree with real turn order.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().iter().all(|board| {
            let x = board.count(Player::X);
            let o = board.count(Player::O);
            x == o || x == o + 1
        })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::super::state_from;
    use super::*;

    #[test]
    fn test_alternating_history_holds() {
        let state = state_from(&[".........", "....X....", "O...X...."], 2);
        assert!(AlternatingMarksInvariant::holds(&state));
    }

    #[test]
    fn test_o_first_violates() {
        let state = state_from(&[".........", "....O...."], 1);
        assert!(!AlternatingMarksInvariant::holds(&state));
    }

    #[test]
    fn test_double_x_violates() {
        let state = state_from(&["XX......."], 0);
        assert!(!AlternatingMarksInvariant::holds(&state));
    }
}
