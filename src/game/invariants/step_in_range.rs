//! Step-in-range invariant: the current step indexes into history.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty and the current step points into it.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step() < state.history().len()
    }

    fn description() -> &'static str {
        "Current step points into a non-empty history"
    }
}

#[cfg(test)]
mod tests {
    use super::super::state_from;
    use super::*;

    #[test]
    fn test_new_game_holds() {
        assert!(StepInRangeInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_empty_history_violates() {
        assert!(!StepInRangeInvariant::holds(&GameState::from_parts(Vec::new(), 0)));
    }

    #[test]
    fn test_step_past_tip_violates() {
        let state = state_from(&[".........", "X........"], 2);
        assert!(!StepInRangeInvariant::holds(&state));
    }
}
