//! Monotonic history invariant: each snapshot adds at most one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: history starts from an empty board and every snapshot differs
/// from its predecessor by at most one square, which goes from empty to
/// occupied.
///
/// Squares therefore never change or clear once set.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let starts_empty = history
            .first()
            .is_none_or(|root| root.squares().iter().all(|s| *s == Square::Empty));

        starts_empty
            && history.windows(2).all(|pair| {
                let changed: Vec<_> = pair[0]
                    .squares()
                    .iter()
                    .zip(pair[1].squares())
                    .filter(|(before, after)| before != after)
                    .collect();
                match changed.as_slice() {
                    [] => true,
                    [(before, _)] => **before == Square::Empty,
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot only fills at most one empty square"
    }
}
