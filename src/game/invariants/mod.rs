//! First-class invariants over a game history.
//!
//! Transitions built through [`GameState::play`](super::GameState::play)
//! and [`GameState::jump_to`](super::GameState::jump_to) preserve all of
//! these. States read back from storage only pass a structural check, so the
//! presentation layer runs the full set before drawing anything.

pub mod alternating_marks;
pub mod monotonic_history;
pub mod no_play_after_win;
pub mod step_in_range;

pub use alternating_marks::AlternatingMarksInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use no_play_after_win::NoPlayAfterWinInvariant;
pub use step_in_range::StepInRangeInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants; every member is checked even after
/// one fails, so the error lists all violations.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

/// Every invariant a game history must satisfy.
pub type GameInvariants = (
    StepInRangeInvariant,
    MonotonicHistoryInvariant,
    AlternatingMarksInvariant,
    NoPlayAfterWinInvariant,
);

/// Shorthand used by the invariant unit tests.
#[cfg(test)]
pub(crate) fn state_from(rows: &[&str], current_step: usize) -> super::GameState {
    use super::{Board, GameState, Player, Position, Square};

    let history = rows
        .iter()
        .map(|marks| {
            Position::ALL.iter().zip(marks.chars()).fold(Board::new(), |b, (pos, c)| {
                let sq = match c {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
                b.with(*pos, sq)
            })
        })
        .collect();
    GameState::from_parts(history, current_step)
}
