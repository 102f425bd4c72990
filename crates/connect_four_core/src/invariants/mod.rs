//! First-class invariants for Connect Four.
//!
//! Invariants are logical properties that must hold throughout a round.
//! They are testable independently and are checked after every move in
//! debug builds.

mod alternating_turn;
mod column_contiguity;
mod history_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use column_contiguity::ColumnContiguityInvariant;
pub use history_consistent::HistoryConsistentInvariant;

use crate::{Board, Game};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
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
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Board contiguity lifted to a whole game.
impl Invariant<Game> for ColumnContiguityInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<Board>>::holds(game.board())
    }

    fn description() -> &'static str {
        <Self as Invariant<Board>>::description()
    }
}

/// Every invariant a [`Game`] maintains.
pub type GameInvariants = (
    ColumnContiguityInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);
