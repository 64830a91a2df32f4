//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that every legally reached board, and
//! every single move, must satisfy. They are testable on their own and are
//! checked as postconditions by [`crate::Game`].

mod mark_balance;
mod single_placement;

pub use mark_balance::MarkBalance;
pub use single_placement::{SinglePlacement, Transition};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
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
/// Implemented for tuples so sets compose as types.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I> InvariantSet<S> for (I,)
where
    I: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        if I::holds(state) {
            Ok(())
        } else {
            Err(vec![InvariantViolation::new(I::description())])
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a single move must preserve.
pub(crate) type MoveInvariants = (SinglePlacement, AfterBalance);

/// [`MarkBalance`] lifted to the board after a transition.
pub(crate) struct AfterBalance;

impl Invariant<Transition> for AfterBalance {
    fn holds(transition: &Transition) -> bool {
        MarkBalance::holds(&transition.after)
    }

    fn description() -> &'static str {
        MarkBalance::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Board, initial_state, result};

    #[test]
    fn test_move_invariants_hold_for_legal_move() {
        let before = initial_state();
        let after = result(&before, Action::new(1, 1)).unwrap();
        assert!(MoveInvariants::check_all(&Transition { before, after }).is_ok());
    }

    #[test]
    fn test_move_invariants_collect_every_violation() {
        let before = initial_state();
        let after: Board = "OO./.../...".parse().unwrap();

        let violations = MoveInvariants::check_all(&Transition { before, after }).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, SinglePlacement::description());
        assert_eq!(violations[1].description, MarkBalance::description());
    }

    #[test]
    fn test_single_invariant_as_set() {
        let board: Board = "XX./.../...".parse().unwrap();
        let violations = <(MarkBalance,)>::check_all(&board).unwrap_err();
        assert_eq!(violations[0].to_string(), MarkBalance::description());
    }
}
