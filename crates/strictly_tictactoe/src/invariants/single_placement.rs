//! Single placement invariant: a move fills exactly one empty cell.

use super::Invariant;
use crate::transition::player;
use crate::types::{Board, Cell};
use serde::{Deserialize, Serialize};

/// A board before and after one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Board the move was made on.
    pub before: Board,
    /// Board the move produced.
    pub after: Board,
}

/// Invariant: exactly one cell differs, and it went from empty to the mark
/// of the player whose turn it was.
pub struct SinglePlacement;

impl Invariant<Transition> for SinglePlacement {
    fn holds(transition: &Transition) -> bool {
        let expected = Cell::Occupied(player(&transition.before));
        let mut changed = transition
            .before
            .cells()
            .zip(transition.after.cells())
            .filter(|(before, after)| before != after);

        match (changed.next(), changed.next()) {
            (Some((Cell::Empty, after)), None) => after == expected,
            _ => false,
        }
    }

    fn description() -> &'static str {
        "Exactly one empty cell receives the mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, initial_state, result};

    fn transition(before: &str, after: &str) -> Transition {
        Transition {
            before: before.parse().unwrap(),
            after: after.parse().unwrap(),
        }
    }

    #[test]
    fn test_result_holds() {
        let before = initial_state();
        let after = result(&before, Action::new(2, 0)).unwrap();
        assert!(SinglePlacement::holds(&Transition { before, after }));
    }

    #[test]
    fn test_no_change_violates() {
        assert!(!SinglePlacement::holds(&transition("X........", "X........")));
    }

    #[test]
    fn test_wrong_mark_violates() {
        assert!(!SinglePlacement::holds(&transition("X........", "XX.......")));
    }

    #[test]
    fn test_overwrite_violates() {
        assert!(!SinglePlacement::holds(&transition("X........", "O........")));
    }

    #[test]
    fn test_two_cells_violate() {
        assert!(!SinglePlacement::holds(&transition(".........", "XO.......")));
    }
}
