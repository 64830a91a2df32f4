//! Mark balance invariant: X leads O by zero or one.

use super::Invariant;
use crate::types::{Board, Mark};

/// Invariant: X moves first and players alternate, so X's count is equal
/// to O's or exactly one higher.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count equals O count or exceeds it by one"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holds(s: &str) -> bool {
        MarkBalance::holds(&s.parse().unwrap())
    }

    #[test]
    fn test_balanced_boards_hold() {
        assert!(holds("........."));
        assert!(holds("X........"));
        assert!(holds("XO......."));
        assert!(holds("XOX/XXO/OXO"));
    }

    #[test]
    fn test_o_ahead_violates() {
        assert!(!holds("O........"));
        // Full, drawn, but O has five marks.
        assert!(!holds("XOX/OXO/OXO"));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        assert!(!holds("XX......."));
    }
}
