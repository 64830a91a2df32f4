//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark, SIZE};
use strum::IntoEnumIterator;

/// Returns the mark that completes a line, or `None`.
///
/// Lines are scanned per mark, X before O. For each index `i` the row `i`
/// is checked before column `i`, then the two diagonals. Legal play can
/// never give both marks a line; the fixed order only keeps the answer
/// deterministic for hand-built boards.
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| has_line(board, mark))
}

fn has_line(board: &Board, mark: Mark) -> bool {
    let owns = |row: usize, col: usize| board.get(row, col) == Some(Cell::Occupied(mark));

    let straight =
        (0..SIZE).any(|i| (0..SIZE).all(|j| owns(i, j)) || (0..SIZE).all(|j| owns(j, i)));

    straight || (0..SIZE).all(|i| owns(i, i)) || (0..SIZE).all(|i| owns(i, SIZE - 1 - i))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(winner(&board("XXX/OO./...")), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(winner(&board("XO./XO./.OX")), Some(Mark::O));
    }

    #[test]
    fn test_winner_diagonal() {
        assert_eq!(winner(&board("OX./XO./X.O")), Some(Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(winner(&board("OOX/.X./X..")), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(winner(&board("XX./.../...")), None);
    }

    #[test]
    fn test_no_winner_mixed_line() {
        assert_eq!(winner(&board("XOX/OXO/OXO")), None);
    }

    #[test]
    fn test_x_checked_before_o() {
        // Unreachable in play: both marks own a row.
        assert_eq!(winner(&board("OOO/XXX/...")), Some(Mark::X));
    }
}
