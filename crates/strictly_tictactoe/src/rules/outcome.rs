//! End-of-game detection and scoring.

use super::win::winner;
use crate::types::{Board, Mark};

/// Checks if the game is over: someone has a line, or the board is full.
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || board.is_full()
}

/// Scores a board from X's point of view.
///
/// `1` when X has won, `-1` when O has won, `0` for a draw. Boards that
/// are not terminal also score `0`.
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_not_terminal() {
        let board = Board::new();
        assert!(!terminal(&board));
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_win_is_terminal() {
        let board = board("XXX/OO./...");
        assert!(terminal(&board));
        assert_eq!(utility(&board), 1);
    }

    #[test]
    fn test_o_win_scores_negative() {
        let board = board("XX./OOO/X..");
        assert!(terminal(&board));
        assert_eq!(utility(&board), -1);
    }

    #[test]
    fn test_draw_detection() {
        let board = board("XOX/OXO/OXO");
        assert!(terminal(&board));
        assert_eq!(winner(&board), None);
        assert_eq!(utility(&board), 0);
    }

    #[test]
    fn test_win_on_last_cell_is_not_draw() {
        let board = board("XOX/OXO/OXX");
        assert!(board.is_full());
        assert_eq!(utility(&board), 1);
    }
}
