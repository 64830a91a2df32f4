//! Turn order, legal actions and successor boards.

use crate::action::{Action, InvalidActionError};
use crate::types::{Board, Cell, Mark};
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns the starting board: nine empty cells.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the mark that moves next.
///
/// X moves whenever the counts are level, O when X is one ahead. Boards
/// that break this balance get an answer, but not a meaningful one.
pub fn player(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty coordinate on the board.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| board.get(action.row, action.col) == Some(Cell::Empty))
        .collect()
}

/// Returns the board reached by `player(board)` marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidActionError`] when the coordinate is off the board or
/// the cell is already occupied.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    let Action { row, col } = action;
    if !action.in_bounds() {
        return Err(InvalidActionError::OutOfBounds { row, col });
    }
    if board.get(row, col) != Some(Cell::Empty) {
        return Err(InvalidActionError::Occupied { row, col });
    }
    Ok(board.with(row, col, Cell::Occupied(player(board))))
}
