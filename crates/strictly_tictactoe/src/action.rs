//! First-class action type for tic-tac-toe.
//!
//! An action names the cell a move targets. The mark placed there is
//! never part of the action: it is always derived from the board.

use crate::types::SIZE;
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate identifying the cell to mark.
///
/// Actions order row-major, so a sorted collection of actions walks the
/// board top-left to bottom-right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    /// Row index (0-2).
    pub row: usize,
    /// Column index (0-2).
    pub col: usize,
}

impl Action {
    /// Every cell of the board in row-major order.
    pub const ALL: [Action; 9] = [
        Action::new(0, 0),
        Action::new(0, 1),
        Action::new(0, 2),
        Action::new(1, 0),
        Action::new(1, 1),
        Action::new(1, 2),
        Action::new(2, 0),
        Action::new(2, 1),
        Action::new(2, 2),
    ];

    /// Creates an action. Range is checked when the action is applied.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Checks that both coordinates are on the board.
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error returned when an action cannot be applied to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidActionError {
    /// The coordinate lies outside the 3x3 grid.
    #[display("Action ({row}, {col}) is outside the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}
