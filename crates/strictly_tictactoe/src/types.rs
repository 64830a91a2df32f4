//! Core domain types for tic-tac-toe.

use crate::action::Action;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board side length.
pub(crate) const SIZE: usize = 3;

/// Mark placed by a player.
///
/// Declaration order is evaluation order: X is always examined before O.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Cell {
    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Mark::X) => 'X',
            Cell::Occupied(Mark::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a plain value: every operation that "changes" a board
/// returns a new one, so sibling search branches never observe each
/// other's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed as `cells[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Creates a board from explicit rows.
    ///
    /// No turn-order check is made; callers building arbitrary positions
    /// can validate them with [`crate::MarkBalance`].
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at `(row, col)`, or `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Iterates over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Counts the cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells()
            .filter(|cell| *cell == Cell::Occupied(mark))
            .count()
    }

    /// Counts the non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells().filter(|cell| *cell != Cell::Empty).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells().all(|cell| cell != Cell::Empty)
    }

    /// Returns a copy of this board with `cell` written at `(row, col)`.
    ///
    /// Bounds are the caller's responsibility.
    pub(crate) fn with(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error returned when text cannot be parsed as a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a cell nor a separator.
    #[display("Unexpected character {ch:?} at index {index}")]
    UnexpectedChar {
        /// Offending character.
        ch: char,
        /// Byte index in the input.
        index: usize,
    },
    /// The input did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells read.
        found: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks, `.`, `-` and `_` are empty;
    /// whitespace, `|` and `/` separate rows and are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(SIZE * SIZE);
        for (index, ch) in s.char_indices() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' => Cell::Empty,
                '|' | '/' => continue,
                c if c.is_whitespace() => continue,
                ch => return Err(ParseBoardError::UnexpectedChar { ch, index }),
            };
            cells.push(cell);
        }

        if cells.len() != SIZE * SIZE {
            return Err(ParseBoardError::WrongCellCount { found: cells.len() });
        }

        let board = Action::ALL
            .into_iter()
            .zip(cells)
            .fold(Board::new(), |board, (action, cell)| {
                board.with(action.row, action.col, cell)
            });
        Ok(board)
    }
}
