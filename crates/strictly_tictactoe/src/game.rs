//! Game driver for tic-tac-toe.
//!
//! [`Game`] is the caller side of the board model: it holds the current
//! board, applies actions through [`result`], and stops once the board is
//! terminal. Every move is checked against the move invariants before it
//! is committed.

use crate::action::{Action, InvalidActionError};
use crate::invariants::{InvariantSet, MoveInvariants, Transition};
use crate::rules::{terminal, winner};
use crate::search::minimax;
use crate::transition::{initial_state, player, result};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Derives the status of a board.
    pub fn of(board: &Board) -> Self {
        match winner(board) {
            Some(mark) => GameStatus::Won(mark),
            None if terminal(board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,

    /// The board rejected the action.
    #[display("Invalid action: {_0}")]
    InvalidAction(InvalidActionError),

    /// A move invariant was violated (postcondition failure).
    #[display("Invariant violation: {_0}")]
    #[from(ignore)]
    InvariantViolation(#[error(not(source))] String),
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    history: Vec<Action>,
}

impl Game {
    /// Creates a game on the initial board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(initial_state())
    }

    /// Creates a game continuing from an arbitrary board.
    #[instrument]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played by this game, oldest first.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the mark that moves next.
    pub fn to_move(&self) -> Mark {
        player(&self.board)
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        GameStatus::of(&self.board)
    }

    /// Plays `action` for the player to move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the board is already terminal
    /// - [`MoveError::InvalidAction`] if the cell is off the board or taken
    /// - [`MoveError::InvariantViolation`] if the move broke a move invariant
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn play(&mut self, action: Action) -> Result<GameStatus, MoveError> {
        if terminal(&self.board) {
            return Err(MoveError::GameOver);
        }

        let before = self.board;
        let after = result(&before, action)?;

        MoveInvariants::check_all(&Transition { before, after }).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Move invariant violated");
            MoveError::InvariantViolation(descriptions)
        })?;

        self.board = after;
        self.history.push(action);

        let status = self.status();
        debug!(?status, "Move applied");
        Ok(status)
    }

    /// Plays the minimax move for the player to move.
    ///
    /// Returns the action played, or `None` when the game is already over.
    #[instrument(skip(self))]
    pub fn play_optimal(&mut self) -> Result<Option<Action>, MoveError> {
        let Some(action) = minimax(&self.board) else {
            return Ok(None);
        };
        self.play(action)?;
        Ok(Some(action))
    }

    /// Plays minimax moves for both sides until the game ends.
    #[instrument(skip(self))]
    pub fn play_out(&mut self) -> Result<GameStatus, MoveError> {
        while self.play_optimal()?.is_some() {}
        let status = self.status();
        debug!(?status, moves = self.history.len(), "Game finished");
        Ok(status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
