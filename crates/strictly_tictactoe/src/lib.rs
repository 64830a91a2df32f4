//! Strictly Tic-Tac-Toe - board model and exhaustive minimax search.
//!
//! # Architecture
//!
//! - **Board model**: immutable 3x3 boards plus pure functions for turn,
//!   legal actions, successors and outcome ([`player`], [`actions`],
//!   [`result`], [`winner`], [`terminal`], [`utility`])
//! - **Search**: full-depth minimax over the board model ([`minimax`],
//!   [`max_value`], [`min_value`])
//! - **Game**: a driver that owns a board, applies moves and checks
//!   invariants after every move
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{initial_state, minimax, result, terminal, utility};
//!
//! # fn main() -> Result<(), strictly_tictactoe::InvalidActionError> {
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod action;
mod game;
mod invariants;
mod rules;
mod search;
mod transition;
mod types;

// Crate-level exports - Board model
pub use action::{Action, InvalidActionError};
pub use rules::{terminal, utility, winner};
pub use transition::{actions, initial_state, player, result};
pub use types::{Board, Cell, Mark, ParseBoardError};

// Crate-level exports - Search
pub use search::{max_value, min_value, minimax, optimal_actions, value};

// Crate-level exports - Game driver
pub use game::{Game, GameStatus, MoveError};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalance, SinglePlacement, Transition,
};
