//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board: who has won, whether play is over,
//! and what the finished game is worth. Rules are kept apart from board
//! storage so the search can call them on any board it builds.

mod outcome;
mod win;

pub use outcome::{terminal, utility};
pub use win::winner;
