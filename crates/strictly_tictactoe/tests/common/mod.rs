//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};
use strictly_tictactoe::{Board, actions, initial_state, result, terminal};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parses a board literal such as `"XO./.../..."`.
pub fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}

/// Every board reachable from the initial state by legal play, each once.
pub fn reachable_boards() -> Vec<Board> {
    let start = initial_state();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    let mut boards = Vec::new();

    while let Some(current) = queue.pop_front() {
        boards.push(current);
        if terminal(&current) {
            continue;
        }
        for action in actions(&current) {
            let next = result(&current, action).expect("action from actions()");
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }

    boards
}
