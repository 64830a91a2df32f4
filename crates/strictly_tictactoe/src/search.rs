//! Exhaustive minimax search.
//!
//! [`max_value`] and [`min_value`] call each other until a terminal board is
//! reached, so every call walks the complete subtree below its board. Each
//! frame owns its board; nothing is shared or cached between calls.

use crate::action::Action;
use crate::rules::{terminal, utility};
use crate::transition::{actions, player, result};
use crate::types::{Board, Mark};
use tracing::{debug, instrument, warn};

/// Returns the optimal action for the player to move, or `None` on a
/// terminal board.
///
/// X picks the action with the highest value, O the lowest. Ties keep the
/// first action in row-major order.
#[instrument(skip(board), fields(to_move = %player(board), occupied = board.occupied()))]
pub fn minimax(board: &Board) -> Option<Action> {
    if terminal(board) {
        debug!("Board is terminal, no move to make");
        return None;
    }

    let mover = player(board);
    let mut best: Option<(Action, i32)> = None;

    for (action, next) in successors(board) {
        let value = reply_value(mover, &next);
        let improves = match best {
            None => true,
            Some((_, best_value)) => match mover {
                Mark::X => value > best_value,
                Mark::O => value < best_value,
            },
        };
        if improves {
            best = Some((action, value));
        }
    }

    let (action, value) = best?;
    debug!(%mover, %action, value, "Selected move");
    Some(action)
}

/// Value of `board` when X, the maximiser, is to move.
pub fn max_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .fold(i32::MIN, i32::max)
}

/// Value of `board` when O, the minimiser, is to move.
pub fn min_value(board: &Board) -> i32 {
    if terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .fold(i32::MAX, i32::min)
}

/// Game value of `board` under perfect play by both sides.
pub fn value(board: &Board) -> i32 {
    match player(board) {
        Mark::X => max_value(board),
        Mark::O => min_value(board),
    }
}

/// Returns every action that reaches the best value for the player to
/// move, in row-major order. Empty on a terminal board.
#[instrument(skip(board), fields(to_move = %player(board), occupied = board.occupied()))]
pub fn optimal_actions(board: &Board) -> Vec<Action> {
    if terminal(board) {
        return Vec::new();
    }

    let mover = player(board);
    let scored: Vec<(Action, i32)> = successors(board)
        .map(|(action, next)| (action, reply_value(mover, &next)))
        .collect();

    let best = match mover {
        Mark::X => scored.iter().map(|(_, v)| *v).max(),
        Mark::O => scored.iter().map(|(_, v)| *v).min(),
    };

    let optimal: Vec<Action> = scored
        .into_iter()
        .filter(|(_, v)| Some(*v) == best)
        .map(|(action, _)| action)
        .collect();
    debug!(%mover, count = optimal.len(), ?best, "Optimal actions");
    optimal
}

/// Value of a child board, scored by the opponent of `mover`.
fn reply_value(mover: Mark, next: &Board) -> i32 {
    match mover.opponent() {
        Mark::X => max_value(next),
        Mark::O => min_value(next),
    }
}

/// Legal actions paired with the boards they lead to.
///
/// Actions come from the board itself, so `result` should never reject
/// them; a rejection is logged rather than dropped silently.
fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    actions(board)
        .into_iter()
        .filter_map(move |action| match result(board, action) {
            Ok(next) => Some((action, next)),
            Err(error) => {
                warn!(%action, %error, "Legal action rejected, skipping");
                None
            }
        })
}
