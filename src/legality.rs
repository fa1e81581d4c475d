//! Placement legality: bounds, occupancy, suicide, and ko.
//!
//! Every check runs on a clone of the board, so checking a move never
//! changes the game it is asked about.

use log::trace;

use crate::board::{Color, Point};
use crate::groups::{find_dead_stones, has_liberty, remove_stones};
use crate::position::{GameState, MoveError};

/// Check whether `color` may place a stone at `pt`.
///
/// The checks run in order and stop at the first failure:
/// 1. the point must be on the board
/// 2. the point must be empty
/// 3. if the new stone's group has a liberty, the move is legal
/// 4. otherwise opponent stones without liberties are removed; if the group
///    still has none, the move is suicide
/// 5. a capturing move that recreates the previous board is a ko retake,
///    illegal as long as the last move captured something
pub fn check_legal(state: &GameState, pt: Point, color: Color) -> Result<(), MoveError> {
    if !state.board.contains(pt) {
        trace!("{color:?} at {pt:?}: outside the board");
        return Err(MoveError::OutOfBounds);
    }
    if state.board.get(pt).is_some() {
        trace!("{color:?} at {pt:?}: point occupied");
        return Err(MoveError::Occupied);
    }

    let mut trial = state.board.clone();
    trial.set(pt, Some(color));
    if has_liberty(&trial, pt) {
        return Ok(());
    }

    let dead = find_dead_stones(&trial, color.opponent());
    remove_stones(&mut trial, &dead);
    if !has_liberty(&trial, pt) {
        trace!("{color:?} at {pt:?}: no liberty after captures");
        return Err(MoveError::Suicide);
    }

    if !state.last_captured.is_empty() && trial == state.previous {
        trace!("{color:?} at {pt:?}: repeats the previous board");
        return Err(MoveError::Ko);
    }
    Ok(())
}

/// Shorthand for `check_legal(..).is_ok()`.
pub fn is_legal(state: &GameState, pt: Point, color: Color) -> bool {
    check_legal(state, pt, color).is_ok()
}

/// Legal placements for the side to move, in row-major order.
pub fn legal_moves(state: &GameState) -> Vec<Point> {
    state
        .board
        .empty_points()
        .filter(|&pt| is_legal(state, pt, state.to_move))
        .collect()
}
