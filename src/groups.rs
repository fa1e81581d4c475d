//! Connected groups and liberties.
//!
//! Groups are never stored: every query flood-fills the board it is given,
//! so results always reflect the current snapshot even after captures change
//! connectivity.

use crate::board::{Board, Color, Point};

/// Collect the connected group containing `start`.
///
/// Uses an explicit stack with a visited set, so every point is expanded at
/// most once whatever the shape of the group. If `start` is empty the result
/// is the empty region around it.
///
/// # Panics
/// If `start` is off the board.
pub fn connected_group(board: &Board, start: Point) -> Vec<Point> {
    assert!(
        board.contains(start),
        "group traversal started outside the board at {start:?}"
    );
    let color = board.get(start);
    let size = board.size();
    let mut stack = vec![start];
    let mut visited = vec![false; size * size];
    let mut group = Vec::new();

    while let Some(pt) = stack.pop() {
        let i = pt.0 * size + pt.1;
        if visited[i] {
            continue;
        }
        visited[i] = true;
        group.push(pt);
        for n in board.neighbors(pt) {
            if !visited[n.0 * size + n.1] && board.get(n) == color {
                stack.push(n);
            }
        }
    }
    group
}

/// Whether the group containing `pt` touches at least one empty point.
pub fn has_liberty(board: &Board, pt: Point) -> bool {
    connected_group(board, pt)
        .into_iter()
        .any(|member| board.neighbors(member).any(|n| board.get(n).is_none()))
}

/// All stones of `color` whose group has no liberty, in row-major order.
pub fn find_dead_stones(board: &Board, color: Color) -> Vec<Point> {
    let size = board.size();
    let mut checked = vec![false; size * size];
    let mut dead = Vec::new();

    for pt in board.points() {
        if board.get(pt) != Some(color) || checked[pt.0 * size + pt.1] {
            continue;
        }
        // Whole groups share one verdict, so mark every member at once.
        let group = connected_group(board, pt);
        let alive = group
            .iter()
            .any(|&m| board.neighbors(m).any(|n| board.get(n).is_none()));
        for &m in &group {
            checked[m.0 * size + m.1] = true;
        }
        if !alive {
            dead.extend(group);
        }
    }
    dead.sort_unstable();
    dead
}

/// Clear every listed point.
pub fn remove_stones(board: &mut Board, positions: &[Point]) {
    for &pt in positions {
        board.set(pt, None);
    }
}
