//! Minimax search with alpha-beta pruning.
//!
//! Black maximizes and White minimizes the outcome score: `WIN_SCORE` for a
//! Black win, `-WIN_SCORE` for a White win, `TIE_SCORE` for a tie. The same
//! judgement (stone count plus komi) scores finished games and nodes where
//! the depth or time limit stops the recursion.
//!
//! Every child node is a clone of its parent's `GameState` with one move
//! committed, so sibling branches never see each other's stones.

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Color, Point};
use crate::constants::{INFINITY, TIE_SCORE, WIN_SCORE};
use crate::legality::is_legal;
use crate::position::{Action, GameState, Move};

/// Bounds on how far the search may go.
///
/// All limits are checked when a node is entered; a node past any of them is
/// scored as if the game ended there. Running out of time or nodes also stops
/// the top-level loop, see [`Searcher::choose_move`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SearchLimits {
    /// Maximum depth in plies below the root
    pub max_depth: Option<usize>,
    /// Wall-clock budget for one decision
    pub time_limit: Option<Duration>,
    /// Node budget for one decision
    pub max_nodes: Option<u64>,
}

impl SearchLimits {
    pub fn depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
            ..Self::default()
        }
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

/// Result of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Move to play
    pub mv: Move,
    /// Outcome score of that move
    pub value: i32,
    /// Number of nodes visited
    pub nodes: u64,
    /// False if the time limit cut the search short
    pub completed: bool,
}

/// Score a position by its outcome if the game ended now.
pub fn outcome_score(state: &GameState) -> i32 {
    match state.winner() {
        Some(Color::Black) => WIN_SCORE,
        Some(Color::White) => -WIN_SCORE,
        None => TIE_SCORE,
    }
}

/// Empty points in search order: corners first, then the rest row by row.
pub fn ordered_candidates(state: &GameState) -> Vec<Point> {
    let board = &state.board;
    let corners = board.corners();
    let mut moves: Vec<Point> = Vec::with_capacity(board.size() * board.size());
    for pt in corners {
        // Boards of size 1 repeat the same corner.
        if board.is_empty_at(pt) && !moves.contains(&pt) {
            moves.push(pt);
        }
    }
    moves.extend(board.empty_points().filter(|pt| !corners.contains(pt)));
    moves
}

/// Depth-first minimax searcher.
///
/// A `Searcher` holds only limits and counters; the positions it explores
/// are passed in by reference and never modified.
pub struct Searcher {
    limits: SearchLimits,
    deadline: Option<Instant>,
    nodes: u64,
    interrupted: bool,
}

impl Searcher {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            deadline: None,
            nodes: 0,
            interrupted: false,
        }
    }

    fn start(&mut self) {
        self.nodes = 0;
        self.interrupted = false;
        self.deadline = self.limits.time_limit.map(|t| Instant::now() + t);
    }

    /// Minimax value of `state` with the side to move choosing next.
    pub fn evaluate(&mut self, state: &GameState) -> i32 {
        self.start();
        self.minimax(state, 0, -INFINITY, INFINITY)
    }

    /// Pick a move for the side to move.
    ///
    /// Placements are tried in [`ordered_candidates`] order and the first one
    /// reaching the best value is kept. Passing is chosen only when it is
    /// strictly better than every legal placement, when no placement is legal,
    /// or when the game is already over.
    ///
    /// If the time or node budget runs out, the best fully searched placement
    /// is returned. When even the first placement was not searched to the end,
    /// it is returned as a fallback with its partial value.
    pub fn choose_move(&mut self, state: &GameState) -> Decision {
        self.start();

        if state.is_terminal(Action::Move) {
            self.nodes += 1;
            return self.decision(Move::Pass, outcome_score(state));
        }

        let color = state.to_move;
        let maximizing = color == Color::Black;
        let mut best_value = if maximizing { -INFINITY } else { INFINITY };
        let mut best: Option<Point> = None;

        for pt in ordered_candidates(state) {
            if !is_legal(state, pt, color) {
                continue;
            }
            let mut child = state.clone();
            child.commit_placement(pt);
            // Only strict improvements matter, so the best value so far bounds
            // the window.
            let value = if maximizing {
                self.minimax(&child, 1, best_value, INFINITY)
            } else {
                self.minimax(&child, 1, -INFINITY, best_value)
            };
            if self.interrupted {
                // A partial subtree value is not comparable with finished ones.
                if best.is_none() {
                    best_value = value;
                    best = Some(pt);
                }
                break;
            }
            let improves = if maximizing {
                value > best_value
            } else {
                value < best_value
            };
            if improves || best.is_none() {
                best_value = value;
                best = Some(pt);
            }
        }

        let decision = match best {
            None => {
                let value = self.pass_value(state, 0, -INFINITY, INFINITY);
                self.decision(Move::Pass, value)
            }
            Some(pt) if self.interrupted => self.decision(Move::Place(pt), best_value),
            Some(pt) => {
                let pass = if maximizing {
                    self.pass_value(state, 0, best_value, INFINITY)
                } else {
                    self.pass_value(state, 0, -INFINITY, best_value)
                };
                let pass_better = if maximizing {
                    pass > best_value
                } else {
                    pass < best_value
                };
                if pass_better && !self.interrupted {
                    self.decision(Move::Pass, pass)
                } else {
                    self.decision(Move::Place(pt), best_value)
                }
            }
        };
        debug!(
            "{color:?}: {:?} value {} after {} nodes{}",
            decision.mv,
            decision.value,
            decision.nodes,
            if decision.completed { "" } else { " (budget exhausted)" }
        );
        decision
    }

    fn decision(&self, mv: Move, value: i32) -> Decision {
        Decision {
            mv,
            value,
            nodes: self.nodes,
            completed: !self.interrupted,
        }
    }

    /// Whether a node at `depth` must be scored without expanding it.
    fn cut_off(&mut self, depth: usize) -> bool {
        if self.limits.max_nodes.is_some_and(|max| self.nodes > max) {
            self.interrupted = true;
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.interrupted = true;
                return true;
            }
        }
        self.limits.max_depth.is_some_and(|max| depth >= max)
    }

    fn minimax(&mut self, state: &GameState, depth: usize, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;
        if state.is_terminal(Action::Move) || self.cut_off(depth) {
            return outcome_score(state);
        }

        let color = state.to_move;
        match color {
            Color::Black => {
                let mut value = -INFINITY;
                for pt in ordered_candidates(state) {
                    if !is_legal(state, pt, color) {
                        continue;
                    }
                    let mut child = state.clone();
                    child.commit_placement(pt);
                    value = value.max(self.minimax(&child, depth + 1, alpha, beta));
                    alpha = alpha.max(value);
                    if alpha >= beta {
                        return value;
                    }
                }
                value.max(self.pass_value(state, depth, alpha, beta))
            }
            Color::White => {
                let mut value = INFINITY;
                for pt in ordered_candidates(state) {
                    if !is_legal(state, pt, color) {
                        continue;
                    }
                    let mut child = state.clone();
                    child.commit_placement(pt);
                    value = value.min(self.minimax(&child, depth + 1, alpha, beta));
                    beta = beta.min(value);
                    if beta <= alpha {
                        return value;
                    }
                }
                value.min(self.pass_value(state, depth, alpha, beta))
            }
        }
    }

    /// Value of the side to move passing at a node of the given depth.
    fn pass_value(&mut self, state: &GameState, depth: usize, alpha: i32, beta: i32) -> i32 {
        if state.is_terminal(Action::Pass) {
            self.nodes += 1;
            return outcome_score(state);
        }
        let mut child = state.clone();
        child.pass();
        self.minimax(&child, depth + 1, alpha, beta)
    }
}

/// Search `state` with the given limits and return the chosen move.
pub fn best_move(state: &GameState, limits: SearchLimits) -> Move {
    Searcher::new(limits).choose_move(state).mv
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::board_from_strs;

    fn state_of(to_move: Color, rows: &[&str]) -> GameState {
        let board = board_from_strs(rows);
        GameState::from_boards(to_move, board.clone(), board)
    }

    #[test]
    fn test_outcome_score() {
        let state = state_of(Color::Black, &["XXX..", "XX...", ".....", ".....", "O...."]);
        assert_eq!(outcome_score(&state), WIN_SCORE);
        let state = state_of(Color::Black, &["XX...", ".....", ".....", ".....", "....."]);
        assert_eq!(outcome_score(&state), -WIN_SCORE);
        let state = state_of(Color::Black, &["XX..", "....", "....", "...."]);
        assert_eq!(outcome_score(&state), TIE_SCORE);
    }

    #[test]
    fn test_ordered_candidates_corners_first() {
        let state = GameState::new(5);
        let moves = ordered_candidates(&state);
        assert_eq!(moves.len(), 25);
        assert_eq!(&moves[..4], &[(0, 0), (0, 4), (4, 0), (4, 4)]);
        assert_eq!(moves[4], (0, 1));

        let state = state_of(Color::Black, &["X....", ".....", ".....", ".....", "....O"]);
        let moves = ordered_candidates(&state);
        assert_eq!(moves.len(), 23);
        assert_eq!(&moves[..3], &[(0, 4), (4, 0), (0, 1)]);
    }

    #[test]
    fn test_terminal_root_returns_score_without_search() {
        let state = state_of(Color::Black, &["XXX..", "XX...", ".....", ".....", "....."])
            .with_move_count(24);
        let decision = Searcher::new(SearchLimits::default()).choose_move(&state);
        assert_eq!(decision.mv, Move::Pass);
        assert_eq!(decision.value, WIN_SCORE);
        assert_eq!(decision.nodes, 1);
    }

    #[test]
    fn test_finds_capture() {
        let state = state_of(
            Color::Black,
            &[
                "OX...", //
                ".....", //
                "..X.O", //
                ".....", //
                "O.X.X",
            ],
        );
        let decision = Searcher::new(SearchLimits::depth(1)).choose_move(&state);
        assert_eq!(decision.mv, Move::Place((1, 0)));
        assert_eq!(decision.value, WIN_SCORE);
    }

    #[test]
    fn test_minimizer_folds_pass_with_min() {
        // White has no legal placement: both empty corners are suicide.
        let state = state_of(
            Color::White,
            &[
                ".XXXX", //
                "XXXXX", //
                "XXXXX", //
                "XXXXX", //
                "XXXX.",
            ],
        );
        let mut searcher = Searcher::new(SearchLimits::depth(3));
        assert_eq!(searcher.evaluate(&state), WIN_SCORE);

        let decision = searcher.choose_move(&state);
        assert_eq!(decision.mv, Move::Pass);
        assert_eq!(decision.value, WIN_SCORE);
    }

    #[test]
    fn test_pass_chosen_when_strictly_better() {
        // Black leads 13 to 8 + 2.5 and White has just passed, so passing wins.
        // Black's only legal placements fill one of its own two eyes, after
        // which White captures the whole group in the other.
        let board = board_from_strs(&[
            ".X.XX", //
            "XXXXX", //
            "XXXXX", //
            "OOOOO", //
            ".O.OO",
        ]);
        let mut state = GameState::from_boards(Color::White, board.clone(), board);
        state.play(Move::Pass).unwrap();
        assert!(state.is_terminal(Action::Pass));

        let decision = Searcher::new(SearchLimits::depth(2)).choose_move(&state);
        assert_eq!(decision.mv, Move::Pass);
        assert_eq!(decision.value, WIN_SCORE);
    }

    #[test]
    fn test_placement_kept_when_tied_with_pass() {
        // Passing ends the game with a Black win, and so does any placement
        // judged one ply later: the placement is kept.
        let board = board_from_strs(&[
            "XXX..", //
            "XX...", //
            ".....", //
            ".....", //
            ".....",
        ]);
        let mut state = GameState::from_boards(Color::White, board.clone(), board);
        state.play(Move::Pass).unwrap();

        let decision = Searcher::new(SearchLimits::depth(1)).choose_move(&state);
        assert_eq!(decision.mv, Move::Place((0, 4)));
        assert_eq!(decision.value, WIN_SCORE);
    }

    #[test]
    fn test_search_leaves_input_untouched() {
        let state = state_of(Color::Black, &["OX...", ".....", "..X.O", ".....", "O.X.X"]);
        let snapshot = state.clone();
        let _ = Searcher::new(SearchLimits::depth(2)).choose_move(&state);
        assert_eq!(state.board, snapshot.board);
        assert_eq!(state.previous, snapshot.previous);
        assert_eq!(state.move_count, snapshot.move_count);
        assert_eq!(state.to_move, snapshot.to_move);
        assert_eq!(state.last_captured, snapshot.last_captured);
    }

    #[test]
    fn test_empty_board_opens_in_corner() {
        let state = GameState::new(5);
        let decision = Searcher::new(SearchLimits::depth(2)).choose_move(&state);
        let corners = state.board.corners();
        match decision.mv {
            Move::Place(pt) => assert!(corners.contains(&pt), "expected a corner, got {pt:?}"),
            Move::Pass => panic!("expected a corner, got pass"),
        }
        assert!(decision.completed);
    }

    #[test]
    fn test_expired_time_limit_still_returns_move() {
        let state = GameState::new(5);
        let limits = SearchLimits::default().with_time_limit(Duration::ZERO);
        let decision = Searcher::new(limits).choose_move(&state);
        assert_eq!(decision.mv, Move::Place((0, 0)));
        assert!(!decision.completed);
    }

    #[test]
    fn test_interrupted_search_keeps_finished_move() {
        let state = state_of(
            Color::Black,
            &[
                "OX...", //
                ".....", //
                "..X.O", //
                ".....", //
                "O.X.X",
            ],
        );
        // The first candidate (0,4) is searched in full and loses. The budget
        // runs out on the second, so the capture at (1,0) is never compared.
        let limits = SearchLimits::depth(1).with_max_nodes(1);
        let mut searcher = Searcher::new(limits);
        let decision = searcher.choose_move(&state);
        assert!(searcher.interrupted);
        assert_eq!(decision.mv, Move::Place((0, 4)));
        assert_eq!(decision.value, -WIN_SCORE);
        assert_eq!(decision.nodes, 2);
        assert!(!decision.completed);

        // With room for every root child the capture is found again.
        let decision = Searcher::new(SearchLimits::depth(1).with_max_nodes(1_000)).choose_move(&state);
        assert_eq!(decision.mv, Move::Place((1, 0)));
        assert!(decision.completed);
    }

    #[test]
    fn test_interrupted_deep_search_reports_finished_value() {
        // Depth 2 with a budget that ends inside the second root child: the
        // value must come from the first child's finished subtree.
        let state = GameState::new(4);
        // The root child sits one ply down, so one ply remains below it.
        let mut child = state.clone();
        child.commit_placement((0, 0));
        let mut first = Searcher::new(SearchLimits::depth(1));
        let first_value = first.evaluate(&child);
        let first_nodes = first.nodes;

        let limits = SearchLimits::depth(2).with_max_nodes(first_nodes + 1);
        let decision = Searcher::new(limits).choose_move(&state);
        assert_eq!(decision.mv, Move::Place((0, 0)));
        assert_eq!(decision.value, first_value);
        assert!(!decision.completed);
    }
}
