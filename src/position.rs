//! Game state and move execution.
//!
//! This module provides:
//! - `GameState`, the authoritative board plus the history needed by the ko rule
//! - Stone placement and capture resolution
//! - Pass handling, scoring, and the end-of-game test
//!
//! Legality is decided by [`crate::legality`] on a private clone; this module
//! only commits moves that have already been checked.

use crate::board::{Board, Color, Point};
use crate::groups::{find_dead_stones, remove_stones};
use crate::legality::check_legal;

/// A move: place a stone at `(row, col)` or pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Point),
    Pass,
}

/// Context of the end-of-game test: is the side to move about to place or to pass?
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Move,
    Pass,
}

/// Reason a placement was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Point is off the board
    OutOfBounds,
    /// Point is not empty
    Occupied,
    /// Move would leave its own group without liberties
    Suicide,
    /// Move would recreate the previous board
    Ko,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds => write!(f, "illegal move: point outside the board"),
            MoveError::Occupied => write!(f, "illegal move: point not empty"),
            MoveError::Suicide => write!(f, "illegal move: suicide"),
            MoveError::Ko => write!(f, "illegal move: retakes ko"),
        }
    }
}

impl std::error::Error for MoveError {}

/// A game in progress.
///
/// `previous` always holds the board as it was before the most recent move
/// (placement or pass), or the current board if no move has been made.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current board
    pub board: Board,
    /// Board before the last move
    pub previous: Board,
    /// Side to move
    pub to_move: Color,
    /// Moves made so far, passes included
    pub move_count: usize,
    /// Game ends once `move_count` reaches this
    pub max_moves: usize,
    /// Compensation added to White's stone count
    pub komi: f32,
    /// Stones removed by the last move
    pub last_captured: Vec<Point>,
}

impl GameState {
    /// Empty board of the given size with Black to move.
    pub fn new(size: usize) -> Self {
        let board = Board::new(size);
        Self {
            previous: board.clone(),
            board,
            to_move: Color::Black,
            move_count: 0,
            max_moves: (size * size).saturating_sub(1),
            komi: size as f32 / 2.0,
            last_captured: Vec::new(),
        }
    }

    /// Resume from a position described by the board before the opponent's
    /// last move and the current board.
    ///
    /// Any `to_move` stone present in `previous` but missing from `current`
    /// was captured by that move and is recorded in `last_captured`.
    ///
    /// # Panics
    /// If the two boards differ in size.
    pub fn from_boards(to_move: Color, previous: Board, current: Board) -> Self {
        assert_eq!(
            previous.size(),
            current.size(),
            "previous and current boards differ in size"
        );
        let last_captured: Vec<Point> = previous
            .points()
            .filter(|&pt| previous.get(pt) == Some(to_move) && current.get(pt) != Some(to_move))
            .collect();
        let mut state = Self::new(current.size());
        state.board = current;
        state.previous = previous;
        state.to_move = to_move;
        state.last_captured = last_captured;
        state
    }

    /// Override the move counter, e.g. when resuming a game mid-way.
    pub fn with_move_count(mut self, move_count: usize) -> Self {
        self.move_count = move_count;
        self
    }

    /// Put a stone on the board without checking legality or resolving captures.
    pub fn place_stone(&mut self, pt: Point, color: Color) {
        self.previous = self.board.clone();
        self.board.set(pt, Some(color));
        self.move_count += 1;
    }

    /// Remove opponent stones left without liberties after `color` played.
    ///
    /// The removed points replace `last_captured`. The placing side's own
    /// stones are never removed here.
    pub fn apply_captures_after(&mut self, color: Color) -> &[Point] {
        let dead = find_dead_stones(&self.board, color.opponent());
        remove_stones(&mut self.board, &dead);
        self.last_captured = dead;
        &self.last_captured
    }

    /// Commit an already-checked placement for the side to move.
    pub(crate) fn commit_placement(&mut self, pt: Point) {
        let color = self.to_move;
        self.place_stone(pt, color);
        self.apply_captures_after(color);
        self.to_move = color.opponent();
    }

    /// Pass for the side to move.
    pub fn pass(&mut self) {
        self.previous = self.board.clone();
        self.last_captured.clear();
        self.move_count += 1;
        self.to_move = self.to_move.opponent();
    }

    /// Play a move for the side to move.
    ///
    /// Placements are checked on a private clone first; the state is only
    /// changed if the move is legal.
    pub fn play(&mut self, mv: Move) -> Result<(), MoveError> {
        match mv {
            Move::Pass => self.pass(),
            Move::Place(pt) => {
                check_legal(self, pt, self.to_move)?;
                self.commit_placement(pt);
            }
        }
        Ok(())
    }

    /// Number of `color` stones on the board.
    pub fn score(&self, color: Color) -> usize {
        self.board.count(color)
    }

    /// Winner by stone count with komi for White, `None` on a tie.
    pub fn winner(&self) -> Option<Color> {
        let black = self.score(Color::Black) as f32;
        let white = self.score(Color::White) as f32 + self.komi;
        if black > white {
            Some(Color::Black)
        } else if black < white {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Whether the game is over if the side to move takes `action`.
    ///
    /// The game ends when the move limit is reached, or when passing right
    /// after a pass (the board did not change over the last move).
    pub fn is_terminal(&self, action: Action) -> bool {
        if self.move_count >= self.max_moves {
            return true;
        }
        action == Action::Pass && self.board == self.previous
    }
}
