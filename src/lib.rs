//! Little-Go: rules engine and minimax agent for small-board Go.
//!
//! The rules engine works on any n×n board: groups and liberties, captures,
//! suicide and ko, and scoring by stone count with komi for White. The agent
//! searches the game tree with minimax and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`constants`] - Board size, scores, and search defaults
//! - [`board`] - 2D board representation
//! - [`groups`] - Connected groups, liberties, dead stones
//! - [`position`] - Game state, move execution, scoring, end of game
//! - [`legality`] - Move legality (occupancy, suicide, ko)
//! - [`search`] - Minimax with alpha-beta pruning
//! - [`io`] - Input and output records
//!
//! ## Example
//!
//! ```
//! use little_go::position::{GameState, Move};
//! use little_go::search::{SearchLimits, Searcher};
//!
//! // Create a new game and play a move
//! let mut state = GameState::new(5);
//! state.play(Move::Place((2, 2))).unwrap();
//!
//! // Search two plies deep for White's answer
//! let decision = Searcher::new(SearchLimits::depth(2)).choose_move(&state);
//! println!("Best move: {:?}", decision.mv);
//! ```

pub mod board;
pub mod constants;
pub mod groups;
pub mod io;
pub mod legality;
pub mod position;
pub mod search;
