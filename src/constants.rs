//! Game and search constants.
//!
//! The rules engine works for any n×n board; these values configure the
//! reference 5×5 instance used by the agent and the CLI.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN) used by the agent and the input/output records.
pub const N: usize = 5;

// =============================================================================
// Scoring
// =============================================================================

/// Score of a finished game won by Black. White wins score `-WIN_SCORE`.
pub const WIN_SCORE: i32 = 100;

/// Score of a drawn game.
pub const TIE_SCORE: i32 = 0;

/// Surrogate for infinity in the alpha-beta window.
///
/// Any real score lies strictly inside `(-INFINITY, INFINITY)`.
pub const INFINITY: i32 = 1_000_000;

// =============================================================================
// Search Parameters
// =============================================================================

/// Default search depth in plies for the CLI.
pub const DEFAULT_DEPTH: usize = 4;

/// Depth used by the self-play demo.
pub const DEMO_DEPTH: usize = 2;

// =============================================================================
// I/O Defaults
// =============================================================================

/// Default location of the input record.
pub const DEFAULT_INPUT_PATH: &str = "init/input.txt";

/// Default location of the output record.
pub const DEFAULT_OUTPUT_PATH: &str = "init/output.txt";

/// Output token for a pass.
pub const PASS_TOKEN: &str = "PASS";
