//! Input and output records.
//!
//! ## Input
//!
//! ```text
//! 1        side to move: 1 = Black, 2 = White
//! 00000    n rows: the board before the opponent's last move
//! 00100
//! ...
//! 00000    n rows: the current board
//! 00100
//! ...
//! ```
//!
//! Cells are `0` (empty), `1` (Black) or `2` (White).
//!
//! ## Output
//!
//! `PASS`, or the chosen point as `row,col`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::board::{Board, Color};
use crate::constants::PASS_TOKEN;
use crate::position::{GameState, Move};

/// Parse an input record for an `n`×`n` board.
pub fn parse_input(text: &str, n: usize) -> Result<(Color, Board, Board)> {
    let mut lines = text.lines().map(|l| l.trim_end_matches('\r'));

    let side_line = lines.next().context("input is empty")?;
    let to_move = side_line
        .trim()
        .parse::<u8>()
        .ok()
        .and_then(Color::from_code)
        .with_context(|| format!("invalid side to move {side_line:?}, expected 1 or 2"))?;

    let previous = parse_grid(&mut lines, n).context("invalid previous board")?;
    let current = parse_grid(&mut lines, n).context("invalid current board")?;

    if let Some((i, extra)) = lines.enumerate().find(|(_, l)| !l.trim().is_empty()) {
        bail!(
            "unexpected line {} after the boards: {extra:?}",
            2 * n + 2 + i
        );
    }
    Ok((to_move, previous, current))
}

fn parse_grid<'a>(lines: &mut impl Iterator<Item = &'a str>, n: usize) -> Result<Board> {
    let mut rows = Vec::with_capacity(n);
    for row in 0..n {
        let line = lines
            .next()
            .with_context(|| format!("expected {n} rows, found {row}"))?
            .trim();
        if line.chars().count() != n {
            bail!("row {row} has {} cells, expected {n}: {line:?}", line.chars().count());
        }
        let cells = line
            .chars()
            .enumerate()
            .map(|(col, c)| match c {
                '0' => Ok(None),
                '1' => Ok(Some(Color::Black)),
                '2' => Ok(Some(Color::White)),
                other => bail!("cell ({row},{col}) is {other:?}, expected 0, 1 or 2"),
            })
            .collect::<Result<Vec<_>>>()?;
        rows.push(cells);
    }
    Board::from_rows(&rows).context("board is not square")
}

/// Read an input record from `path` and build the game state it describes.
pub fn read_input(path: &Path, n: usize) -> Result<GameState> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input file {}", path.display()))?;
    let (to_move, previous, current) =
        parse_input(&text, n).with_context(|| format!("malformed input file {}", path.display()))?;
    Ok(GameState::from_boards(to_move, previous, current))
}

/// Render a move as an output record.
pub fn format_move(mv: Move) -> String {
    match mv {
        Move::Pass => PASS_TOKEN.to_string(),
        Move::Place((row, col)) => format!("{row},{col}"),
    }
}

/// Write the output record for `mv` to `path`, creating parent directories.
pub fn write_output(path: &Path, mv: Move) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create directory {}", dir.display()))?;
    }
    fs::write(path, format_move(mv))
        .with_context(|| format!("failed to write output file {}", path.display()))
}
