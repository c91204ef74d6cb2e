//! A parser for the puzzle text format.
//!
//! The format is a single integer board size N on the first line, followed by
//! N lines of N whitespace-separated integers in `[0, N]`, where 0 denotes an
//! empty cell. Blank lines are ignored. Everything malformed — a bad size
//! line, wrong row or column counts, out-of-range or non-numeric cells — is
//! rejected here or by [`Sudoku::new`], before the encoder ever runs.

use crate::error::PuzzleError;
use crate::sudoku::board::Sudoku;
use itertools::Itertools;
use std::io::{self, BufRead};
use std::path::Path;

/// Parses a puzzle from a `BufRead` source.
///
/// # Errors
///
/// Returns a [`PuzzleError`] for I/O failures, a malformed size line, a wrong
/// number of rows, or any grid defect caught by [`Sudoku::new`].
pub fn parse_puzzle<R: BufRead>(reader: R) -> Result<Sudoku, PuzzleError> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push(line);
        }
    }

    let Some((size_line, rows)) = lines.split_first() else {
        return Err(PuzzleError::InvalidSizeLine(String::new()));
    };
    let size: usize = size_line
        .trim()
        .parse()
        .map_err(|_| PuzzleError::InvalidSizeLine(size_line.clone()))?;

    if rows.len() != size {
        return Err(PuzzleError::RowCount {
            expected: size,
            found: rows.len(),
        });
    }

    let board: Vec<Vec<usize>> = rows
        .iter()
        .map(|row| {
            row.split_whitespace()
                .map(|token| {
                    token
                        .parse::<usize>()
                        .map_err(|_| PuzzleError::InvalidCell(token.to_string()))
                })
                .try_collect()
        })
        .try_collect()?;

    Sudoku::new(board)
}

/// Parses a puzzle from an in-memory string, e.g. a bundled sample.
///
/// # Errors
///
/// Same conditions as [`parse_puzzle`].
pub fn parse_str(input: &str) -> Result<Sudoku, PuzzleError> {
    parse_puzzle(input.as_bytes())
}

/// Parses a puzzle file from disk.
///
/// # Errors
///
/// Same conditions as [`parse_puzzle`], plus failure to open the file.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Sudoku, PuzzleError> {
    let file = std::fs::File::open(path)?;
    parse_puzzle(io::BufReader::new(file))
}
