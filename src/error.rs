//! Error types for puzzle loading and SAT-backed solving.
//!
//! Two conditions are deliberately *not* errors and therefore absent here:
//! an unsatisfiable formula (a puzzle with no solution) and a solver timeout.
//! Both are ordinary terminal outcomes, reported through
//! [`SatOutcome`](crate::sat::backend::SatOutcome) and
//! [`SolveOutcome`](crate::sudoku::solver::SolveOutcome).

use thiserror::Error;

/// Errors raised while loading or constructing a puzzle.
///
/// All of these are detected before the encoder ever runs: the encoder is
/// only invoked on a validated board.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The puzzle file could not be read.
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    /// The first line of a puzzle file did not parse as a board size.
    #[error("invalid board size line {0:?}")]
    InvalidSizeLine(String),

    /// A cell token did not parse as an integer.
    #[error("invalid cell value {0:?}")]
    InvalidCell(String),

    /// The board dimension is not a positive perfect square.
    #[error("board size {0} is not a positive perfect square (4, 9, 16, ...)")]
    NotPerfectSquare(usize),

    /// The grid does not have exactly one row per declared dimension.
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Declared board size.
        expected: usize,
        /// Number of rows actually present.
        found: usize,
    },

    /// A row does not have exactly one cell per declared dimension.
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Declared board size.
        expected: usize,
        /// Number of cells actually present in the row.
        found: usize,
    },

    /// A cell value lies outside `0..=N`.
    #[error("cell ({row},{col}) holds {value}, outside the valid range 0..={max}")]
    CellOutOfRange {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending value.
        value: usize,
        /// Largest permitted value (the board size).
        max: usize,
    },
}

/// Errors raised on the encoding/solving path.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The running conjunction became trivially false while clauses were being
    /// added. For this encoding that signals an encoder bug, not a puzzle
    /// property; conflicting clues surface as an ordinary Unsatisfiable outcome
    /// instead.
    #[error("contradiction while building the formula: {0}")]
    Contradiction(String),

    /// A literal referenced a variable outside the declared range. Raised both
    /// for clauses handed to the backend and for positive literals found in a
    /// returned model: a conforming encoder/backend pair never produces one,
    /// so this is a fatal adapter bug rather than something to ignore.
    #[error("literal {literal} is outside the declared variable range 1..={declared}")]
    LiteralOutOfRange {
        /// The offending literal.
        literal: i32,
        /// Number of declared variables.
        declared: usize,
    },

    /// The SAT backend failed for a reason other than UNSAT or timeout.
    #[error("SAT backend failure: {0}")]
    Backend(String),
}
