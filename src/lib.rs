#![deny(missing_docs)]
//! This crate solves N×N Sudoku puzzles (N a perfect square) by reducing them to
//! Boolean satisfiability and handing the search to an external SAT backend.

/// The `error` module defines the error taxonomy shared by the puzzle and solving layers.
pub mod error;

/// The `sat` module holds the CNF formula container and the SAT backend boundary.
pub mod sat;

/// The `sudoku` module implements the reduction core: board, variable indexing,
/// constraint encoding, model decoding, and the solve pipeline.
pub mod sudoku;
