#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Sudoku-to-SAT reduction: the validated board, the variable bijection, the
//! constraint encoder, the model decoder, and the solve pipeline tying them
//! to a SAT backend.

/// The `board` module provides the validated puzzle grid and full-grid validator.
pub mod board;

/// The `decode` module reconstructs a solved grid from a satisfying model.
pub mod decode;

/// The `encode` module generates the CNF constraint families.
pub mod encode;

/// The `parse` module loads puzzles from the text file format.
pub mod parse;

/// The `solver` module runs the encode → solve → decode pipeline.
pub mod solver;

/// The `variable` module maps (row, col, value) triples to variable ids and back.
pub mod variable;
